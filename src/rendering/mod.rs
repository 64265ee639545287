//! Rendering pipeline: gradient, captions, device mockup, PNG encoding

pub mod canvas;
pub mod gradient;
pub mod layout;
pub mod mockup;
pub mod raster;
pub mod text;

use image::RgbImage;
use sha2::{Digest, Sha256};

/// One rendered screenshot: the pixels plus their PNG encoding.
#[derive(Debug, Clone)]
pub struct Screenshot {
    pub width: u32,
    pub height: u32,
    pub image: RgbImage,
    pub png_data: Vec<u8>,
}

impl Screenshot {
    /// Hex SHA-256 of the encoded PNG; equal digests mean identical files.
    pub fn sha256_hex(&self) -> String {
        hex::encode(Sha256::digest(&self.png_data))
    }
}
