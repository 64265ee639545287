//! storeshots
//!
//! Procedurally draws the App Store marketing screenshots for AI News Today:
//! a vertical gradient, a centered caption and subtitle, and a stylized device
//! mockup showing one of five app screens. Every (device × screen) pair becomes
//! one PNG under `<output>/<device>/<NN>_<tag>.png`.
//!
//! Rendering is deterministic: the same inputs and fonts always produce
//! byte-identical files, so re-running simply overwrites the previous output.
//!
//! # Example
//!
//! ```no_run
//! use storeshots::{RenderConfig, generate};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = RenderConfig {
//!     output_dir: "target/screens".into(),
//!     ..Default::default()
//! };
//! let report = generate(&config, |f| println!("wrote {}", f.file))?;
//! println!("{} screenshots", report.files.len());
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};

use log::info;

pub mod catalog;
pub mod error;
pub mod output;
pub mod rendering;

pub use catalog::{DeviceClass, DeviceTarget, MockupKind, ScreenDescriptor, DEVICES, SCREENS};
pub use error::{Error, Result};
pub use output::GeneratedFile;
pub use rendering::text::{FontBook, FontCandidates};
pub use rendering::Screenshot;

/// What to render and where
///
/// The defaults reproduce a plain `storeshots` run: every catalog device and
/// screen, written to `generated/` next to the crate manifest, system fonts
/// when available.
///
/// ```
/// let cfg = storeshots::RenderConfig::default();
/// assert_eq!(cfg.devices.len(), 4);
/// assert_eq!(cfg.screens.len(), 5);
/// assert!(cfg.output_dir.ends_with("generated"));
/// ```
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Root directory; one subdirectory per device is created beneath it
    pub output_dir: PathBuf,
    pub devices: Vec<DeviceTarget>,
    pub screens: Vec<ScreenDescriptor>,
    /// Font files tried in order before falling back to the built-in font
    pub fonts: FontCandidates,
    /// Also write `manifest.json` with digests of every file
    pub write_manifest: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            devices: DEVICES.to_vec(),
            screens: SCREENS.to_vec(),
            fonts: FontCandidates::default(),
            write_manifest: false,
        }
    }
}

/// `generated/` beside this crate's `Cargo.toml`.
pub fn default_output_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("generated")
}

/// Outcome of a [`generate`] run.
#[derive(Debug, Clone)]
pub struct Report {
    pub output_dir: PathBuf,
    pub files: Vec<GeneratedFile>,
    pub manifest: Option<PathBuf>,
}

/// Render every configured (device × screen) pair and write it to disk.
///
/// `on_file` is invoked after each file is written, in device-major order.
/// The first I/O or encoding failure aborts the run.
pub fn generate<F>(config: &RenderConfig, mut on_file: F) -> Result<Report>
where
    F: FnMut(&GeneratedFile),
{
    let fonts = FontBook::resolve(&config.fonts);
    output::ensure_dir(&config.output_dir)?;

    let mut files = Vec::with_capacity(config.devices.len() * config.screens.len());
    for device in &config.devices {
        let dir = output::device_dir(&config.output_dir, device);
        output::ensure_dir(&dir)?;

        for (index, screen) in config.screens.iter().enumerate() {
            let shot = rendering::raster::rasterize(device, screen, &fonts)?;
            let name = output::file_name(index, screen.mockup);
            let path = dir.join(&name);
            output::write_screenshot(&path, &shot)?;
            info!("wrote {} ({} bytes)", path.display(), shot.png_data.len());

            let file = GeneratedFile {
                device: device.name,
                class: device.class,
                mockup: screen.mockup,
                file: format!("{}/{}", device.name, name),
                width: shot.width,
                height: shot.height,
                sha256: shot.sha256_hex(),
                path,
            };
            on_file(&file);
            files.push(file);
        }
    }

    let manifest = if config.write_manifest {
        Some(output::write_manifest(&config.output_dir, &files)?)
    } else {
        None
    };

    Ok(Report {
        output_dir: config.output_dir.clone(),
        files,
        manifest,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RenderConfig::default();
        assert_eq!(config.devices[0].name, "iPhone_6.7");
        assert_eq!(config.screens[0].mockup, MockupKind::Feed);
        assert!(!config.write_manifest);
        assert!(!config.fonts.bold.is_empty());
    }

    #[test]
    fn generate_reports_each_file_once() {
        let tmp = tempfile::tempdir().unwrap();
        let config = RenderConfig {
            output_dir: tmp.path().to_path_buf(),
            devices: vec![DeviceTarget::new("tiny", 90, 180, DeviceClass::Phone)],
            screens: SCREENS[..2].to_vec(),
            fonts: FontCandidates::none(),
            write_manifest: false,
        };
        let mut seen = Vec::new();
        let report = generate(&config, |f| seen.push(f.file.clone())).unwrap();
        assert_eq!(seen, vec!["tiny/01_feed.png", "tiny/02_topics.png"]);
        assert_eq!(report.files.len(), 2);
        assert!(report.manifest.is_none());
        assert!(report.files.iter().all(|f| f.path.is_file()));
    }
}
