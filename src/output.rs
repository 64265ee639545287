//! Output layout: `<root>/<device>/<NN>_<tag>.png` plus an optional manifest

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::catalog::{DeviceClass, DeviceTarget, MockupKind};
use crate::rendering::Screenshot;
use crate::{Error, Result};

pub const MANIFEST_FILE: &str = "manifest.json";

/// File name for the screen at zero-based `index`: `01_feed.png`, `02_topics.png`, ...
pub fn file_name(index: usize, mockup: MockupKind) -> String {
    format!("{:02}_{}.png", index + 1, mockup.tag())
}

pub fn device_dir(root: &Path, device: &DeviceTarget) -> PathBuf {
    root.join(device.name)
}

/// Create `dir` and its parents; succeeds if it already exists.
pub fn ensure_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|e| Error::io(dir, e))
}

/// Write the PNG bytes, replacing any previous file.
pub fn write_screenshot(path: &Path, shot: &Screenshot) -> Result<()> {
    fs::write(path, &shot.png_data).map_err(|e| Error::io(path, e))
}

/// Record of one written screenshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedFile {
    pub device: &'static str,
    pub class: DeviceClass,
    pub mockup: MockupKind,
    /// Path relative to the output root, `/`-separated
    pub file: String,
    pub width: u32,
    pub height: u32,
    pub sha256: String,
    #[serde(skip)]
    pub path: PathBuf,
}

#[derive(Debug, Serialize)]
pub struct Manifest<'a> {
    pub generator: &'static str,
    pub version: &'static str,
    pub files: &'a [GeneratedFile],
}

impl<'a> Manifest<'a> {
    pub fn new(files: &'a [GeneratedFile]) -> Self {
        Self {
            generator: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            files,
        }
    }
}

/// Write `<root>/manifest.json` and return its path.
pub fn write_manifest(root: &Path, files: &[GeneratedFile]) -> Result<PathBuf> {
    let path = root.join(MANIFEST_FILE);
    let json = serde_json::to_string_pretty(&Manifest::new(files))?;
    fs::write(&path, json).map_err(|e| Error::io(&path, e))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::DEVICES;

    #[test]
    fn file_names_are_one_based_and_zero_padded() {
        assert_eq!(file_name(0, MockupKind::Feed), "01_feed.png");
        assert_eq!(file_name(3, MockupKind::Notifications), "04_notifications.png");
        assert_eq!(file_name(11, MockupKind::Summary), "12_summary.png");
    }

    #[test]
    fn device_dir_uses_device_name() {
        let dir = device_dir(Path::new("/out"), &DEVICES[3]);
        assert_eq!(dir, PathBuf::from("/out/iPad_12.9"));
    }

    #[test]
    fn ensure_dir_is_idempotent() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("a").join("b");
        ensure_dir(&dir).unwrap();
        ensure_dir(&dir).unwrap();
        assert!(dir.is_dir());
    }

    #[test]
    fn manifest_lists_files() {
        let tmp = tempfile::tempdir().unwrap();
        let files = vec![GeneratedFile {
            device: "iPhone_6.7",
            class: DeviceClass::Phone,
            mockup: MockupKind::Feed,
            file: "iPhone_6.7/01_feed.png".into(),
            width: 1290,
            height: 2796,
            sha256: "00".repeat(32),
            path: tmp.path().join("iPhone_6.7/01_feed.png"),
        }];
        let path = write_manifest(tmp.path(), &files).unwrap();
        let v: serde_json::Value = serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();
        assert_eq!(v["generator"], "storeshots");
        assert_eq!(v["files"][0]["file"], "iPhone_6.7/01_feed.png");
        assert_eq!(v["files"][0]["class"], "phone");
        assert_eq!(v["files"][0]["mockup"], "feed");
        assert!(v["files"][0].get("path").is_none());
    }
}
