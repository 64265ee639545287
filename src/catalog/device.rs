/// Device targets: named App Store screenshot resolutions

use serde::Serialize;

use crate::{Error, Result};

/// Size class of a device target; tablets get a wider, shorter mockup frame
/// and slightly smaller type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceClass {
    Phone,
    Tablet,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceTarget {
    /// Directory name under the output root
    pub name: &'static str,
    pub width: u32,
    pub height: u32,
    pub class: DeviceClass,
}

impl DeviceTarget {
    pub const fn new(name: &'static str, width: u32, height: u32, class: DeviceClass) -> Self {
        Self {
            name,
            width,
            height,
            class,
        }
    }

    pub fn is_tablet(&self) -> bool {
        self.class == DeviceClass::Tablet
    }
}

pub const DEVICES: [DeviceTarget; 4] = [
    DeviceTarget::new("iPhone_6.7", 1290, 2796, DeviceClass::Phone),
    DeviceTarget::new("iPhone_6.5", 1284, 2778, DeviceClass::Phone),
    DeviceTarget::new("iPhone_5.5", 1242, 2208, DeviceClass::Phone),
    DeviceTarget::new("iPad_12.9", 2048, 2732, DeviceClass::Tablet),
];

/// Look up a catalog device by its exact name.
pub fn find_device(name: &str) -> Result<DeviceTarget> {
    DEVICES
        .iter()
        .find(|d| d.name == name)
        .copied()
        .ok_or_else(|| Error::UnknownDevice {
            name: name.to_string(),
            known: DEVICES
                .iter()
                .map(|d| d.name)
                .collect::<Vec<_>>()
                .join(", "),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_device_by_name() {
        let d = find_device("iPhone_6.7").unwrap();
        assert_eq!((d.width, d.height), (1290, 2796));
        assert!(!d.is_tablet());
        assert!(find_device("iPad_12.9").unwrap().is_tablet());
    }

    #[test]
    fn unknown_device_is_an_error() {
        let err = find_device("Pixel_7").unwrap_err();
        match err {
            Error::UnknownDevice { name, known } => {
                assert_eq!(name, "Pixel_7");
                assert!(known.contains("iPhone_5.5"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
