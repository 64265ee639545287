//! Static catalog: the device targets and screen descriptors rendered by default
//!
//! Everything here is compiled-in data. Callers that need a subset (the CLI
//! `--device` filter, tests rendering at small sizes) build their own slices
//! from these types.

pub mod device;
pub mod screen;

pub use device::{find_device, DeviceClass, DeviceTarget, DEVICES};
pub use screen::{Color, MockupKind, ScreenDescriptor, SCREENS};
