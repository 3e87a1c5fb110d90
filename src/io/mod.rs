//! I/O modules for pinout loading and image decoding.

pub mod image_loader;
pub mod async_loader;

// Re-export commonly used types
pub use async_loader::{AsyncLoader, LoadEvent};
pub use image_loader::{DecodedImage, LoadingState};
