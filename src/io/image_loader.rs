//! Connector image decoding.
//!
//! Images are decoded on background threads into raw RGBA buffers; the
//! UI thread turns them into egui textures when the decode event lands.

use anyhow::{Context, Result};
use std::path::Path;

use pinscope::SampleImage;

/// A decoded RGBA image ready for texture upload.
pub struct DecodedImage {
    pub width: usize,
    pub height: usize,
    pub rgba: Vec<u8>,
}

impl DecodedImage {
    /// Converts the buffer into an egui image for texture upload.
    pub fn to_color_image(&self) -> egui::ColorImage {
        egui::ColorImage::from_rgba_unmultiplied([self.width, self.height], &self.rgba)
    }
}

impl From<SampleImage> for DecodedImage {
    fn from(sample: SampleImage) -> Self {
        DecodedImage {
            width: sample.width,
            height: sample.height,
            rgba: sample.rgba,
        }
    }
}

/// Decodes a connector image file (PNG or JPEG) into RGBA pixels.
pub fn decode_image(path: &Path) -> Result<DecodedImage> {
    let dynamic = image::open(path)
        .with_context(|| format!("failed to decode connector image {}", path.display()))?;
    let rgba = dynamic.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(DecodedImage {
        width: width as usize,
        height: height as usize,
        rgba: rgba.into_raw(),
    })
}

/// Holds the state of an async document loading operation.
///
/// Only the in_progress flag is shared; results come through a channel.
/// This struct is wrapped in an `Arc<Mutex<>>` to allow safe sharing
/// between the main thread and the background parse thread.
pub struct LoadingState {
    /// True while the document parse is running.
    pub in_progress: bool,
}

impl LoadingState {
    pub fn new() -> Self {
        Self { in_progress: false }
    }
}

impl Default for LoadingState {
    fn default() -> Self {
        Self::new()
    }
}
