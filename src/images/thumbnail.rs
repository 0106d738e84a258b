//! Thumbnail generation with a fit-and-crop resize policy.
//!
//! The source is scaled to fully cover the target box, center-cropped to the
//! exact dimensions, and re-encoded as lossy JPEG at the configured quality.

use std::io::Cursor;

use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use pixshelf_common::{Error, Result};

use crate::config::ThumbnailConfig;

/// Generate thumbnail bytes for the given image bytes.
///
/// Fails with `InvalidInput` when the source bytes are empty or cannot be
/// decoded as an image.
pub fn generate(data: &[u8], config: &ThumbnailConfig) -> Result<Vec<u8>> {
    if data.is_empty() {
        return Err(Error::invalid_input("image data is empty"));
    }

    let img = image::load_from_memory(data)
        .map_err(|e| Error::invalid_input(format!("failed to decode image: {}", e)))?;

    // Fit-and-crop: scale to cover the target box, then center-crop.
    // JPEG has no alpha channel, so flatten to RGB before encoding.
    let thumb = img
        .resize_to_fill(config.width, config.height, FilterType::Lanczos3)
        .to_rgb8();

    let mut buf = Cursor::new(Vec::new());
    let mut encoder = JpegEncoder::new_with_quality(&mut buf, config.quality);
    encoder
        .encode_image(&thumb)
        .map_err(|e| Error::internal(format!("failed to encode thumbnail: {}", e)))?;

    Ok(buf.into_inner())
}
