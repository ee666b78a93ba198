//! QR symbol rendering for product codes.

use std::io::Cursor;

use image::{DynamicImage, ImageFormat, Luma};
use qrcode::{EcLevel, QrCode};

use crate::domain::error::ProductError;

/// Pixels per QR module in the rendered image.
const MODULE_PIXELS: u32 = 8;

/// Encode `text` as a QR symbol at error-correction level Q and render it to
/// a PNG byte buffer.
pub fn encode_png(text: &str) -> Result<Vec<u8>, ProductError> {
    let symbol = QrCode::with_error_correction_level(text.as_bytes(), EcLevel::Q)
        .map_err(|error| ProductError::QrRender(error.to_string()))?;

    let bitmap = symbol
        .render::<Luma<u8>>()
        .module_dimensions(MODULE_PIXELS, MODULE_PIXELS)
        .build();

    let mut buffer = Cursor::new(Vec::new());
    DynamicImage::ImageLuma8(bitmap)
        .write_to(&mut buffer, ImageFormat::Png)
        .map_err(|error| ProductError::QrRender(error.to_string()))?;

    Ok(buffer.into_inner())
}
