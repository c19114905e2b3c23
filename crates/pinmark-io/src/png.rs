//! PNG encoding for rendered canvases

use crate::canvas::Canvas;
use crate::{IoError, IoResult};
use png::{BitDepth, ColorType, Encoder};
use std::io::Write;

/// Write a canvas as an 8-bit RGB PNG
pub fn write_png<W: Write>(canvas: &Canvas, writer: W) -> IoResult<()> {
    let mut encoder = Encoder::new(writer, canvas.width(), canvas.height());
    encoder.set_color(ColorType::Rgb);
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {}", e)))?;

    writer
        .write_image_data(&canvas.to_rgb_bytes())
        .map_err(|e| IoError::EncodeError(format!("PNG data error: {}", e)))?;

    writer
        .finish()
        .map_err(|e| IoError::EncodeError(format!("PNG finish error: {}", e)))?;

    Ok(())
}
