//! Image header reading
//!
//! Only the image dimensions matter to a session: the image is displayed
//! centered on the origin and the dimensions fix its extent. Pixel data is
//! left to the renderer.
//!
//! [`read_image_extent`] accepts any format the `image` crate decodes
//! (PNG, JPEG, GIF, BMP, TIFF, WebP) and detects it from the file contents.
//! [`read_png_extent`] reads a PNG header from an in-memory or streaming
//! source.

use crate::{IoError, IoResult};
use pinmark_core::ImageExtent;
use image::ImageReader;
use png::Decoder;
use std::io::{BufRead, Seek};
use std::path::Path;

/// Read the extent of a PNG image from a reader
pub fn read_png_extent<R: BufRead + Seek>(reader: R) -> IoResult<ImageExtent> {
    let decoder = Decoder::new(reader);
    let reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {}", e)))?;

    let info = reader.info();
    Ok(ImageExtent::new(info.width, info.height)?)
}

/// Read the extent of an image file in any supported format
pub fn read_image_extent<P: AsRef<Path>>(path: P) -> IoResult<ImageExtent> {
    let (width, height) = ImageReader::open(path.as_ref())?
        .with_guessed_format()?
        .into_dimensions()
        .map_err(|e| IoError::DecodeError(format!("image decode error: {}", e)))?;
    let extent = ImageExtent::new(width, height)?;
    log::debug!(
        "read {}: {}x{}",
        path.as_ref().display(),
        extent.width(),
        extent.height()
    );
    Ok(extent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::Canvas;
    use crate::png::write_png;
    use std::io::Cursor;

    #[test]
    fn test_read_extent_roundtrip() {
        let canvas = Canvas::new(37, 21).unwrap();
        let mut buf = Vec::new();
        write_png(&canvas, &mut buf).unwrap();

        let extent = read_png_extent(Cursor::new(buf)).unwrap();
        assert_eq!((extent.width(), extent.height()), (37, 21));
    }

    #[test]
    fn test_read_image_extent_formats() {
        let dir = std::env::temp_dir().join(format!("pinmark-image-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();

        let rgb = image::RgbImage::new(30, 20);
        for name in ["sample.jpg", "sample.bmp", "sample.tif"] {
            let path = dir.join(name);
            rgb.save(&path).unwrap();
            let extent = read_image_extent(&path).unwrap();
            assert_eq!((extent.width(), extent.height()), (30, 20), "{name}");
        }

        // Format is detected from the contents, not the file name
        let mut buf = Vec::new();
        write_png(&Canvas::new(8, 5).unwrap(), &mut buf).unwrap();
        let path = dir.join("no_extension");
        std::fs::write(&path, &buf).unwrap();
        let extent = read_image_extent(&path).unwrap();
        assert_eq!((extent.width(), extent.height()), (8, 5));

        let path = dir.join("garbage.png");
        std::fs::write(&path, b"not an image").unwrap();
        assert!(matches!(
            read_image_extent(&path),
            Err(IoError::DecodeError(_))
        ));

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_read_garbage_fails() {
        let err = read_png_extent(Cursor::new(b"not a png".to_vec())).unwrap_err();
        assert!(matches!(err, IoError::DecodeError(_)));
    }
}
