//! Centered image extent
//!
//! A loaded image is shown with its center at the origin of data space,
//! covering `(-w/2, w/2)` horizontally and `(-h/2, h/2)` vertically with
//! y pointing up. Raster rows run top to bottom, so the data-to-pixel
//! mapping flips the y axis.

use crate::affine::AffineMatrix;
use crate::error::{Error, Result};

/// Pixel dimensions of the loaded image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageExtent {
    width: u32,
    height: u32,
}

impl ImageExtent {
    /// Create an extent from image dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if either dimension is zero.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidParameter(format!(
                "image dimensions must be non-zero: {width}x{height}"
            )));
        }
        Ok(Self { width, height })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Data-space bounds as `(left, right, bottom, top)`.
    pub fn bounds(&self) -> (f64, f64, f64, f64) {
        let hw = f64::from(self.width) / 2.0;
        let hh = f64::from(self.height) / 2.0;
        (-hw, hw, -hh, hh)
    }

    /// Mapping from centered, y-up data space to raster pixel coordinates.
    pub fn data_to_pixel(&self) -> AffineMatrix {
        let (_, right, _, top) = self.bounds();
        AffineMatrix::from_coeffs([1.0, 0.0, right, 0.0, -1.0, top])
    }
}
