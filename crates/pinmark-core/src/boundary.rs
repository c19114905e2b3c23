//! Circular admission boundary in original space

use crate::error::{Error, Result};

/// Default boundary radius, in original-space units (image pixels).
pub const DEFAULT_RADIUS: f64 = 40.0;

/// A circle centered at the origin of original space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundaryRegion {
    radius: f64,
}

impl Default for BoundaryRegion {
    fn default() -> Self {
        Self {
            radius: DEFAULT_RADIUS,
        }
    }
}

impl BoundaryRegion {
    /// Create a boundary with the given radius.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] unless `radius` is finite and
    /// positive.
    pub fn new(radius: f64) -> Result<Self> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(Error::InvalidParameter(format!(
                "boundary radius must be finite and positive: {radius}"
            )));
        }
        Ok(Self { radius })
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Return `true` if `(x, y)` lies inside or on the circle.
    ///
    /// NaN coordinates are never contained.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x * x + y * y <= self.radius * self.radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_radius() {
        assert!(BoundaryRegion::new(0.0).is_err());
        assert!(BoundaryRegion::new(-1.0).is_err());
        assert!(BoundaryRegion::new(f64::NAN).is_err());
        assert!(BoundaryRegion::new(f64::INFINITY).is_err());
    }

    #[test]
    fn test_contains_is_inclusive() {
        let b = BoundaryRegion::default();
        assert!(b.contains(0.0, 0.0));
        assert!(b.contains(40.0, 0.0));
        assert!(b.contains(24.0, -32.0));
        assert!(!b.contains(40.000_001, 0.0));
        assert!(!b.contains(f64::NAN, 0.0));
    }
}
