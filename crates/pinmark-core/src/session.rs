//! Annotation session
//!
//! A [`Session`] owns the rotation state and the point collection for one
//! loaded image. All mutation goes through `&mut Session`; there is no
//! shared or global state.

use crate::affine::AffineMatrix;
use crate::boundary::{BoundaryRegion, DEFAULT_RADIUS};
use crate::collection::PointCollection;
use crate::error::Result;
use crate::extent::ImageExtent;
use crate::point::{Point, Selection};
use crate::rotation::{RotationState, TransformEngine};

/// Session configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionConfig {
    /// Radius of the admission circle in original-space units
    pub boundary_radius: f64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            boundary_radius: DEFAULT_RADIUS,
        }
    }
}

impl SessionConfig {
    /// Set the boundary radius
    pub fn boundary_radius(mut self, radius: f64) -> Self {
        self.boundary_radius = radius;
        self
    }
}

/// Rotation, boundary and admitted points for one image.
#[derive(Debug, Clone, Default)]
pub struct Session {
    engine: TransformEngine,
    boundary: BoundaryRegion,
    points: PointCollection,
}

impl Session {
    /// Create a session with no image loaded.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`](crate::Error::InvalidParameter) if
    /// the configured radius is not finite and positive.
    pub fn new(config: SessionConfig) -> Result<Self> {
        Ok(Self {
            engine: TransformEngine::new(),
            boundary: BoundaryRegion::new(config.boundary_radius)?,
            points: PointCollection::new(),
        })
    }

    /// Create a session for a loaded image.
    pub fn with_image(extent: ImageExtent, config: SessionConfig) -> Result<Self> {
        let mut session = Self::new(config)?;
        session.engine.load_extent(extent);
        Ok(session)
    }

    /// Load a new image: rotation goes back to zero and points are dropped.
    pub fn load_image(&mut self, extent: ImageExtent) {
        self.engine.load_extent(extent);
        self.points.clear();
        log::debug!("loaded image {}x{}", extent.width(), extent.height());
    }

    pub fn image_extent(&self) -> Option<ImageExtent> {
        self.engine.extent()
    }

    pub fn boundary(&self) -> &BoundaryRegion {
        &self.boundary
    }

    pub fn engine(&self) -> &TransformEngine {
        &self.engine
    }

    pub fn rotation(&self) -> RotationState {
        self.engine.rotation()
    }

    /// Set the display rotation in degrees.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRotation`](crate::Error::InvalidRotation) for
    /// NaN or infinite angles.
    pub fn set_rotation(&mut self, angle_degrees: f64) -> Result<()> {
        self.engine.set_rotation(angle_degrees)
    }

    /// See [`TransformEngine::display_to_original`].
    pub fn display_to_original(&self, x_disp: f64, y_disp: f64) -> (f64, f64) {
        self.engine.display_to_original(x_disp, y_disp)
    }

    /// See [`TransformEngine::forward_transform`].
    pub fn forward_transform(&self) -> AffineMatrix {
        self.engine.forward_transform()
    }

    /// Validate raw attributes, then admit an original-space point.
    ///
    /// Returns `Ok(None)` when the point falls outside the boundary.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidAttribute`](crate::Error::InvalidAttribute)
    /// when `color` is not a palette name or `size` is outside `1..=5`. The
    /// collection is unchanged in that case.
    pub fn try_admit(
        &mut self,
        x_orig: f64,
        y_orig: f64,
        color: &str,
        size: i64,
    ) -> Result<Option<Point>> {
        let selection = Selection::parse(color, size)?;
        Ok(self.admit(x_orig, y_orig, &selection))
    }

    /// Admit an original-space point with an already validated selection.
    ///
    /// The boundary test uses the unrounded coordinates; the stored point
    /// is quantized to two decimals.
    pub fn admit(&mut self, x_orig: f64, y_orig: f64, selection: &Selection) -> Option<Point> {
        if !self.boundary.contains(x_orig, y_orig) {
            log::debug!("rejected ({x_orig}, {y_orig}): outside boundary");
            return None;
        }

        let point = Point::quantized(x_orig, y_orig, selection);
        self.points.push(point);
        log::debug!(
            "admitted {} ({}, {}) size {}",
            point.color(),
            point.x(),
            point.y(),
            point.size()
        );
        Some(point)
    }

    /// Handle a click given in display space.
    pub fn click(&mut self, x_disp: f64, y_disp: f64, selection: &Selection) -> Option<Point> {
        let (x_orig, y_orig) = self.engine.display_to_original(x_disp, y_disp);
        self.admit(x_orig, y_orig, selection)
    }

    /// Read-only view of the admitted points in insertion order.
    pub fn snapshot(&self) -> &[Point] {
        self.points.snapshot()
    }

    pub fn points(&self) -> &PointCollection {
        &self.points
    }

    /// Drop all admitted points, keeping image and rotation.
    pub fn reset(&mut self) {
        self.points.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::point::{MarkerSize, PaletteColor};

    #[test]
    fn test_invalid_config() {
        let config = SessionConfig::default().boundary_radius(-5.0);
        assert!(matches!(
            Session::new(config),
            Err(Error::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_try_admit_invalid_size_leaves_collection() {
        let mut session = Session::default();
        let err = session.try_admit(1.0, 1.0, "Red", 9).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidAttribute {
                attribute: "size",
                ..
            }
        ));
        assert!(session.snapshot().is_empty());
    }

    #[test]
    fn test_invalid_attribute_checked_before_boundary() {
        // Even a point outside the circle reports the attribute error
        let mut session = Session::default();
        assert!(session.try_admit(100.0, 0.0, "Purple", 1).is_err());
    }

    #[test]
    fn test_admit_quantizes_after_boundary_test() {
        let mut session = Session::default();
        let sel = Selection::new(PaletteColor::Orange, MarkerSize::new(3).unwrap());
        // 40.004 rounds to 40.0 but lies outside before rounding
        assert_eq!(session.admit(40.004, 0.0, &sel), None);
        let p = session.admit(12.3456, -7.891, &sel).unwrap();
        assert_eq!((p.x(), p.y()), (12.35, -7.89));
        assert_eq!(p.size().get(), 3);
    }

    #[test]
    fn test_admit_stores_decimal_rounding() {
        let mut session = Session::default();
        let p = session.admit(-39.985, 0.125, &Selection::default()).unwrap();
        assert_eq!((p.x(), p.y()), (-39.98, 0.12));
    }

    #[test]
    fn test_custom_radius() {
        let mut session = Session::new(SessionConfig::default().boundary_radius(10.0)).unwrap();
        let sel = Selection::default();
        assert!(session.admit(10.0, 0.0, &sel).is_some());
        assert!(session.admit(10.5, 0.0, &sel).is_none());
    }

    #[test]
    fn test_load_image_resets_state() {
        let mut session = Session::default();
        session.set_rotation(30.0).unwrap();
        session.admit(1.0, 1.0, &Selection::default());
        session.load_image(ImageExtent::new(64, 64).unwrap());
        assert_eq!(session.rotation().degrees(), 0.0);
        assert!(session.snapshot().is_empty());
        assert_eq!(session.image_extent().map(|e| e.width()), Some(64));
    }

    #[test]
    fn test_reset_keeps_rotation() {
        let mut session = Session::default();
        session.set_rotation(15.0).unwrap();
        session.admit(1.0, 1.0, &Selection::default());
        session.reset();
        assert!(session.snapshot().is_empty());
        assert_eq!(session.rotation().degrees(), 15.0);
    }
}
