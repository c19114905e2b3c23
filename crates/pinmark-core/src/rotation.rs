//! Rotation state and the display/original transform engine
//!
//! Two frames share the same origin:
//!
//! - **original space** is fixed to the unrotated image content; every
//!   stored point lives here.
//! - **display space** is what the renderer shows after rotating the image
//!   by the current angle.
//!
//! The forward transform rotates original space by `+angle`; clicks are
//! mapped back by rotating by `-angle`.

use crate::affine::AffineMatrix;
use crate::error::{Error, Result};
use crate::extent::ImageExtent;

/// Current rotation angle in degrees.
///
/// Any finite value is kept as given. The angle is only ever fed to
/// periodic trigonometric functions, so 0 and 360 produce the same
/// transform while still comparing unequal here.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RotationState {
    degrees: f64,
}

impl RotationState {
    /// Create a rotation state.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRotation`] if `degrees` is NaN or infinite.
    pub fn new(degrees: f64) -> Result<Self> {
        if !degrees.is_finite() {
            return Err(Error::InvalidRotation(degrees));
        }
        Ok(Self { degrees })
    }

    #[inline]
    pub fn degrees(&self) -> f64 {
        self.degrees
    }

    #[inline]
    pub fn radians(&self) -> f64 {
        self.degrees.to_radians()
    }
}

/// Maps points between display and original space.
#[derive(Debug, Clone, Default)]
pub struct TransformEngine {
    rotation: RotationState,
    extent: Option<ImageExtent>,
}

impl TransformEngine {
    /// Create an engine with no image and zero rotation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine for a loaded image.
    pub fn with_extent(extent: ImageExtent) -> Self {
        Self {
            rotation: RotationState::default(),
            extent: Some(extent),
        }
    }

    /// Replace the image and reset the rotation to zero.
    pub fn load_extent(&mut self, extent: ImageExtent) {
        self.extent = Some(extent);
        self.rotation = RotationState::default();
    }

    pub fn extent(&self) -> Option<ImageExtent> {
        self.extent
    }

    pub fn rotation(&self) -> RotationState {
        self.rotation
    }

    /// Set the current rotation in degrees.
    ///
    /// The forward transform is derived from the stored angle on each
    /// request, so no cached state needs refreshing.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRotation`] for non-finite input; the current
    /// rotation is left unchanged.
    pub fn set_rotation(&mut self, angle_degrees: f64) -> Result<()> {
        self.rotation = RotationState::new(angle_degrees)?;
        log::debug!("rotation set to {angle_degrees} degrees");
        Ok(())
    }

    /// Map a display-space point back to original space.
    ///
    /// Rotates the display vector by the negative of the current angle.
    pub fn display_to_original(&self, x_disp: f64, y_disp: f64) -> (f64, f64) {
        let theta = -self.rotation.radians();
        let (sin, cos) = theta.sin_cos();
        (x_disp * cos - y_disp * sin, x_disp * sin + y_disp * cos)
    }

    /// Map an original-space point to where it is currently displayed.
    pub fn original_to_display(&self, x_orig: f64, y_orig: f64) -> (f64, f64) {
        let (sin, cos) = self.rotation.radians().sin_cos();
        (x_orig * cos - y_orig * sin, x_orig * sin + y_orig * cos)
    }

    /// Rotation by the current angle about the origin, in data space.
    pub fn rotation_transform(&self) -> AffineMatrix {
        AffineMatrix::rotation(0.0, 0.0, self.rotation.radians())
    }

    /// Transform the renderer applies to the image layer.
    ///
    /// The rotation is composed with the image's data-to-pixel mapping; with
    /// no image loaded the base mapping is the identity.
    pub fn forward_transform(&self) -> AffineMatrix {
        let base = self
            .extent
            .map(|extent| extent.data_to_pixel())
            .unwrap_or_default();
        base.compose(&self.rotation_transform())
    }
}
