//! 2D affine matrices
//!
//! An affine transformation is represented as:
//! ```text
//! | a  b  tx |
//! | c  d  ty |
//! | 0  0  1  |
//! ```
//!
//! The transformation equations are:
//! ```text
//! x' = a*x + b*y + tx
//! y' = c*x + d*y + ty
//! ```
//!
//! Angles are in radians and positive angles rotate counter-clockwise in a
//! y-up frame (the frame of original and display space).

use crate::error::{Error, Result};

/// Determinants smaller than this are treated as singular.
const SINGULAR_EPSILON: f64 = 1e-12;

/// 2D affine transformation matrix (6 coefficients)
///
/// Represents the transformation:
/// ```text
/// x' = coeffs[0]*x + coeffs[1]*y + coeffs[2]
/// y' = coeffs[3]*x + coeffs[4]*y + coeffs[5]
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AffineMatrix {
    /// Coefficients [a, b, tx, c, d, ty]
    coeffs: [f64; 6],
}

impl Default for AffineMatrix {
    fn default() -> Self {
        Self::identity()
    }
}

impl AffineMatrix {
    /// Create the identity transformation
    pub fn identity() -> Self {
        Self::from_coeffs([1.0, 0.0, 0.0, 0.0, 1.0, 0.0])
    }

    /// Create from raw coefficients
    pub fn from_coeffs(coeffs: [f64; 6]) -> Self {
        Self { coeffs }
    }

    /// Get the raw coefficients
    pub fn coeffs(&self) -> &[f64; 6] {
        &self.coeffs
    }

    /// Create a translation matrix
    pub fn translation(tx: f64, ty: f64) -> Self {
        Self::from_coeffs([1.0, 0.0, tx, 0.0, 1.0, ty])
    }

    /// Create a scaling matrix
    pub fn scale(sx: f64, sy: f64) -> Self {
        Self::from_coeffs([sx, 0.0, 0.0, 0.0, sy, 0.0])
    }

    /// Create a rotation matrix about a given center
    ///
    /// # Arguments
    ///
    /// * `angle` - Rotation angle in radians (counter-clockwise).
    pub fn rotation(center_x: f64, center_y: f64, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::from_coeffs([
            cos,
            -sin,
            center_x - cos * center_x + sin * center_y,
            sin,
            cos,
            center_y - sin * center_x - cos * center_y,
        ])
    }

    /// Determinant of the linear part
    pub fn determinant(&self) -> f64 {
        let [a, b, _, c, d, _] = self.coeffs;
        a * d - b * c
    }

    /// Compute the inverse transformation
    ///
    /// # Errors
    ///
    /// Returns [`Error::SingularMatrix`] if the matrix is not invertible.
    pub fn inverse(&self) -> Result<Self> {
        let det = self.determinant();
        if !det.is_finite() || det.abs() < SINGULAR_EPSILON {
            return Err(Error::SingularMatrix);
        }

        let [a, b, tx, c, d, ty] = self.coeffs;
        let ia = d / det;
        let ib = -b / det;
        let ic = -c / det;
        let id = a / det;
        Ok(Self::from_coeffs([
            ia,
            ib,
            -(ia * tx + ib * ty),
            ic,
            id,
            -(ic * tx + id * ty),
        ]))
    }

    /// Compose two affine transformations (self * other)
    ///
    /// The result applies `other` first, then `self`.
    pub fn compose(&self, other: &Self) -> Self {
        let [a1, b1, tx1, c1, d1, ty1] = self.coeffs;
        let [a2, b2, tx2, c2, d2, ty2] = other.coeffs;
        Self::from_coeffs([
            a1 * a2 + b1 * c2,
            a1 * b2 + b1 * d2,
            a1 * tx2 + b1 * ty2 + tx1,
            c1 * a2 + d1 * c2,
            c1 * b2 + d1 * d2,
            c1 * tx2 + d1 * ty2 + ty1,
        ])
    }

    /// Transform a point through this matrix
    pub fn transform_point(&self, x: f64, y: f64) -> (f64, f64) {
        let [a, b, tx, c, d, ty] = self.coeffs;
        (a * x + b * y + tx, c * x + d * y + ty)
    }
}
