//! Error types for pinmark-core
//!
//! Every fallible operation in the core reports one of these variants.
//! A click outside the boundary circle is *not* an error; admission
//! reports it as `None`.

use thiserror::Error;

/// pinmark-core error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Color or size outside its enumerated/bounded domain
    #[error("invalid {attribute}: {value}")]
    InvalidAttribute {
        attribute: &'static str,
        value: String,
    },

    /// Rotation angle is NaN or infinite
    #[error("invalid rotation angle: {0}")]
    InvalidRotation(f64),

    /// Invalid configuration value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Singular matrix (non-invertible)
    #[error("singular transformation matrix")]
    SingularMatrix,
}

impl Error {
    pub(crate) fn invalid_color(value: impl Into<String>) -> Self {
        Self::InvalidAttribute {
            attribute: "color",
            value: value.into(),
        }
    }

    pub(crate) fn invalid_size(value: i64) -> Self {
        Self::InvalidAttribute {
            attribute: "size",
            value: value.to_string(),
        }
    }
}

/// Result type alias for pinmark-core operations
pub type Result<T> = std::result::Result<T, Error>;
