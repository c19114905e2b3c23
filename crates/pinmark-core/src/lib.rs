//! pinmark-core - Coordinate transforms and point admission
//!
//! This crate holds the logic behind rotating an image for display and
//! recording clicks as points in the image's own, unrotated frame:
//!
//! - [`TransformEngine`] - rotation state and display/original mapping
//! - [`AffineMatrix`] - 2x3 affine matrices handed to the renderer
//! - [`BoundaryRegion`] - circular admission test
//! - [`Point`] / [`PointCollection`] - admitted, immutable point records
//! - [`Session`] - owns all of the above for one loaded image
//!
//! # Example
//!
//! ```
//! use pinmark_core::{Selection, Session};
//!
//! let mut session = Session::default();
//! session.set_rotation(90.0).unwrap();
//!
//! let point = session.click(10.0, 0.0, &Selection::default()).unwrap();
//! assert_eq!((point.x(), point.y()), (0.0, -10.0));
//! ```

pub mod affine;
pub mod boundary;
pub mod collection;
pub mod error;
pub mod extent;
pub mod point;
pub mod rotation;
pub mod session;

pub use affine::AffineMatrix;
pub use boundary::{BoundaryRegion, DEFAULT_RADIUS};
pub use collection::{PointCollection, group_by_color};
pub use error::{Error, Result};
pub use extent::ImageExtent;
pub use point::{MarkerSize, PaletteColor, Point, Selection, quantize};
pub use rotation::{RotationState, TransformEngine};
pub use session::{Session, SessionConfig};
