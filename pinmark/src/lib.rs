//! Pinmark - Point annotation on a rotatable image
//!
//! Pinmark keeps labeled points on an image that can be rotated for
//! viewing. Clicks arrive in the rotated display frame, are mapped back to
//! the original image frame, and are kept only when they fall inside a
//! circular region around the image center.
//!
//! # Overview
//!
//! - Rotation state and the display/original coordinate mapping
//! - Circular boundary admission with 2-decimal rounding
//! - Ordered point storage with a fixed color palette and marker sizes
//! - CSV and scatter-plot export ([`io`])
//! - Replay of line-based event scripts ([`script`])
//!
//! # Example
//!
//! ```
//! use pinmark::{Selection, Session};
//!
//! let mut session = Session::default();
//! session.set_rotation(90.0).unwrap();
//! let point = session.click(10.0, 0.0, &Selection::default()).unwrap();
//! assert_eq!((point.x(), point.y()), (0.0, -10.0));
//! ```

// Re-export core types
pub use pinmark_core::*;

// Re-export the export crate as a module
pub use pinmark_io as io;

pub mod script;
