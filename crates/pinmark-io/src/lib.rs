//! pinmark-io - Image headers and point export
//!
//! This crate connects a [`pinmark_core::Session`] to the filesystem:
//!
//! - Reading the dimensions of an image (PNG, JPEG, GIF, BMP, TIFF, WebP)
//!   to set up a session
//! - Writing admitted points as a `Color,X,Y,Size` CSV table
//! - Rendering a scatter plot of the points and encoding it as PNG
//!
//! Nothing is exported for an empty point collection.

pub mod canvas;
mod error;
pub mod export;
pub mod image;
pub mod plot;
pub mod png;
pub mod table;
pub mod text;

pub use canvas::{Canvas, Color, Rect};
pub use error::{IoError, IoResult};
pub use export::{ExportOptions, ExportPaths, export_points};
pub use crate::image::{read_image_extent, read_png_extent};
pub use crate::png::write_png;
pub use plot::{PlotLayout, PlotOptions, render_scatter};
pub use table::write_points_csv;
pub use text::{text_height, text_width};
