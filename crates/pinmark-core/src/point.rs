//! Point records and their attributes
//!
//! - [`PaletteColor`] - the fixed five-color palette
//! - [`MarkerSize`] - marker size bounded to `1..=5`
//! - [`Selection`] - the color/size pair currently chosen by the user
//! - [`Point`] - an admitted, immutable point in original space

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Marker colors a point can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum PaletteColor {
    #[default]
    Red,
    Green,
    Blue,
    Orange,
    Yellow,
}

impl PaletteColor {
    /// All palette colors in display order.
    pub const ALL: [PaletteColor; 5] = [
        PaletteColor::Red,
        PaletteColor::Green,
        PaletteColor::Blue,
        PaletteColor::Orange,
        PaletteColor::Yellow,
    ];

    /// Name as shown in the table and written to exports.
    pub fn name(self) -> &'static str {
        match self {
            PaletteColor::Red => "Red",
            PaletteColor::Green => "Green",
            PaletteColor::Blue => "Blue",
            PaletteColor::Orange => "Orange",
            PaletteColor::Yellow => "Yellow",
        }
    }

    /// Fill color used when drawing markers.
    ///
    /// Values follow the CSS named colors of the same (lowercase) name.
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            PaletteColor::Red => (255, 0, 0),
            PaletteColor::Green => (0, 128, 0),
            PaletteColor::Blue => (0, 0, 255),
            PaletteColor::Orange => (255, 165, 0),
            PaletteColor::Yellow => (255, 255, 0),
        }
    }
}

impl fmt::Display for PaletteColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PaletteColor {
    type Err = Error;

    /// Parse an exact palette name (`"Red"`, `"Green"`, ...).
    fn from_str(s: &str) -> Result<Self> {
        PaletteColor::ALL
            .into_iter()
            .find(|c| c.name() == s)
            .ok_or_else(|| Error::invalid_color(s))
    }
}

/// Marker size, an integer in `1..=5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MarkerSize(u8);

impl MarkerSize {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    /// Validate a raw size.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidAttribute`] when `size` is outside `1..=5`.
    /// Out-of-range values are never clamped.
    pub fn new(size: i64) -> Result<Self> {
        if (i64::from(Self::MIN)..=i64::from(Self::MAX)).contains(&size) {
            Ok(Self(size as u8))
        } else {
            Err(Error::invalid_size(size))
        }
    }

    #[inline]
    pub fn get(self) -> u8 {
        self.0
    }
}

impl Default for MarkerSize {
    fn default() -> Self {
        Self(Self::MIN)
    }
}

impl fmt::Display for MarkerSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The color and size applied to the next admitted point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    pub color: PaletteColor,
    pub size: MarkerSize,
}

impl Selection {
    pub fn new(color: PaletteColor, size: MarkerSize) -> Self {
        Self { color, size }
    }

    /// Validate raw widget values into a selection.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidAttribute`] for an unknown color name or an
    /// out-of-range size.
    pub fn parse(color: &str, size: i64) -> Result<Self> {
        Ok(Self {
            color: color.parse()?,
            size: MarkerSize::new(size)?,
        })
    }
}

/// Round to two decimal places.
///
/// Rounding is done on the exact decimal expansion of `value`, so
/// `-39.985` (stored slightly above the tie) becomes `-39.98` and the
/// exact tie `0.125` goes to the even digit, `0.12`. A negative zero
/// result is normalized to `0.0`.
pub fn quantize(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    format!("{value:.2}").parse::<f64>().unwrap_or(value) + 0.0
}

/// An admitted point in original space.
///
/// Coordinates are already quantized to two decimals. Points are only
/// created by admission and never change afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    color: PaletteColor,
    x: f64,
    y: f64,
    size: MarkerSize,
}

impl Point {
    pub(crate) fn quantized(x: f64, y: f64, selection: &Selection) -> Self {
        Self {
            color: selection.color,
            x: quantize(x),
            y: quantize(y),
            size: selection.size,
        }
    }

    #[inline]
    pub fn color(&self) -> PaletteColor {
        self.color
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.y
    }

    #[inline]
    pub fn size(&self) -> MarkerSize {
        self.size
    }
}
