//! RGB raster canvas and drawing primitives
//!
//! Shapes are first generated as integer point lists and then rendered,
//! with every point clipped to the canvas (and to the optional clip
//! rectangle).
//!
//! # Pixel format
//!
//! Pixels are stored as `0xRRGGBBAA` words with alpha fixed at 255.

use crate::text::generate_text_pts;
use crate::{IoError, IoResult};
use pinmark_core::PaletteColor;

const RED_SHIFT: u32 = 24;
const GREEN_SHIFT: u32 = 16;
const BLUE_SHIFT: u32 = 8;

/// RGB color for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Create a new color
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);
    /// Grid line gray
    pub const LIGHT_GRAY: Color = Color::new(176, 176, 176);

    /// Compose as 32-bit RGBA pixel
    pub fn to_pixel32(self) -> u32 {
        (u32::from(self.r) << RED_SHIFT)
            | (u32::from(self.g) << GREEN_SHIFT)
            | (u32::from(self.b) << BLUE_SHIFT)
            | 0xff
    }

    /// Extract the color from a 32-bit pixel
    pub fn from_pixel32(pixel: u32) -> Self {
        Self::new(
            (pixel >> RED_SHIFT) as u8,
            (pixel >> GREEN_SHIFT) as u8,
            (pixel >> BLUE_SHIFT) as u8,
        )
    }
}

impl From<PaletteColor> for Color {
    fn from(color: PaletteColor) -> Self {
        let (r, g, b) = color.rgb();
        Color::new(r, g, b)
    }
}

/// Axis-aligned pixel rectangle, `x..x+w` by `y..y+h`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.x + self.w && y >= self.y && y < self.y + self.h
    }
}

/// 32-bit RGB raster
#[derive(Debug, Clone)]
pub struct Canvas {
    width: u32,
    height: u32,
    data: Vec<u32>,
    clip: Option<Rect>,
}

impl Canvas {
    /// Create a white canvas.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::InvalidOptions`] if either dimension is zero.
    pub fn new(width: u32, height: u32) -> IoResult<Self> {
        if width == 0 || height == 0 {
            return Err(IoError::InvalidOptions(format!(
                "canvas dimensions must be non-zero: {width}x{height}"
            )));
        }
        Ok(Self {
            width,
            height,
            data: vec![Color::WHITE.to_pixel32(); width as usize * height as usize],
            clip: None,
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Restrict subsequent drawing to `clip` (or lift the restriction).
    pub fn set_clip(&mut self, clip: Option<Rect>) {
        self.clip = clip;
    }

    /// Get a pixel, or `None` outside the canvas.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(Color::from_pixel32(self.data[(y * self.width + x) as usize]))
    }

    /// Set a pixel; points outside the canvas or clip rectangle are ignored.
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        if let Some(clip) = self.clip
            && !clip.contains(x, y)
        {
            return;
        }
        let idx = (y as u32 * self.width + x as u32) as usize;
        self.data[idx] = color.to_pixel32();
    }

    /// Render a list of points with a single color.
    pub fn render_pts(&mut self, pts: &[(i32, i32)], color: Color) {
        for &(x, y) in pts {
            self.set_pixel(x, y, color);
        }
    }

    /// Draw a 1-pixel line.
    pub fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: Color) {
        self.render_pts(&generate_line_pts(x1, y1, x2, y2), color);
    }

    /// Draw a rectangle outline.
    pub fn draw_rect(&mut self, rect: Rect, color: Color) {
        self.render_pts(&generate_rect_pts(rect), color);
    }

    /// Fill a rectangle.
    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        for y in rect.y..rect.y + rect.h {
            for x in rect.x..rect.x + rect.w {
                self.set_pixel(x, y, color);
            }
        }
    }

    /// Fill a circle centered at a sub-pixel position.
    pub fn fill_circle(&mut self, cx: f64, cy: f64, radius: f64, color: Color) {
        self.render_pts(&generate_filled_circle_pts(cx, cy, radius), color);
    }

    /// Draw text with its top-left corner at `(x, y)`.
    pub fn draw_text(&mut self, x: i32, y: i32, text: &str, scale: i32, color: Color) {
        self.render_pts(&generate_text_pts(x, y, text, scale), color);
    }

    /// Pixel data as packed RGB bytes, row by row.
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.data.len() * 3);
        for &pixel in &self.data {
            let c = Color::from_pixel32(pixel);
            bytes.extend_from_slice(&[c.r, c.g, c.b]);
        }
        bytes
    }
}

// =============================================================================
// Point list generation helpers
// =============================================================================

/// Generate the points of a line using integer Bresenham.
///
/// The line connects `(x1, y1)` to `(x2, y2)` with 8-connectivity.
pub fn generate_line_pts(x1: i32, y1: i32, x2: i32, y2: i32) -> Vec<(i32, i32)> {
    if x1 == x2 && y1 == y2 {
        return vec![(x1, y1)];
    }

    let dx = (x2 - x1).abs();
    let dy = (y2 - y1).abs();
    let sx = if x2 > x1 { 1 } else { -1 };
    let sy = if y2 > y1 { 1 } else { -1 };

    let npts = dx.max(dy) + 1;
    let mut pts = Vec::with_capacity(npts as usize);

    let mut x = x1;
    let mut y = y1;

    if dx >= dy {
        let mut err = dx / 2;
        for _ in 0..npts {
            pts.push((x, y));
            err -= dy;
            if err < 0 {
                y += sy;
                err += dx;
            }
            x += sx;
        }
    } else {
        let mut err = dy / 2;
        for _ in 0..npts {
            pts.push((x, y));
            err -= dx;
            if err < 0 {
                x += sx;
                err += dy;
            }
            y += sy;
        }
    }

    pts
}

/// Generate the points of a rectangle outline.
pub fn generate_rect_pts(rect: Rect) -> Vec<(i32, i32)> {
    if rect.w <= 0 || rect.h <= 0 {
        return Vec::new();
    }
    let (x0, y0) = (rect.x, rect.y);
    let (x1, y1) = (rect.x + rect.w - 1, rect.y + rect.h - 1);

    let mut pts = generate_line_pts(x0, y0, x1, y0);
    pts.extend(generate_line_pts(x1, y0, x1, y1));
    pts.extend(generate_line_pts(x1, y1, x0, y1));
    pts.extend(generate_line_pts(x0, y1, x0, y0));
    pts
}

/// Generate the pixels whose centers lie within `radius` of `(cx, cy)`.
///
/// A non-positive radius yields the single pixel containing the center.
pub fn generate_filled_circle_pts(cx: f64, cy: f64, radius: f64) -> Vec<(i32, i32)> {
    if radius <= 0.0 {
        return vec![(cx.floor() as i32, cy.floor() as i32)];
    }

    let r_sq = radius * radius;
    let mut pts = Vec::new();

    for y in (cy - radius).floor() as i32..=(cy + radius).ceil() as i32 {
        for x in (cx - radius).floor() as i32..=(cx + radius).ceil() as i32 {
            let dx = f64::from(x) + 0.5 - cx;
            let dy = f64::from(y) + 0.5 - cy;
            if dx * dx + dy * dy <= r_sq {
                pts.push((x, y));
            }
        }
    }

    pts
}
