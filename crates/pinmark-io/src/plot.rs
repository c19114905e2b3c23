//! Scatter-plot rendering of admitted points
//!
//! The plot shows both axes over `[-extent, extent]` with equal aspect
//! ratio. One series is drawn per palette color that has points, in
//! palette order, with marker *area* proportional to the point size
//! (`size * marker_scale`, in typographic points squared).
//!
//! Text (title, tick labels and legend names) uses the bitmap glyphs of
//! [`crate::text`].

use crate::canvas::{Canvas, Color, Rect};
use crate::text::{text_height, text_width};
use crate::{IoError, IoResult};
use pinmark_core::{DEFAULT_RADIUS, Point, group_by_color};

/// Fraction of the figure reserved around the axes (left, right, top, bottom)
const MARGINS: (f64, f64, f64, f64) = (0.125, 0.1, 0.12, 0.11);
/// Length of axis tick marks in pixels
const TICK_LENGTH: i32 = 4;
/// Gap between a tick and its label in pixels
const TICK_LABEL_GAP: i32 = 3;
/// Title glyph scale and gap above the plot area
const TITLE_SCALE: i32 = 2;
const TITLE_GAP: i32 = 10;
/// Legend swatch radius and row height in pixels
const LEGEND_SWATCH_RADIUS: f64 = 4.0;
const LEGEND_ROW_HEIGHT: i32 = 14;
const LEGEND_PADDING: i32 = 6;
/// Space between a legend swatch and its label
const LEGEND_LABEL_GAP: i32 = 4;

/// Default plot title
pub const DEFAULT_TITLE: &str = "Recorded points";

/// Options for scatter-plot rendering
#[derive(Debug, Clone, PartialEq)]
pub struct PlotOptions {
    /// Figure width in pixels
    pub width: u32,
    /// Figure height in pixels
    pub height: u32,
    /// Pixels per inch, used to convert marker sizes from points
    pub dpi: f64,
    /// Half-width of the displayed data range on both axes
    pub extent: f64,
    /// Marker area per unit of point size, in points squared
    pub marker_scale: f64,
    /// Spacing of grid lines and ticks in data units
    pub grid_step: f64,
    /// Draw grid lines
    pub grid: bool,
    /// Draw the legend
    pub legend: bool,
    /// Title above the plot area; empty for none
    pub title: String,
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            dpi: 100.0,
            extent: DEFAULT_RADIUS,
            marker_scale: 20.0,
            grid_step: 10.0,
            grid: true,
            legend: true,
            title: DEFAULT_TITLE.to_string(),
        }
    }
}

impl PlotOptions {
    /// Set the figure size in pixels
    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the displayed data half-range
    pub fn extent(mut self, extent: f64) -> Self {
        self.extent = extent;
        self
    }

    /// Set whether grid lines are drawn
    pub fn grid(mut self, grid: bool) -> Self {
        self.grid = grid;
        self
    }

    /// Set whether the legend is drawn
    pub fn legend(mut self, legend: bool) -> Self {
        self.legend = legend;
        self
    }

    /// Set the title; an empty string draws none
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    fn validate(&self) -> IoResult<()> {
        let positive = |v: f64| v.is_finite() && v > 0.0;
        if !positive(self.extent) {
            return Err(IoError::InvalidOptions(format!(
                "plot extent must be finite and positive: {}",
                self.extent
            )));
        }
        if !positive(self.dpi) || !positive(self.marker_scale) || !positive(self.grid_step) {
            return Err(IoError::InvalidOptions(
                "dpi, marker scale and grid step must be finite and positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Marker radius in pixels for a point of the given size
    pub fn marker_radius(&self, size: u8) -> f64 {
        let area = f64::from(size) * self.marker_scale;
        (area / std::f64::consts::PI).sqrt() * self.dpi / 72.0
    }
}

/// Placement of the square plot area within the figure
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotLayout {
    /// Left edge of the plot area in pixels
    pub left: f64,
    /// Top edge of the plot area in pixels
    pub top: f64,
    /// Side length of the plot area in pixels
    pub side: f64,
    /// Half-width of the displayed data range
    pub extent: f64,
}

impl PlotLayout {
    /// Compute the layout for a figure.
    ///
    /// The area left after margins is shrunk to a centered square so that
    /// one data unit spans the same number of pixels on both axes.
    pub fn new(options: &PlotOptions) -> Self {
        let (ml, mr, mt, mb) = MARGINS;
        let w = f64::from(options.width);
        let h = f64::from(options.height);
        let avail_w = w * (1.0 - ml - mr);
        let avail_h = h * (1.0 - mt - mb);
        let side = avail_w.min(avail_h);
        Self {
            left: w * ml + (avail_w - side) / 2.0,
            top: h * mt + (avail_h - side) / 2.0,
            side,
            extent: options.extent,
        }
    }

    /// Map data coordinates (y up) to pixel coordinates (y down)
    pub fn to_pixel(&self, x: f64, y: f64) -> (f64, f64) {
        let span = 2.0 * self.extent;
        (
            self.left + (x + self.extent) / span * self.side,
            self.top + (self.extent - y) / span * self.side,
        )
    }

    /// Pixel rectangle covered by the plot area
    pub fn rect(&self) -> Rect {
        let x0 = self.left.round() as i32;
        let y0 = self.top.round() as i32;
        let x1 = (self.left + self.side).round() as i32;
        let y1 = (self.top + self.side).round() as i32;
        Rect::new(x0, y0, x1 - x0 + 1, y1 - y0 + 1)
    }

    /// Legend box for the given series labels, anchored inside the
    /// top-right corner of the plot area.
    pub fn legend_rect(&self, labels: &[&str]) -> Rect {
        let area = self.rect();
        let label_w = labels.iter().map(|l| text_width(l, 1)).max().unwrap_or(0);
        let swatch_w = 2 * LEGEND_SWATCH_RADIUS as i32;
        let w = 2 * LEGEND_PADDING + swatch_w + LEGEND_LABEL_GAP + label_w;
        let h = 2 * LEGEND_PADDING + labels.len() as i32 * LEGEND_ROW_HEIGHT;
        Rect::new(
            area.x + area.w - 1 - LEGEND_PADDING - w,
            area.y + LEGEND_PADDING,
            w,
            h,
        )
    }

    /// Center of the legend swatch in `row` of `legend`
    pub fn legend_swatch(legend: Rect, row: usize) -> (f64, f64) {
        let row_offset = (row as f64 + 0.5) * f64::from(LEGEND_ROW_HEIGHT);
        (
            f64::from(legend.x + LEGEND_PADDING) + LEGEND_SWATCH_RADIUS,
            f64::from(legend.y + LEGEND_PADDING) + row_offset,
        )
    }

    /// Grid/tick positions in data units within `[-extent, extent]`
    fn ticks(&self, step: f64) -> Vec<f64> {
        let first = (-self.extent / step).ceil() as i64;
        let last = (self.extent / step).floor() as i64;
        (first..=last).map(|i| i as f64 * step).collect()
    }
}

/// Render a scatter plot of `points`.
///
/// # Errors
///
/// Returns [`IoError::InvalidOptions`] for zero figure dimensions or
/// non-positive extent, dpi, marker scale or grid step.
pub fn render_scatter(points: &[Point], options: &PlotOptions) -> IoResult<Canvas> {
    options.validate()?;
    let mut canvas = Canvas::new(options.width, options.height)?;
    let layout = PlotLayout::new(options);
    let area = layout.rect();
    let ticks = layout.ticks(options.grid_step);

    // Grid lines
    if options.grid {
        for &t in &ticks {
            let (px, py) = layout.to_pixel(t, t);
            let (px, py) = (px.round() as i32, py.round() as i32);
            canvas.draw_line(px, area.y, px, area.y + area.h - 1, Color::LIGHT_GRAY);
            canvas.draw_line(area.x, py, area.x + area.w - 1, py, Color::LIGHT_GRAY);
        }
    }

    // Marker series, clipped to the axes
    let groups = group_by_color(points);
    canvas.set_clip(Some(area));
    for (color, series) in &groups {
        for point in series {
            let (px, py) = layout.to_pixel(point.x(), point.y());
            let radius = options.marker_radius(point.size().get());
            canvas.fill_circle(px, py, radius, Color::from(*color));
        }
    }
    canvas.set_clip(None);

    // Axes frame, ticks and tick labels
    canvas.draw_rect(area, Color::BLACK);
    let bottom = area.y + area.h - 1;
    let label_h = text_height(1);
    for &t in &ticks {
        let (px, py) = layout.to_pixel(t, t);
        let (px, py) = (px.round() as i32, py.round() as i32);
        let label = format_tick(t);
        let label_w = text_width(&label, 1);

        canvas.draw_line(px, bottom, px, bottom + TICK_LENGTH, Color::BLACK);
        let label_y = bottom + TICK_LENGTH + TICK_LABEL_GAP;
        canvas.draw_text(px - label_w / 2, label_y, &label, 1, Color::BLACK);

        canvas.draw_line(area.x - TICK_LENGTH, py, area.x, py, Color::BLACK);
        let label_x = area.x - TICK_LENGTH - TICK_LABEL_GAP - label_w;
        canvas.draw_text(label_x, py - label_h / 2, &label, 1, Color::BLACK);
    }

    if !options.title.is_empty() {
        let w = text_width(&options.title, TITLE_SCALE);
        let x = area.x + (area.w - w) / 2;
        let y = area.y - TITLE_GAP - text_height(TITLE_SCALE);
        canvas.draw_text(x, y, &options.title, TITLE_SCALE, Color::BLACK);
    }

    if options.legend && !groups.is_empty() {
        let labels: Vec<&str> = groups.iter().map(|(color, _)| color.name()).collect();
        let legend = layout.legend_rect(&labels);
        canvas.fill_rect(legend, Color::WHITE);
        canvas.draw_rect(legend, Color::LIGHT_GRAY);

        for (row, (color, _)) in groups.iter().enumerate() {
            let (cx, cy) = PlotLayout::legend_swatch(legend, row);
            canvas.fill_circle(cx, cy, LEGEND_SWATCH_RADIUS, Color::from(*color));
            let x = (cx + LEGEND_SWATCH_RADIUS) as i32 + LEGEND_LABEL_GAP;
            let y = cy as i32 - label_h / 2;
            canvas.draw_text(x, y, color.name(), 1, Color::BLACK);
        }
    }

    Ok(canvas)
}

/// Tick label text: integers without a fractional part.
fn format_tick(value: f64) -> String {
    let value = value + 0.0;
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value}")
    }
}
