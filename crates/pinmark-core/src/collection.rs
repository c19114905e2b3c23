//! Ordered collection of admitted points
//!
//! Points keep their insertion order, which is also the order of table
//! rows and exported records. Duplicates are allowed.

use crate::point::{PaletteColor, Point};

/// Ordered sequence of admitted points.
#[derive(Debug, Clone, Default)]
pub struct PointCollection {
    points: Vec<Point>,
}

impl PointCollection {
    /// Create a new empty collection.
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    pub(crate) fn push(&mut self, point: Point) {
        self.points.push(point);
    }

    pub(crate) fn clear(&mut self) {
        self.points.clear();
    }

    /// Get the number of points.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Get a point by index.
    pub fn get(&self, index: usize) -> Option<&Point> {
        self.points.get(index)
    }

    /// Read-only view of all points in insertion order.
    pub fn snapshot(&self) -> &[Point] {
        &self.points
    }

    /// Create an iterator over points.
    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    /// Points grouped by palette color.
    ///
    /// Groups follow palette order and only colors with at least one point
    /// are returned. Within a group, insertion order is kept.
    pub fn by_color(&self) -> Vec<(PaletteColor, Vec<&Point>)> {
        group_by_color(&self.points)
    }
}

/// Group a point slice by palette color, skipping empty colors.
pub fn group_by_color(points: &[Point]) -> Vec<(PaletteColor, Vec<&Point>)> {
    PaletteColor::ALL
        .into_iter()
        .filter_map(|color| {
            let series: Vec<&Point> = points.iter().filter(|p| p.color() == color).collect();
            (!series.is_empty()).then_some((color, series))
        })
        .collect()
}

impl<'a> IntoIterator for &'a PointCollection {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::{MarkerSize, Selection};

    fn point(color: PaletteColor, x: f64, y: f64) -> Point {
        Point::quantized(x, y, &Selection::new(color, MarkerSize::default()))
    }

    #[test]
    fn test_push_keeps_order_and_duplicates() {
        let mut c = PointCollection::new();
        assert!(c.is_empty());
        c.push(point(PaletteColor::Blue, 1.0, 1.0));
        c.push(point(PaletteColor::Red, 2.0, 2.0));
        c.push(point(PaletteColor::Blue, 1.0, 1.0));
        assert_eq!(c.len(), 3);
        assert_eq!(c.get(1).map(Point::color), Some(PaletteColor::Red));
        assert_eq!(c.snapshot()[0], c.snapshot()[2]);
    }

    #[test]
    fn test_by_color_palette_order() {
        let mut c = PointCollection::new();
        c.push(point(PaletteColor::Yellow, 1.0, 0.0));
        c.push(point(PaletteColor::Red, 2.0, 0.0));
        c.push(point(PaletteColor::Yellow, 3.0, 0.0));

        let groups = c.by_color();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, PaletteColor::Red);
        assert_eq!(groups[1].0, PaletteColor::Yellow);
        let xs: Vec<f64> = groups[1].1.iter().map(|p| p.x()).collect();
        assert_eq!(xs, vec![1.0, 3.0]);
    }

    #[test]
    fn test_clear() {
        let mut c = PointCollection::new();
        c.push(point(PaletteColor::Green, 0.0, 0.0));
        c.clear();
        assert!(c.is_empty());
    }
}
