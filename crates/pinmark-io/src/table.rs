//! Tabular (CSV) export of admitted points
//!
//! One record per point in insertion order, with the header
//! `Color,X,Y,Size`. Coordinates are written in shortest round-trip form,
//! so `0.0`, `-10.0` and `12.35` appear exactly like that.

use crate::IoResult;
use pinmark_core::Point;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Serialize)]
struct PointRecord {
    #[serde(rename = "Color")]
    color: &'static str,
    #[serde(rename = "X")]
    x: f64,
    #[serde(rename = "Y")]
    y: f64,
    #[serde(rename = "Size")]
    size: u8,
}

impl From<&Point> for PointRecord {
    fn from(p: &Point) -> Self {
        Self {
            color: p.color().name(),
            x: p.x(),
            y: p.y(),
            size: p.size().get(),
        }
    }
}

/// Write points as CSV
///
/// Nothing (not even a header) is written for an empty slice.
pub fn write_points_csv<W: Write>(points: &[Point], writer: W) -> IoResult<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for point in points {
        wtr.serialize(PointRecord::from(point))?;
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pinmark_core::{MarkerSize, PaletteColor, Selection, Session};

    #[test]
    fn test_write_points_csv() {
        let mut session = Session::default();
        session.admit(12.3456, -0.004, &Selection::default());
        let sel = Selection::new(PaletteColor::Blue, MarkerSize::new(4).unwrap());
        session.admit(-10.0, 7.5, &sel);

        let mut buf = Vec::new();
        write_points_csv(session.snapshot(), &mut buf).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "Color,X,Y,Size\nRed,12.35,0.0,1\nBlue,-10.0,7.5,4\n"
        );
    }

    #[test]
    fn test_write_empty() {
        let mut buf = Vec::new();
        write_points_csv(&[], &mut buf).unwrap();
        assert!(buf.is_empty());
    }
}
