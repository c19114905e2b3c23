//! Export of a point snapshot to CSV and a scatter-plot PNG

use crate::plot::{PlotOptions, render_scatter};
use crate::png::write_png;
use crate::table::write_points_csv;
use crate::{IoError, IoResult};
use pinmark_core::Point;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

/// Options for exporting points
#[derive(Debug, Clone, PartialEq)]
pub struct ExportOptions {
    /// Directory receiving both files
    pub out_dir: PathBuf,
    /// File name of the CSV table
    pub csv_name: String,
    /// File name of the scatter-plot image
    pub plot_name: String,
    /// Scatter-plot rendering options
    pub plot: PlotOptions,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("."),
            csv_name: "points.csv".to_string(),
            plot_name: "points_plot.png".to_string(),
            plot: PlotOptions::default(),
        }
    }
}

impl ExportOptions {
    /// Set the output directory
    pub fn out_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.out_dir = dir.into();
        self
    }

    /// Set the plot options
    pub fn plot(mut self, plot: PlotOptions) -> Self {
        self.plot = plot;
        self
    }

    /// Set the CSV and plot file names
    pub fn file_names(
        mut self,
        csv_name: impl Into<String>,
        plot_name: impl Into<String>,
    ) -> Self {
        self.csv_name = csv_name.into();
        self.plot_name = plot_name.into();
        self
    }

    /// Both names must be distinct plain file names inside `out_dir`.
    fn validate(&self) -> IoResult<()> {
        for name in [&self.csv_name, &self.plot_name] {
            if Path::new(name).file_name() != Some(OsStr::new(name)) {
                return Err(IoError::InvalidOptions(format!(
                    "export file name must be a plain file name: '{name}'"
                )));
            }
        }
        if self.csv_name == self.plot_name {
            return Err(IoError::InvalidOptions(format!(
                "CSV and plot file names must differ: '{}'",
                self.csv_name
            )));
        }
        Ok(())
    }
}

/// Paths of the files written by [`export_points`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportPaths {
    pub csv: PathBuf,
    pub plot: PathBuf,
}

/// Export points as a CSV table and a scatter-plot PNG.
///
/// Returns `Ok(None)` without touching the filesystem when `points` is
/// empty. Options are validated and both files are encoded in memory
/// before the output directory is created, so a failure leaves nothing
/// behind.
pub fn export_points(points: &[Point], options: &ExportOptions) -> IoResult<Option<ExportPaths>> {
    if points.is_empty() {
        log::debug!("no points to export");
        return Ok(None);
    }

    options.validate()?;

    // Encode both artifacts before touching the filesystem
    let canvas = render_scatter(points, &options.plot)?;
    let mut png_bytes = Vec::new();
    write_png(&canvas, &mut png_bytes)?;
    let mut csv_bytes = Vec::new();
    write_points_csv(points, &mut csv_bytes)?;

    fs::create_dir_all(&options.out_dir)?;
    let paths = ExportPaths {
        csv: options.out_dir.join(&options.csv_name),
        plot: options.out_dir.join(&options.plot_name),
    };
    fs::write(&paths.csv, &csv_bytes)?;
    fs::write(&paths.plot, &png_bytes)?;

    log::info!(
        "exported {} points: {} and {}",
        points.len(),
        paths.csv.display(),
        paths.plot.display()
    );
    Ok(Some(paths))
}
