use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use env_logger::Env;
use pinmark::io::{ExportOptions, PlotOptions, read_image_extent};
use pinmark::script::{parse_script, replay};
use pinmark::{DEFAULT_RADIUS, Session, SessionConfig};

#[derive(Parser)]
#[command(name = "pinmark")]
#[command(about = "Replay point annotation events on a rotatable image", long_about = None)]
#[command(version)]
struct Cli {
    /// Image whose size sets up the session (PNG, JPEG, GIF, BMP, TIFF, WebP)
    #[arg(value_hint = clap::ValueHint::FilePath)]
    image: PathBuf,

    /// Event script (read from stdin when omitted)
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    script: Option<PathBuf>,

    /// Directory receiving exported files
    #[arg(short, long, default_value = ".")]
    out: PathBuf,

    /// Boundary radius in original image coordinates
    #[arg(short, long, default_value_t = DEFAULT_RADIUS)]
    radius: f64,

    /// Half-range of both plot axes
    #[arg(short, long, default_value_t = DEFAULT_RADIUS)]
    extent: f64,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logger with default level (overridden by RUST_LOG)
    let env = Env::default().default_filter_or("info");
    env_logger::Builder::from_env(env).init();

    let extent = read_image_extent(&cli.image)
        .with_context(|| format!("failed to read image {}", cli.image.display()))?;
    let config = SessionConfig::default().boundary_radius(cli.radius);
    let mut session =
        Session::with_image(extent, config).context("invalid session configuration")?;

    let script = match &cli.script {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open script {}", path.display()))?;
            parse_script(BufReader::new(file))?
        }
        None => parse_script(io::stdin().lock())?,
    };

    let options = ExportOptions::default()
        .out_dir(cli.out)
        .plot(PlotOptions::default().extent(cli.extent));
    let summary = replay(&mut session, &script, &options, &mut io::stdout().lock())?;

    log::info!(
        "{} admitted, {} rejected, {} skipped, {} export(s)",
        summary.admitted,
        summary.rejected,
        summary.skipped,
        summary.exports.len()
    );
    Ok(())
}
