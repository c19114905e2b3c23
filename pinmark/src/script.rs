//! Event scripts
//!
//! A script is a line-based list of session events:
//!
//! ```text
//! # comment
//! rotate <degrees>
//! color <Red|Green|Blue|Orange|Yellow>
//! size <1..5>
//! click <x_disp> <y_disp>
//! export
//! reset
//! ```
//!
//! Blank lines and everything after `#` are ignored. Syntax errors stop
//! parsing with the offending line number. Commands that are well formed
//! but carry an invalid value (an unknown color, a size outside 1..=5, a
//! non-finite angle) are skipped during replay with a warning.

use pinmark_core::{MarkerSize, PaletteColor, Point, Selection, Session};
use pinmark_io::{ExportOptions, ExportPaths, IoError, export_points};
use std::io::{BufRead, Write};
use thiserror::Error;

/// Errors from parsing or replaying a script
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("export failed: {0}")]
    Export(#[from] IoError),
}

/// Result type for script operations
pub type ScriptResult<T> = Result<T, ScriptError>;

/// One session event
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Set the rotation angle in degrees
    Rotate(f64),
    /// Select a palette color by name
    Color(String),
    /// Select a marker size
    Size(i64),
    /// Click at display coordinates
    Click(f64, f64),
    /// Export the current points
    Export,
    /// Clear all points
    Reset,
}

/// A command together with its 1-based source line
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptLine {
    pub line: usize,
    pub command: Command,
}

/// Parse a single line.
///
/// Returns `Ok(None)` for blank and comment-only lines; the error is a
/// message without line information.
pub fn parse_line(text: &str) -> Result<Option<Command>, String> {
    let text = match text.find('#') {
        Some(pos) => &text[..pos],
        None => text,
    };
    let mut words = text.split_whitespace();
    let Some(keyword) = words.next() else {
        return Ok(None);
    };
    let args: Vec<&str> = words.collect();

    let expect_args = |n: usize| {
        if args.len() == n {
            Ok(())
        } else {
            Err(format!("'{keyword}' takes {n} argument(s), got {}", args.len()))
        }
    };
    let number = |s: &str| s.parse::<f64>().map_err(|_| format!("invalid number '{s}'"));

    let command = match keyword {
        "rotate" => {
            expect_args(1)?;
            Command::Rotate(number(args[0])?)
        }
        "color" => {
            expect_args(1)?;
            Command::Color(args[0].to_string())
        }
        "size" => {
            expect_args(1)?;
            let size = args[0]
                .parse::<i64>()
                .map_err(|_| format!("invalid integer '{}'", args[0]))?;
            Command::Size(size)
        }
        "click" => {
            expect_args(2)?;
            Command::Click(number(args[0])?, number(args[1])?)
        }
        "export" => {
            expect_args(0)?;
            Command::Export
        }
        "reset" => {
            expect_args(0)?;
            Command::Reset
        }
        other => return Err(format!("unknown command '{other}'")),
    };
    Ok(Some(command))
}

/// Parse a whole script
pub fn parse_script<R: BufRead>(reader: R) -> ScriptResult<Vec<ScriptLine>> {
    let mut lines = Vec::new();
    for (idx, text) in reader.lines().enumerate() {
        let text = text?;
        let line = idx + 1;
        match parse_line(&text) {
            Ok(Some(command)) => lines.push(ScriptLine { line, command }),
            Ok(None) => {}
            Err(message) => return Err(ScriptError::Parse { line, message }),
        }
    }
    Ok(lines)
}

/// Outcome of a replay
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReplaySummary {
    /// Points added to the session
    pub admitted: usize,
    /// Clicks outside the boundary
    pub rejected: usize,
    /// Commands skipped because of an invalid value
    pub skipped: usize,
    /// Files written by each non-empty export
    pub exports: Vec<ExportPaths>,
}

/// Write the table header for admitted points
pub fn write_table_header<W: Write>(out: &mut W) -> std::io::Result<()> {
    writeln!(out, "{:<8}{:>10}{:>10}{:>6}", "Color", "X", "Y", "Size")
}

/// Write one admitted point as a table row
pub fn write_table_row<W: Write>(out: &mut W, point: &Point) -> std::io::Result<()> {
    writeln!(
        out,
        "{:<8}{:>10.2}{:>10.2}{:>6}",
        point.color().name(),
        point.x(),
        point.y(),
        point.size().get()
    )
}

/// Replay parsed commands against a session.
///
/// The selection starts at its default (`Red`, size 1). Every admitted
/// point is written to `out` as a table row. Nothing is exported unless the
/// script says so.
pub fn replay<W: Write>(
    session: &mut Session,
    script: &[ScriptLine],
    options: &ExportOptions,
    out: &mut W,
) -> ScriptResult<ReplaySummary> {
    let mut selection = Selection::default();
    let mut summary = ReplaySummary::default();
    write_table_header(out)?;

    for ScriptLine { line, command } in script {
        let line = *line;
        match command {
            Command::Rotate(angle) => {
                if let Err(e) = session.set_rotation(*angle) {
                    log::warn!("line {line}: {e}");
                    summary.skipped += 1;
                }
            }
            Command::Color(name) => match name.parse::<PaletteColor>() {
                Ok(color) => selection.color = color,
                Err(e) => {
                    log::warn!("line {line}: {e}");
                    summary.skipped += 1;
                }
            },
            Command::Size(size) => match MarkerSize::new(*size) {
                Ok(size) => selection.size = size,
                Err(e) => {
                    log::warn!("line {line}: {e}");
                    summary.skipped += 1;
                }
            },
            Command::Click(x, y) => match session.click(*x, *y, &selection) {
                Some(point) => {
                    write_table_row(out, &point)?;
                    summary.admitted += 1;
                }
                None => {
                    log::info!("line {line}: click ({x}, {y}) is outside the boundary");
                    summary.rejected += 1;
                }
            },
            Command::Export => match export_points(session.snapshot(), options)? {
                Some(paths) => summary.exports.push(paths),
                None => log::info!("line {line}: no points to export"),
            },
            Command::Reset => session.reset(),
        }
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_line_commands() {
        assert_eq!(parse_line("rotate 90"), Ok(Some(Command::Rotate(90.0))));
        assert_eq!(
            parse_line("  click -1.5 2  "),
            Ok(Some(Command::Click(-1.5, 2.0)))
        );
        assert_eq!(
            parse_line("color Blue"),
            Ok(Some(Command::Color("Blue".to_string())))
        );
        assert_eq!(parse_line("size 3"), Ok(Some(Command::Size(3))));
        assert_eq!(parse_line("export # now"), Ok(Some(Command::Export)));
        assert_eq!(parse_line("reset"), Ok(Some(Command::Reset)));
    }

    #[test]
    fn test_parse_line_blank_and_comment() {
        assert_eq!(parse_line(""), Ok(None));
        assert_eq!(parse_line("   "), Ok(None));
        assert_eq!(parse_line("# rotate 90"), Ok(None));
    }

    #[test]
    fn test_parse_line_errors() {
        assert!(parse_line("spin 90").is_err());
        assert!(parse_line("rotate").is_err());
        assert!(parse_line("rotate ninety").is_err());
        assert!(parse_line("click 1").is_err());
        assert!(parse_line("size 2.5").is_err());
        assert!(parse_line("export now").is_err());
        // Keywords are case-sensitive
        assert!(parse_line("Rotate 90").is_err());
    }

    #[test]
    fn test_parse_script_reports_line() {
        let script = "# header\n\nrotate 90\nclick 1 2 3\n";
        match parse_script(script.as_bytes()) {
            Err(ScriptError::Parse { line, .. }) => assert_eq!(line, 4),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_script_keeps_line_numbers() {
        let script = "rotate 45\n\n# skip\nclick 0 0\n";
        let lines = parse_script(script.as_bytes()).unwrap();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].line, 1);
        assert_eq!(lines[1].line, 4);
    }

    #[test]
    fn test_replay_without_export_writes_nothing() {
        let script = parse_script("click 10 0\nclick 50 0\ncolor Purple\n".as_bytes()).unwrap();
        let mut session = Session::default();
        let options = ExportOptions::default().out_dir("/nonexistent/pinmark-never-created");
        let mut out = Vec::new();
        let summary = replay(&mut session, &script, &options, &mut out).unwrap();

        assert_eq!(summary.admitted, 1);
        assert_eq!(summary.rejected, 1);
        assert_eq!(summary.skipped, 1);
        assert!(summary.exports.is_empty());
        assert_eq!(session.snapshot().len(), 1);

        let text = String::from_utf8(out).unwrap();
        let rows: Vec<&str> = text.lines().collect();
        assert_eq!(rows.len(), 2);
        assert!(rows[0].starts_with("Color"));
        assert!(rows[1].starts_with("Red"));
        assert!(rows[1].contains("10.00"));
    }

    #[test]
    fn test_replay_selection_updates() {
        let script = parse_script("color Yellow\nsize 4\nsize 9\nclick 1 1\n".as_bytes()).unwrap();
        let mut session = Session::default();
        let mut out = Vec::new();
        let summary = replay(&mut session, &script, &ExportOptions::default(), &mut out).unwrap();

        assert_eq!(summary.skipped, 1);
        let point = session.snapshot()[0];
        assert_eq!(point.color(), PaletteColor::Yellow);
        assert_eq!(point.size().get(), 4);
    }
}
