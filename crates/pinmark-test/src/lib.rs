//! pinmark-test - Regression test framework for pinmark
//!
//! Each `*_reg.rs` test creates a [`RegParams`], records numbered checks
//! against it and asserts on [`RegParams::cleanup`] at the end. Artifacts
//! produced by a test go to `tests/regout/` at the workspace root.
//!
//! # Usage
//!
//! ```ignore
//! use pinmark_test::RegParams;
//!
//! let mut rp = RegParams::new("admission");
//! rp.compare_values(3.0, session.snapshot().len() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "compare" (default) or "display"

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // pinmark-test is at crates/pinmark-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}
