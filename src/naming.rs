//! Output filename resolution
//!
//! Computes a non-colliding, date-stamped output path for an encrypted copy.
//! Output files always land in an `OUTPUT` folder under the base directory,
//! named `{stem}_{YYYYMMDD}.pdf` with an auto-incrementing `_N` suffix when
//! a same-day file already exists.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::error::{Error, Result};

/// Name of the output subfolder created under the base directory
pub const OUTPUT_DIR_NAME: &str = "OUTPUT";

/// Highest collision suffix tried before giving up
pub const MAX_SAME_DAY_COPIES: u32 = 99;

/// Resolve the output path for an encrypted copy of `input_path`.
///
/// The input's file stem is treated as opaque text — underscores or existing
/// date-like suffixes in it are never parsed. The date is a parameter so
/// callers (and tests) control the stamp; the CLI passes today's local date.
///
/// Creates `{base_dir}/OUTPUT` if it does not exist yet.
///
/// # Example
///
/// ```no_run
/// use pdf_protect::naming::resolve_output_path;
/// use chrono::NaiveDate;
/// use std::path::Path;
///
/// let date = NaiveDate::from_ymd_opt(2025, 10, 24).unwrap();
/// let output = resolve_output_path(Path::new("report.pdf"), Path::new("/app"), date)
///     .expect("Failed to resolve output path");
/// // First resolution of the day: /app/OUTPUT/report_20251024.pdf
/// ```
pub fn resolve_output_path(input_path: &Path, base_dir: &Path, date: NaiveDate) -> Result<PathBuf> {
    let output_dir = base_dir.join(OUTPUT_DIR_NAME);
    fs::create_dir_all(&output_dir)?;

    let stem = input_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let stamp = date.format("%Y%m%d").to_string();

    let mut candidate = output_dir.join(format!("{}_{}.pdf", stem, stamp));

    // Auto-increment on collision: _1, _2, ... up to _99
    let mut counter = 1;
    while candidate.exists() {
        if counter > MAX_SAME_DAY_COPIES {
            return Err(Error::NamingLimitExceeded);
        }
        candidate = output_dir.join(format!("{}_{}_{}.pdf", stem, stamp, counter));
        counter += 1;
    }

    Ok(candidate)
}
