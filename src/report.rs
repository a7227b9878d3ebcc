//! Human-readable record of a single pipeline run.

use crate::ecc::hamming::{DisplayBits, ErrorPosition};
use crate::error::Result;
use crate::pipeline::RunRecord;
use log::info;
use std::fmt;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Default report file, overwritten on every run
pub const DEFAULT_REPORT_PATH: &str = "hamming_result.txt";

/// Formats a [`RunRecord`] as the text report.
pub struct Report<'a>(pub &'a RunRecord);

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let record = self.0;

        writeln!(
            f,
            "Generated information vector: {}",
            DisplayBits(&record.information)
        )?;
        writeln!(
            f,
            "Parity-check matrix ({}x{}):",
            record.matrix.row_count(),
            record.matrix.column_count()
        )?;
        write!(f, "{}", record.matrix)?;
        writeln!(f, "Encoded codeword: {}", record.encoded)?;
        match record.injected_at {
            Some(position) => writeln!(
                f,
                "Error injected at position {}: {}",
                position, record.corrupted
            )?,
            None => writeln!(f, "No error injected: {}", record.corrupted)?,
        }
        writeln!(f, "Syndrome: {}", record.syndrome)?;
        match record.error {
            ErrorPosition::At(position) => {
                writeln!(f, "Error found at position {}", position)?;
                writeln!(f, "Corrected codeword: {}", record.corrected)?;
            }
            ErrorPosition::None => writeln!(f, "No errors detected")?,
        }
        if record.matches_original {
            writeln!(f, "Result matches the original codeword")
        } else {
            writeln!(f, "Result does NOT match the original codeword")
        }
    }
}

/// Writes the report for `record` to `path`, replacing any previous report.
///
/// The text goes to a temporary file in the same directory first and is then
/// renamed over `path`, so a failed run never leaves a partial report behind.
pub fn write_report(path: &Path, record: &RunRecord) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir)?;
    write!(file, "{}", Report(record))?;
    file.as_file().sync_all()?;
    file.persist(path).map_err(|e| e.error)?;

    info!("report written to {}", path.display());
    Ok(())
}
