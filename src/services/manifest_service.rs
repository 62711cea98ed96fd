//! Manifest service - writes the run map for a K x R grid of ADMIXTURE runs

use crate::models::RunGrid;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Output filename used when none is given
pub const DEFAULT_OUTPUT: &str = "admixture_runs.txt";

/// Result type for manifest operations
pub type ManifestResult<T> = Result<T, ManifestError>;

/// Errors that can occur while writing a manifest
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("Failed to create '{}': {source}", .path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// What a successful [`generate`] call produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestSummary {
    pub path: PathBuf,
    pub lines: u64,
}

/// Write one newline-terminated record per run in `grid`, in grid order.
///
/// Returns the number of lines written.
pub fn write_manifest<W: Write>(grid: &RunGrid, writer: &mut W) -> io::Result<u64> {
    let mut lines = 0;
    for run in grid {
        writeln!(writer, "{}", run.manifest_line())?;
        lines += 1;
    }
    Ok(lines)
}

/// Create (or truncate) `output` and fill it with the manifest for `max_k` x `trials`.
///
/// Bounds of zero or below produce an empty file. A failure part way through
/// leaves whatever was already written on disk.
pub fn generate(max_k: i64, trials: i64, output: &Path) -> ManifestResult<ManifestSummary> {
    let file = File::create(output).map_err(|source| ManifestError::Create {
        path: output.to_path_buf(),
        source,
    })?;

    let write_err = |source| ManifestError::Write {
        path: output.to_path_buf(),
        source,
    };

    let mut writer = BufWriter::new(file);
    let lines = write_manifest(&RunGrid::new(max_k, trials), &mut writer).map_err(write_err)?;
    // BufWriter swallows errors on drop
    writer.flush().map_err(write_err)?;

    Ok(ManifestSummary {
        path: output.to_path_buf(),
        lines,
    })
}
