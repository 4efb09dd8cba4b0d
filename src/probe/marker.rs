use std::fs;
use std::path::Path;

use chrono::Utc;

use crate::probe::RunParams;
use crate::utils::error::{ProbeError, ProbeResult};

/// Ensure the output directory exists.
///
/// Idempotent: an already-existing directory is not an error, and missing
/// intermediate path components are created. Any other OS failure is a
/// `DirectoryCreation` error.
pub fn ensure_output_dir(dir: &Path) -> ProbeResult<()> {
    fs::create_dir_all(dir).map_err(|source| ProbeError::DirectoryCreation {
        path: dir.to_path_buf(),
        source,
    })
}

/// Write the marker file, truncating any previous content.
///
/// The timestamp is captured here, at write time, so re-running with the same
/// parameters refreshes it.
pub fn write_marker(path: &Path, params: &RunParams) -> ProbeResult<()> {
    let content = render_marker(params, current_timestamp());
    fs::write(path, content).map_err(|source| ProbeError::FileWrite {
        path: path.to_path_buf(),
        source,
    })
}

/// Render the five fixed marker lines, newline-terminated, in order.
pub fn render_marker(params: &RunParams, timestamp: f64) -> String {
    format!(
        "Hello from h.py\n\
         Global Rank: {}\n\
         Target GPU: {}\n\
         Target Tile: {}\n\
         Timestamp: {}\n",
        params.rank, params.gpu, params.tile, timestamp
    )
}

/// Seconds since the Unix epoch as a float, microsecond resolution.
pub fn current_timestamp() -> f64 {
    Utc::now().timestamp_micros() as f64 / 1_000_000.0
}
