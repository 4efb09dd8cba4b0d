use std::path::PathBuf;
use thiserror::Error;

/// Main error type for rank-probe filesystem side effects
#[derive(Debug, Error)]
pub enum ProbeError {
    /// Directory creation failed. Fatal to the remaining side effects of the
    /// run: the marker write is skipped. Does not change the process exit
    /// status.
    #[error("failed to create directory {path}: {source}")]
    DirectoryCreation {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Marker file open or write failed. Reported only; the run still prints
    /// its completion line.
    #[error("failed to write file {path}: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ProbeError {
    /// A directory failure aborts the rest of the run's side effects, a file
    /// failure does not.
    pub fn is_fatal_to_run(&self) -> bool {
        matches!(self, ProbeError::DirectoryCreation { .. })
    }
}

/// Result type alias for probe operations
pub type ProbeResult<T> = Result<T, ProbeError>;
