//! Error types for the diff pipeline.

use std::path::PathBuf;

pub const EXIT_IO_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;
pub const EXIT_RESOURCE_EXHAUSTED: u8 = 3;

/// Errors that can occur while comparing two files.
#[derive(Debug, thiserror::Error)]
pub enum DiffError {
    /// The command line did not name exactly one old, one new and one output path.
    #[error("{0}")]
    Usage(String),

    /// An input could not be read or the output could not be written.
    #[error("Cannot open file: {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The alignment table for a pair of sequences does not fit in memory
    /// (or exceeds the configured cell limit).
    #[error(
        "alignment table for sequences of length {old_len} and {new_len} exceeds available memory"
    )]
    ResourceExhausted { old_len: usize, new_len: usize },
}

impl DiffError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DiffError::Io {
            path: path.into(),
            source,
        }
    }

    /// Process exit status reported by the binary for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            DiffError::Usage(_) => EXIT_USAGE_ERROR,
            DiffError::Io { .. } => EXIT_IO_ERROR,
            DiffError::ResourceExhausted { .. } => EXIT_RESOURCE_EXHAUSTED,
        }
    }
}

/// Convenience alias for diff results.
pub type DiffResult<T> = Result<T, DiffError>;
