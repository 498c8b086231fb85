//! Error types for helios-io.

use std::path::PathBuf;

/// Error type for all fallible operations in the helios-io crate.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// Returned when a required file does not exist on disk.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// Path that could not be found.
        path: PathBuf,
    },

    /// Wraps an error originating from the CSV library.
    #[error("csv error: {reason}")]
    Csv {
        /// Description of the underlying CSV failure.
        reason: String,
    },

    /// Wraps a plain I/O error.
    #[error("i/o error: {reason}")]
    Io {
        /// Description of the underlying I/O failure.
        reason: String,
    },

    /// Returned when a row violates the long-format layout.
    #[error("line {line}: {details}")]
    Format {
        /// 1-based line number in the file (the header is line 1).
        line: usize,
        /// Human-readable description of the problem.
        details: String,
    },

    /// Spectrum data-model error raised while assembling the table.
    #[error(transparent)]
    Spectrum(#[from] helios_spectrum::SpectrumError),
}

impl From<csv::Error> for IoError {
    fn from(e: csv::Error) -> Self {
        IoError::Csv {
            reason: e.to_string(),
        }
    }
}

impl From<std::io::Error> for IoError {
    fn from(e: std::io::Error) -> Self {
        IoError::Io {
            reason: e.to_string(),
        }
    }
}
