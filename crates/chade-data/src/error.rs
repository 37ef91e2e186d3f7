//! Error types for the data loaders.
//!
//! Uses [`thiserror`] for derivation. [`LoadError`] converts into
//! [`ChadeError`] for callers that only deal with the core error type.

use std::path::PathBuf;

use chade_core::ChadeError;
use thiserror::Error;

/// Error loading one of the data files.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be opened.
    #[error("cannot open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error reading data.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A line that does not follow the file format.
    #[error("malformed data file {file} (line {line}): {message}")]
    Malformed {
        file: String,
        line: usize,
        message: String,
    },

    /// A core library error.
    #[error(transparent)]
    Core(#[from] ChadeError),
}

impl LoadError {
    pub(crate) fn malformed(file: &str, line: usize, message: impl Into<String>) -> Self {
        LoadError::Malformed {
            file: file.to_string(),
            line,
            message: message.into(),
        }
    }
}

impl From<LoadError> for ChadeError {
    fn from(err: LoadError) -> Self {
        match err {
            LoadError::Open { .. } => ChadeError::IoError(err.to_string()),
            LoadError::Io(e) => ChadeError::IoError(e.to_string()),
            LoadError::Malformed {
                file,
                line,
                message,
            } => ChadeError::DataFile {
                file,
                line,
                message,
            },
            LoadError::Core(e) => e,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_display() {
        let err = LoadError::malformed("Blocks.txt", 3, "missing ';'");
        assert_eq!(
            err.to_string(),
            "malformed data file Blocks.txt (line 3): missing ';'"
        );
    }

    #[test]
    fn open_error_names_the_path() {
        let err = LoadError::Open {
            path: PathBuf::from("missing/UnicodeData.txt"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(err.to_string(), "cannot open missing/UnicodeData.txt: not found");
    }

    #[test]
    fn io_error_from_std() {
        let err: LoadError = std::io::Error::new(std::io::ErrorKind::InvalidData, "bad utf-8").into();
        assert!(matches!(err, LoadError::Io(_)));
    }

    #[test]
    fn to_chade_error_malformed() {
        let err: ChadeError = LoadError::malformed("entities.txt", 7, "bad hex").into();
        assert_eq!(
            err,
            ChadeError::DataFile {
                file: "entities.txt".to_string(),
                line: 7,
                message: "bad hex".to_string(),
            }
        );
    }

    #[test]
    fn to_chade_error_open_keeps_message() {
        let err: ChadeError = LoadError::Open {
            path: PathBuf::from("Blocks.txt"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        }
        .into();
        assert_eq!(
            err,
            ChadeError::IoError("cannot open Blocks.txt: not found".to_string())
        );
    }

    #[test]
    fn core_error_passes_through() {
        let err: ChadeError = LoadError::from(ChadeError::InvalidCodepoint(0x110000)).into();
        assert_eq!(err, ChadeError::InvalidCodepoint(0x110000));
    }
}
