//! Error types for chade.
//!
//! [`ChadeError`] covers fatal conditions (unreadable or malformed data
//! files, invalid values handed to constructors). [`CodecError`] is the
//! outcome of a rejected legacy charset conversion; the dispatchers turn it
//! into a decode failure or an encoder decline, never into a panic.

use std::fmt;

use crate::codepoint::Codepoint;

/// Fatal error types.
#[derive(Debug, Clone, PartialEq)]
pub enum ChadeError {
    /// A data file (Unicode database, block table, entity table) is malformed.
    DataFile {
        /// Name or path of the offending file.
        file: String,
        /// 1-based line number of the offending line.
        line: usize,
        /// What was wrong with the line.
        message: String,
    },
    /// I/O error reading a data file.
    IoError(String),
    /// A numeric value outside `[0, 0x10FFFF]` was used as a codepoint.
    InvalidCodepoint(u32),
    /// A byte sequence must hold at least one byte.
    EmptyByteSequence,
    /// Any other error not covered by specific variants.
    Other(String),
}

impl fmt::Display for ChadeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChadeError::DataFile {
                file,
                line,
                message,
            } => write!(f, "malformed data file {file} (line {line}): {message}"),
            ChadeError::IoError(msg) => write!(f, "I/O error: {msg}"),
            ChadeError::InvalidCodepoint(value) => {
                write!(f, "{value:#X} is outside the Unicode codespace")
            }
            ChadeError::EmptyByteSequence => write!(f, "byte sequence is empty"),
            ChadeError::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for ChadeError {}

impl From<std::io::Error> for ChadeError {
    fn from(err: std::io::Error) -> Self {
        ChadeError::IoError(err.to_string())
    }
}

/// Why a legacy charset conversion was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// The converter does not know the charset label.
    UnsupportedCharset(String),
    /// The codepoint has no representation in the charset.
    Unrepresentable {
        /// The codepoint that could not be converted.
        codepoint: Codepoint,
        /// The charset label.
        charset: String,
    },
    /// The bytes are not a valid sequence in the charset.
    Malformed {
        /// The charset label.
        charset: String,
    },
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodecError::UnsupportedCharset(charset) => write!(f, "unsupported charset: {charset}"),
            CodecError::Unrepresentable { codepoint, charset } => {
                write!(f, "U+{codepoint:04X} is not representable in {charset}")
            }
            CodecError::Malformed { charset } => {
                write!(f, "malformed byte sequence for {charset}")
            }
        }
    }
}

impl std::error::Error for CodecError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_file_error_names_file_and_line() {
        let err = ChadeError::DataFile {
            file: "UnicodeData.txt".to_string(),
            line: 12,
            message: "expected 15 fields, found 3".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "malformed data file UnicodeData.txt (line 12): expected 15 fields, found 3"
        );
    }

    #[test]
    fn invalid_codepoint_display() {
        let err = ChadeError::InvalidCodepoint(0x110000);
        assert_eq!(err.to_string(), "0x110000 is outside the Unicode codespace");
    }

    #[test]
    fn io_error_converts() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: ChadeError = io_err.into();
        assert!(matches!(err, ChadeError::IoError(_)));
        assert!(err.to_string().contains("file missing"));
    }

    #[test]
    fn codec_error_unrepresentable_display() {
        let err = CodecError::Unrepresentable {
            codepoint: Codepoint::from('€'),
            charset: "iso-8859-1".to_string(),
        };
        assert_eq!(err.to_string(), "U+20AC is not representable in iso-8859-1");
    }

    #[test]
    fn codec_error_implements_std_error() {
        let err: Box<dyn std::error::Error> =
            Box::new(CodecError::UnsupportedCharset("ebcdic".to_string()));
        assert!(err.to_string().contains("ebcdic"));
    }
}
