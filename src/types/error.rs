//! Error types for the Fraud Review Engine
//!
//! This module defines all error types that can occur while ingesting,
//! reviewing and exporting transactions.
//!
//! # Error Categories
//!
//! - **Input Errors**: A record file could not be read or parsed
//! - **Export Errors**: Nothing to export, or the output could not be written
//! - **Setup Errors**: No input files given, runtime could not start
//!
//! Only setup errors are fatal. Input and export errors are reported and the
//! session carries on.

use thiserror::Error;

/// Main error type for the review engine
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ReviewError {
    /// Export requested for an empty record set
    ///
    /// The export header is derived from the records, so an empty set is
    /// refused rather than producing an empty or header-only file.
    #[error("No transactions to export")]
    EmptyExport,

    /// A record could not be parsed
    ///
    /// This is a recoverable error - the offending input is skipped and the
    /// remaining inputs are still processed.
    #[error("Failed to parse {origin}: {message}")]
    ParseError {
        /// Where the record came from (usually a file path)
        origin: String,
        /// Description of the parsing error
        message: String,
    },

    /// I/O error occurred while reading input or writing output
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// The export writer failed
    #[error("Export failed: {message}")]
    ExportError {
        /// Description of the write failure
        message: String,
    },

    /// The file source was selected without any input files
    #[error("No input files given for the file source")]
    NoInputFiles,

    /// The async runtime could not be created
    #[error("Runtime error: {message}")]
    RuntimeError {
        /// Description of the runtime failure
        message: String,
    },
}

// Conversion from io::Error to ReviewError
impl From<std::io::Error> for ReviewError {
    fn from(error: std::io::Error) -> Self {
        ReviewError::IoError {
            message: error.to_string(),
        }
    }
}

// Conversion from csv::Error to ReviewError
impl From<csv::Error> for ReviewError {
    fn from(error: csv::Error) -> Self {
        ReviewError::ExportError {
            message: error.to_string(),
        }
    }
}

impl ReviewError {
    /// Create a ParseError
    pub fn parse_error(origin: &str, message: impl Into<String>) -> Self {
        ReviewError::ParseError {
            origin: origin.to_string(),
            message: message.into(),
        }
    }

    /// Create an IoError scoped to an input
    pub fn read_error(origin: &str, error: &std::io::Error) -> Self {
        ReviewError::IoError {
            message: format!("{}: {}", origin, error),
        }
    }

    /// Create a RuntimeError
    pub fn runtime_error(message: impl Into<String>) -> Self {
        ReviewError::RuntimeError {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::empty_export(ReviewError::EmptyExport, "No transactions to export")]
    #[case::parse_error(
        ReviewError::ParseError { origin: "tx_1.json".to_string(), message: "expected value at line 1 column 1".to_string() },
        "Failed to parse tx_1.json: expected value at line 1 column 1"
    )]
    #[case::io_error(
        ReviewError::IoError { message: "Permission denied".to_string() },
        "I/O error: Permission denied"
    )]
    #[case::export_error(
        ReviewError::ExportError { message: "broken pipe".to_string() },
        "Export failed: broken pipe"
    )]
    #[case::no_input_files(ReviewError::NoInputFiles, "No input files given for the file source")]
    #[case::runtime_error(
        ReviewError::RuntimeError { message: "no threads".to_string() },
        "Runtime error: no threads"
    )]
    fn test_error_display(#[case] error: ReviewError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    #[case::parse_error(
        ReviewError::parse_error("a.json", "bad"),
        ReviewError::ParseError { origin: "a.json".to_string(), message: "bad".to_string() }
    )]
    #[case::runtime_error(
        ReviewError::runtime_error("no threads"),
        ReviewError::RuntimeError { message: "no threads".to_string() }
    )]
    fn test_helper_functions(#[case] result: ReviewError, #[case] expected: ReviewError) {
        assert_eq!(result, expected);
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let error: ReviewError = io_error.into();
        assert!(matches!(error, ReviewError::IoError { .. }));
        assert_eq!(error.to_string(), "I/O error: missing");
    }

    #[test]
    fn test_read_error_includes_origin() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let error = ReviewError::read_error("tx_9.json", &io_error);
        assert_eq!(error.to_string(), "I/O error: tx_9.json: missing");
    }
}
