//! Error types for Docpull

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during extraction, fetch, and save operations
#[derive(Debug, Error)]
pub enum Error {
    /// A required input was empty
    #[error("Invalid {field}: must be a non-empty string")]
    InvalidInput {
        /// Name of the offending parameter
        field: &'static str,
    },

    /// No document id found in the URL
    #[error("Could not extract a document id from the provided URL")]
    ExtractionFailed,

    /// Unrecognized export format or encoding label
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Configured export base is not a valid URL
    #[error("Invalid export base URL: {0}")]
    InvalidExportBase(String),

    /// Failed to build HTTP client
    #[error("Failed to create HTTP client")]
    ClientBuild(#[source] reqwest::Error),

    /// Transport-level request or body failure
    #[error("Request failed")]
    Network(#[source] reqwest::Error),

    /// Server answered with a non-success status
    #[error("Server returned HTTP {status}")]
    HttpStatus {
        /// The HTTP status code of the response
        status: u16,
    },

    /// Directory creation or file write failed
    #[error("I/O error at {}", path.display())]
    Io {
        /// Path of the directory or file being written
        path: PathBuf,
        /// Underlying filesystem error
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            Error::InvalidInput { field: "filename" }.to_string(),
            "Invalid filename: must be a non-empty string"
        );
        assert_eq!(
            Error::ExtractionFailed.to_string(),
            "Could not extract a document id from the provided URL"
        );
        assert_eq!(
            Error::UnsupportedFormat("exe".to_string()).to_string(),
            "Unsupported format: exe"
        );
        assert_eq!(
            Error::HttpStatus { status: 404 }.to_string(),
            "Server returned HTTP 404"
        );
    }

    #[test]
    fn test_io_error_carries_path() {
        let err = Error::Io {
            path: PathBuf::from("/tmp/out/report.pdf"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().contains("/tmp/out/report.pdf"));
    }
}
