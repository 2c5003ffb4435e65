//! Error types for F1 data ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading or writing raw sources.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Directory not found or not readable.
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Failed to read directory entries.
    #[error("failed to read directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Source file not found.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write file.
    #[error("failed to write file {path}: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === Parsing Errors ===
    /// Failed to read or write CSV.
    #[error("failed to process CSV {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: ::csv::Error,
    },

    /// Failed to parse a JSON document.
    #[error("failed to parse JSON {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Pasted table had no usable content.
    #[error("no content in {path}; paste the race table rows (without header) into this file")]
    EmptyPaste { path: PathBuf },

    // === Network Errors ===
    /// Request could not be sent or the body could not be decoded.
    #[error("request to {url} failed: {message}")]
    Http { url: String, message: String },

    /// Remote answered with a non-success status.
    #[error("{status} for {url}")]
    HttpStatus { url: String, status: u16 },
}

impl IngestError {
    /// Maps an open/read error, keeping `NotFound` distinct.
    pub(crate) fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound { path }
        } else {
            Self::FileRead { path, source }
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("data/2018/r1.csv"),
        };
        assert_eq!(err.to_string(), "file not found: data/2018/r1.csv");
    }

    #[test]
    fn test_read_error_maps_not_found() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        assert!(matches!(
            IngestError::read("x.csv", io),
            IngestError::FileNotFound { .. }
        ));

        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        assert!(matches!(
            IngestError::read("x.csv", io),
            IngestError::FileRead { .. }
        ));
    }
}
