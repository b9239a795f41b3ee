//! Data loading error types
//!
//! Every error here is fatal at startup: the dashboard never serves partial data.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading the source tables
#[derive(Error, Debug)]
pub enum DataError {
    /// Input file does not exist
    #[error("Data file not found: {path:?}")]
    MissingFile { path: PathBuf },

    /// Input file exists but a header or row could not be parsed
    #[error("Failed to parse {path:?}: {error}")]
    Csv { path: PathBuf, error: String },

    /// I/O operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DataError {
    pub(crate) fn csv(path: impl Into<PathBuf>, error: csv::Error) -> Self {
        DataError::Csv {
            path: path.into(),
            error: error.to_string(),
        }
    }
}

/// Result type alias for data operations
pub type DataResult<T> = Result<T, DataError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DataError::MissingFile {
            path: PathBuf::from("main_data/orders.csv"),
        };
        assert_eq!(
            err.to_string(),
            "Data file not found: \"main_data/orders.csv\""
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let data_err: DataError = io_err.into();
        assert!(matches!(data_err, DataError::Io(_)));
    }
}
