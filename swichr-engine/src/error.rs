//! Engine error types

use std::path::PathBuf;
use thiserror::Error;

/// Engine-level errors
///
/// Failures to write an individual output line are not represented here: they
/// are logged and counted in [`RunStats`](crate::RunStats) while the run
/// carries on.
#[derive(Error, Debug)]
pub enum EngineError {
    /// An input or output path could not be opened
    #[error("failed to open {}: {source}", path.display())]
    Open {
        /// The path that failed to open
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The input stream failed part way through
    #[error("read failed after {bytes_read} bytes: {source}")]
    Read {
        /// Bytes successfully read before the failure
        bytes_read: u64,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Configuration error
    #[error("invalid configuration: {0}")]
    ConfigError(String),

    /// Worker pool could not be created
    #[cfg(feature = "parallel")]
    #[error("failed to build thread pool: {0}")]
    ThreadPool(String),
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_open_error_display() {
        let error = EngineError::Open {
            path: PathBuf::from("missing.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        };
        assert_eq!(error.to_string(), "failed to open missing.txt: no such file");
    }

    #[test]
    fn test_read_error_display() {
        let error = EngineError::Read {
            bytes_read: 42,
            source: io::Error::new(io::ErrorKind::Other, "disk gone"),
        };
        assert_eq!(error.to_string(), "read failed after 42 bytes: disk gone");
        assert!(std::error::Error::source(&error).is_some());
    }

    #[test]
    fn test_config_error_display() {
        let error = EngineError::ConfigError("chunk_size must be greater than 0".into());
        assert_eq!(
            error.to_string(),
            "invalid configuration: chunk_size must be greater than 0"
        );
    }
}
