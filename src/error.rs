//! Error types for document ingestion.
//!
//! These never cross the controller boundary: the controller logs them and
//! collapses every variant into [`crate::state::ErrorKind::FileRead`].

use std::fmt;
use std::path::PathBuf;

/// Reasons a filesystem ingestion attempt can fail.
#[derive(Debug)]
pub enum IngestError {
    /// Path does not exist
    NotFound(PathBuf),
    /// Path exists but is a directory or special file
    NotAFile(PathBuf),
    /// Extension is not in the supported list
    UnsupportedExtension(PathBuf),
    /// Reading or decoding the file failed
    Io(std::io::Error),
}

impl fmt::Display for IngestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IngestError::NotFound(path) => write!(f, "File not found: {}", path.display()),
            IngestError::NotAFile(path) => write!(f, "Not a regular file: {}", path.display()),
            IngestError::UnsupportedExtension(path) => {
                write!(f, "Unsupported file type: {}", path.display())
            }
            IngestError::Io(err) => write!(f, "Read error: {}", err),
        }
    }
}

impl std::error::Error for IngestError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IngestError::Io(err) => Some(err),
            IngestError::NotFound(_)
            | IngestError::NotAFile(_)
            | IngestError::UnsupportedExtension(_) => None,
        }
    }
}

impl From<std::io::Error> for IngestError {
    fn from(err: std::io::Error) -> Self {
        IngestError::Io(err)
    }
}

/// Type alias for ingestion results.
pub type Result<T> = std::result::Result<T, IngestError>;
