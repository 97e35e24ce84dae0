//! Error type shared by every stage of a run.
//!
//! Each variant carries the path it failed on so the CLI message alone
//! identifies what went wrong.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IconError {
    #[error("Input file does not exist: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("Failed to load image '{}': {source}", .path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to encode PNG for '{}': {source}", .path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("I/O error during {operation} on '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        operation: &'static str,
        #[source]
        source: io::Error,
    },

    #[error("Failed to render default icon: {0}")]
    Render(String),

    #[error("Source validation failed: {0}")]
    Validation(String),

    #[error("Icon-set directory has no parent catalog directory: {}", .0.display())]
    NoCatalogDir(PathBuf),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl IconError {
    pub(crate) fn io(path: impl Into<PathBuf>, operation: &'static str, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            operation,
            source,
        }
    }
}
