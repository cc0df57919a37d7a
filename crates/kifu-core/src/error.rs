//! Error types for Kifu Core

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for shell and staging operations
pub type Result<T> = std::result::Result<T, Error>;

/// Shell error types
#[derive(Error, Debug)]
pub enum Error {
    // Descriptor errors
    #[error("Failed to read descriptor {}: {source}", .path.display())]
    DescriptorRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse descriptor {}: {source}", .path.display())]
    DescriptorParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid descriptor: {0}")]
    InvalidDescriptor(String),

    // Staging errors
    #[error("Copy source not found: {}", .path.display())]
    MissingSource { path: PathBuf },

    #[error("Failed to stage {} as {}: {source}", .from.display(), .to.display())]
    Stage {
        from: PathBuf,
        to: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to clean {}: {source}", .path.display())]
    Clean {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a descriptor validation error
    pub fn invalid(msg: impl Into<String>) -> Self {
        Error::InvalidDescriptor(msg.into())
    }

    /// Returns true if this error names an input the user can create
    pub fn is_missing_input(&self) -> bool {
        matches!(
            self,
            Error::MissingSource { .. } | Error::DescriptorRead { .. }
        )
    }
}
