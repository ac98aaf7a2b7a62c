//! Error types for the themes crate

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("theme not found: {0}")]
    NotFound(String),

    #[error("no path for theme {0}")]
    NoPath(String),

    #[error("theme {name} already exists at {}", .path.display())]
    AlreadyExists { name: String, path: PathBuf },

    #[error("theme {name} does not exist at {}", .path.display())]
    FileNotFound { name: String, path: PathBuf },

    #[error("no theme directory")]
    NoDirectory,

    #[error("invalid theme format: {0}")]
    InvalidFormat(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ThemeError>;
