// ABOUTME: Error types for the artifact-showcase application
// ABOUTME: Provides structured error handling for loading, navigation and serving

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShowcaseError {
    /// Transport and parse failures of the content descriptor are not distinguished.
    #[error("Failed to load content from {location}: {reason}")]
    ContentLoadFailure { location: String, reason: String },

    #[error("Failed to read file: {0}")]
    FileReadError(#[from] std::io::Error),

    #[error("Failed to fetch remote resource: {0}")]
    FetchError(#[from] reqwest::Error),

    #[error("Invalid resource path: {0}")]
    InvalidResourcePath(String),

    #[error("Input validation error: {0}")]
    ValidationError(String),

    #[error("Path not found: {0}")]
    PathNotFoundError(PathBuf),

    #[error("Slide {index} is out of range for {total} slides")]
    SlideOutOfRange { index: usize, total: usize },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Server error: {0}")]
    ServerError(String),

    #[error("Watch error: {0}")]
    WatchError(String),

    #[error("Unknown error: {0}")]
    UnknownError(String),
}

impl ShowcaseError {
    pub fn content_load(location: impl Into<String>, reason: impl ToString) -> Self {
        ShowcaseError::ContentLoadFailure {
            location: location.into(),
            reason: reason.to_string(),
        }
    }
}

// Implement conversion from anyhow::Error to our ShowcaseError
impl From<anyhow::Error> for ShowcaseError {
    fn from(err: anyhow::Error) -> Self {
        ShowcaseError::UnknownError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ShowcaseError>;
