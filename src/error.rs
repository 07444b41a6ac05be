use thiserror::Error;

/// Unified error type for changelog generation
#[derive(Error, Debug)]
pub enum ChangelogError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Formatting error: {0}")]
    Format(String),

    #[error("Source error: {0}")]
    Source(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Convenience type alias for Results in gh-changelog
pub type Result<T> = std::result::Result<T, ChangelogError>;

impl ChangelogError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        ChangelogError::Config(msg.into())
    }

    /// Create a formatting error with context
    pub fn format(msg: impl Into<String>) -> Self {
        ChangelogError::Format(msg.into())
    }

    /// Create a source error with context
    pub fn source(msg: impl Into<String>) -> Self {
        ChangelogError::Source(msg.into())
    }
}
