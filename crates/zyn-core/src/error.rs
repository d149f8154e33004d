//! Error types for zyn-core.
//!
//! Catalog operations themselves never fail; errors only arise at the edges
//! (loading files, parsing config, validating form input).

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShopError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("unknown theme: {0} (expected light or dark)")]
    UnknownTheme(String),
}

/// User-facing form validation failures. The `Display` text is what the
/// front end shows verbatim.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please fill in all fields.")]
    MissingFields,

    #[error("Please enter a valid email address.")]
    InvalidEmail,

    #[error("Please enter your email address.")]
    EmptyEmail,
}

pub type Result<T> = std::result::Result<T, ShopError>;
