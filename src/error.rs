//! Error types for wiki generation.

use thiserror::Error;

/// Errors that can occur while generating a wiki page.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("generation API returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("generation API returned no text")]
    EmptyResponse,

    #[error("unsupported provider: {0}")]
    UnsupportedProvider(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, Error>;
