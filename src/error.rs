// src/error.rs
use thiserror::Error;

use crate::config::consts::LOAD_ERROR_MESSAGE;

/// Why a sheet could not be loaded.
///
/// The variants carry detail for the log only; users always see
/// [`LoadError::user_message`].
#[derive(Error, Debug)]
pub enum LoadError {
    /// No sheet location set, or still the placeholder. Never fetched.
    #[error("sheet location is not configured")]
    Unconfigured,

    /// Server answered with a non-success status.
    #[error("HTTP status {0}")]
    Status(u16),

    /// Connection, TLS or body read failure.
    #[error("network error: {0}")]
    Network(String),

    /// Local sheet file could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl LoadError {
    pub fn user_message(&self) -> &'static str {
        LOAD_ERROR_MESSAGE
    }
}

impl From<reqwest::Error> for LoadError {
    fn from(e: reqwest::Error) -> Self {
        match e.status() {
            Some(status) => LoadError::Status(status.as_u16()),
            None => LoadError::Network(e.to_string()),
        }
    }
}
