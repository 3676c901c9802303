//! Error kinds raised by the translation backends.

use thiserror::Error;

/// Errors surfaced by the primary backend and the dispatcher.
///
/// Only [`TranslateError::Aggregator`] ever escapes [`crate::translation::Dispatcher::translate`];
/// the other two kinds are absorbed by the fallback path.
#[derive(Debug, Error)]
pub enum TranslateError {
    /// A required credential or setting is missing.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The primary backend could not be reached or rejected the request.
    #[error("Azure Translation Error: {0}")]
    Transport(String),

    /// The aggregator failed; this is the final failure seen by callers.
    #[error("Translation failed, Message: {0}")]
    Aggregator(String),
}

impl TranslateError {
    /// Builds a transport error from a structured remote error body.
    pub fn remote(code: i64, message: &str) -> Self {
        Self::Transport(format!("{code} - {message}"))
    }

    /// Returns `true` if this error is a missing-configuration error.
    pub const fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }
}

impl From<reqwest::Error> for TranslateError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}
