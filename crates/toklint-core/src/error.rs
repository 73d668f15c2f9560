//! Error types for toklint-core.

use thiserror::Error;

/// Errors that can occur when building an analyzer configuration.
///
/// Classification itself is infallible: every input-level anomaly is data,
/// not an error. Only configuration can be rejected.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// An unsupported language code was provided.
    #[error("unknown language code: {code}. Use: {available}")]
    UnknownLanguage {
        /// The code that was requested.
        code: String,
        /// Comma-separated list of supported codes.
        available: String,
    },
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;
