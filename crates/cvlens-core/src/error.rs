//! Error types for cvlens-core.
//!
//! The scoring engine itself never fails: [`crate::analyze`] and
//! [`crate::audit::merge_audit`] return plain values. These errors cover the
//! edges around it (configuration discovery and parsing JSON documents).

use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// Configuration file not found after searching all locations.
    #[error("no configuration file found")]
    NotFound,
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur when reading input documents.
#[derive(Error, Debug)]
pub enum InputError {
    /// A JSON document could not be parsed into the expected shape.
    #[error("invalid {what} JSON: {source}")]
    Json {
        /// What kind of document was being parsed ("resume", "AI audit").
        what: &'static str,
        /// The underlying parse error.
        #[source]
        source: serde_json::Error,
    },
}

/// Result type alias using [`InputError`].
pub type InputResult<T> = Result<T, InputError>;
