//! Configuration error types.
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation: a missing or empty credential is reported before any
//! network call is attempted.

use thiserror::Error;

/// Errors that can occur while assembling the connector configuration.
///
/// Each variant carries a clear, actionable message. Credential problems are
/// always fatal: the run aborts without touching the network.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Client ID cannot be empty.
    #[error("Client ID cannot be empty. Please provide a valid Product Hunt API client ID.")]
    EmptyClientId,

    /// Client secret cannot be empty.
    #[error("Client secret cannot be empty. Please provide a valid Product Hunt API client secret.")]
    EmptyClientSecret,

    /// A required environment variable is not set.
    #[error("Missing required environment variable: '{name}'. Add it to your environment or .env file.")]
    MissingEnvVar {
        /// The name of the missing variable.
        name: &'static str,
    },

    /// A required builder field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// A base URL override is invalid.
    #[error("Invalid base URL '{url}'. Please provide an absolute URL with scheme (e.g., 'https://api.producthunt.com').")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },
}
