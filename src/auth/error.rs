//! Error types for token acquisition.

use thiserror::Error;

/// Errors from the OAuth token exchange.
///
/// Every variant is terminal for the run: there is no retry, and the
/// product fetch never runs without a token. The failing response's status,
/// headers, and a body excerpt are logged at the call site for diagnosis.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The token endpoint answered with a non-200 status.
    #[error("Token endpoint returned status {status}: {body_excerpt}")]
    Status {
        /// The HTTP status code of the response.
        status: u16,
        /// Up to the first 500 bytes of the response body.
        body_excerpt: String,
    },

    /// The token endpoint answered 200 but the body had no usable
    /// `access_token` field.
    #[error("Token response was malformed: {reason}")]
    MalformedBody {
        /// Why the body could not be used.
        reason: String,
    },

    /// Network or connection error.
    #[error("Network error while requesting token: {0}")]
    Network(#[from] reqwest::Error),
}
