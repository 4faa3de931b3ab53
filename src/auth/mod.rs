//! OAuth 2.0 client-credentials authentication.
//!
//! One run, one token: the access token is re-requested on every invocation
//! and never cached or refreshed locally.

mod client_credentials;
mod error;

pub use client_credentials::{acquire_access_token, AccessToken};
pub use error::AuthError;
