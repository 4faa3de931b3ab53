//! OAuth 2.0 Client Credentials Grant against the Product Hunt token
//! endpoint.
//!
//! The exchange is a single POST of `{client_id, client_secret, grant_type}`
//! answered by `{access_token, ...}`. The caller is expected to run
//! [`HttpSession::prime`](crate::session::HttpSession::prime) on the same
//! session first: the endpoint wants to see a prior visit to the web root,
//! and the cookies from that visit ride along on this request.
//!
//! # Example
//!
//! ```rust,ignore
//! use producthunt_digest::{acquire_access_token, Config, HttpSession};
//!
//! let config = Config::from_env()?;
//! let session = HttpSession::new(&config);
//!
//! session.prime().await;
//! let token = acquire_access_token(&session, &config).await?;
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::auth::error::AuthError;
use crate::config::Config;
use crate::session::{body_excerpt, HttpSession};

/// Grant type for client credentials.
const CLIENT_CREDENTIALS_GRANT_TYPE: &str = "client_credentials";

/// Request body for the client credentials exchange.
#[derive(Debug, Serialize)]
struct ClientCredentialsRequest<'a> {
    client_id: &'a str,
    client_secret: &'a str,
    grant_type: &'a str,
}

/// Successful token endpoint response. Extra fields are ignored.
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// An opaque bearer access token.
///
/// No expiry is tracked locally; a fresh token is requested on every run.
///
/// # Security
///
/// The `Debug` implementation masks the token value.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Wraps a raw token string.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Renders the `Authorization` header value for this token.
    #[must_use]
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl AsRef<str> for AccessToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(*****)")
    }
}

/// Exchanges the configured client credentials for an access token.
///
/// Sends one POST to the token endpoint over the shared session. No retry:
/// any failure is terminal for the run, and the caller must not proceed to
/// the product fetch without a token.
///
/// The token request deliberately carries no timeout; only the GraphQL call
/// and the probes are bounded.
///
/// # Errors
///
/// - [`AuthError::Status`] for a non-200 response
/// - [`AuthError::MalformedBody`] for a 200 response without a usable
///   `access_token`
/// - [`AuthError::Network`] for transport failures
pub async fn acquire_access_token(
    session: &HttpSession,
    config: &Config,
) -> Result<AccessToken, AuthError> {
    let request_body = ClientCredentialsRequest {
        client_id: config.client_id().as_ref(),
        client_secret: config.client_secret().as_ref(),
        grant_type: CLIENT_CREDENTIALS_GRANT_TYPE,
    };

    tracing::info!(url = %config.token_url(), "requesting access token");
    let response = session
        .client()
        .post(config.token_url())
        .json(&request_body)
        .send()
        .await?;

    let status = response.status().as_u16();
    if status != 200 {
        let headers = format!("{:?}", response.headers());
        let body = response.text().await.unwrap_or_default();
        let body_excerpt = body_excerpt(&body);
        tracing::error!(status = %status, headers = %headers, body = %body_excerpt, "token request failed");
        return Err(AuthError::Status {
            status,
            body_excerpt,
        });
    }

    let body = response.text().await?;
    let token: TokenResponse =
        serde_json::from_str(&body).map_err(|e| AuthError::MalformedBody {
            reason: format!("could not parse token response: {e}"),
        })?;
    if token.access_token.is_empty() {
        return Err(AuthError::MalformedBody {
            reason: "access_token field is empty".to_string(),
        });
    }

    tracing::info!("access token obtained");
    Ok(AccessToken::new(token.access_token))
}
