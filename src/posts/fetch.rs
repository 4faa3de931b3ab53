//! The GraphQL product fetch.
//!
//! One bearer-authorized POST of `{query}` to the GraphQL endpoint, decoded
//! body handed back unchanged. GraphQL-level errors ride inside the 200
//! envelope's `errors` field and are not inspected here; only HTTP-level
//! and decode failures surface as [`QueryError`].

use chrono::Utc;
use thiserror::Error;

use crate::auth::AccessToken;
use crate::config::Config;
use crate::posts::window::QueryWindow;
use crate::session::{body_excerpt, HttpSession};

/// Errors from the product fetch.
///
/// Every variant is terminal for the run; there is no retry. Note that a
/// 200 response with an empty `edges` list is not an error at all, and a
/// 200 response with a GraphQL `errors` field still decodes successfully
/// here.
#[derive(Debug, Error)]
pub enum QueryError {
    /// The GraphQL endpoint answered with a non-200 status.
    #[error("GraphQL endpoint returned status {status}: {body_excerpt}")]
    Status {
        /// The HTTP status code of the response.
        status: u16,
        /// Up to the first 500 bytes of the response body.
        body_excerpt: String,
    },

    /// The endpoint answered 200 but the body was not valid JSON.
    #[error("GraphQL response body could not be decoded: {reason}")]
    Decode {
        /// The decode failure description.
        reason: String,
    },

    /// Network or connection error.
    #[error("Network error while querying GraphQL endpoint: {0}")]
    Network(#[from] reqwest::Error),
}

/// Runs the one supported query and returns the decoded envelope unchanged.
///
/// The request carries `Authorization: Bearer <token>` and the session's
/// bounded per-request timeout. The `postedAfter` bound is computed from
/// the current UTC time at call time.
///
/// # Errors
///
/// - [`QueryError::Status`] for a non-200 response
/// - [`QueryError::Decode`] for a 200 response that is not valid JSON
/// - [`QueryError::Network`] for transport failures
pub async fn fetch_posts(
    session: &HttpSession,
    config: &Config,
    token: &AccessToken,
    window: &QueryWindow,
) -> Result<serde_json::Value, QueryError> {
    let posted_after = window.posted_after(Utc::now());
    tracing::info!(posted_after = %posted_after, limit = %window.limit, "fetching products");

    let query = window.build_query(&posted_after);
    let body = serde_json::json!({ "query": query });

    let response = session
        .client()
        .post(config.graphql_url())
        .header(reqwest::header::AUTHORIZATION, token.bearer())
        .header(reqwest::header::CONTENT_TYPE, "application/json")
        .timeout(session.request_timeout())
        .json(&body)
        .send()
        .await?;

    let status = response.status().as_u16();
    if status != 200 {
        let headers = format!("{:?}", response.headers());
        let text = response.text().await.unwrap_or_default();
        let body_excerpt = body_excerpt(&text);
        tracing::error!(status = %status, headers = %headers, body = %body_excerpt, "product fetch failed");
        return Err(QueryError::Status {
            status,
            body_excerpt,
        });
    }

    let text = response.text().await?;
    let payload: serde_json::Value =
        serde_json::from_str(&text).map_err(|e| QueryError::Decode {
            reason: e.to_string(),
        })?;

    Ok(payload)
}
