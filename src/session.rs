//! Shared HTTP session for the connector.
//!
//! Both the token acquirer and the product fetcher run over one
//! [`HttpSession`], a thin wrapper around a cookie-carrying
//! [`reqwest::Client`] with the fixed header set the remote service expects.
//! Cookies picked up by the priming request propagate into the token request
//! on the same session.

use std::time::Duration;

use crate::config::Config;

/// Browser-style user agent sent on every request.
///
/// The remote service applies abuse heuristics to unfamiliar user agents;
/// this value is known to pass them.
pub const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/113.0.0.0 Safari/537.36";

/// How much of an error response body is kept for diagnostics.
const BODY_EXCERPT_LEN: usize = 500;

/// Truncates a response body to the diagnostic excerpt length, keeping the
/// cut on a char boundary.
#[must_use]
pub fn body_excerpt(body: &str) -> String {
    if body.len() > BODY_EXCERPT_LEN {
        let end = (0..=BODY_EXCERPT_LEN)
            .rev()
            .find(|&i| body.is_char_boundary(i))
            .unwrap_or(0);
        format!("{}...", &body[..end])
    } else {
        body.to_string()
    }
}

/// Outcome of probing one endpoint, for diagnostics output.
#[derive(Debug)]
pub struct ProbeResult {
    /// Human-readable endpoint label.
    pub name: &'static str,
    /// The URL that was probed.
    pub url: String,
    /// HTTP status, if a response arrived.
    pub status: Option<u16>,
    /// Response body size in bytes, if a response arrived.
    pub body_bytes: Option<usize>,
    /// The `cf-ray` header value when Cloudflare sits in front of the
    /// endpoint.
    pub cf_ray: Option<String>,
    /// Transport error text when no response arrived.
    pub error: Option<String>,
}

impl ProbeResult {
    /// Returns `true` if the endpoint answered with a 2xx status.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.status.is_some_and(|s| (200..300).contains(&s))
    }
}

/// HTTP session shared by the token acquirer and the product fetcher.
///
/// The session handles:
/// - Cookie propagation from the priming request into the token request
/// - Fixed default headers (user agent, `Accept: application/json`)
/// - The priming GET + fixed delay that must precede the token POST
/// - Connectivity probes for diagnostics
///
/// # Thread Safety
///
/// `HttpSession` is `Send + Sync`.
#[derive(Debug)]
pub struct HttpSession {
    client: reqwest::Client,
    web_base: String,
    docs_url: String,
    priming_delay: Duration,
    request_timeout: Duration,
}

// Verify HttpSession is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpSession>();
};

impl HttpSession {
    /// Creates a new session from the configuration.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This
    /// should only happen in extremely unusual circumstances (e.g., TLS
    /// initialization failure).
    #[must_use]
    pub fn new(config: &Config) -> Self {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::ACCEPT,
            reqwest::header::HeaderValue::from_static("application/json"),
        );

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .cookie_store(true)
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            web_base: config.web_base().to_string(),
            docs_url: config.docs_url(),
            priming_delay: config.priming_delay(),
            request_timeout: config.request_timeout(),
        }
    }

    /// Returns the underlying reqwest client.
    #[must_use]
    pub const fn client(&self) -> &reqwest::Client {
        &self.client
    }

    /// Returns the bounded per-request timeout used by the GraphQL call and
    /// probes.
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    /// Visits the service web root to pick up cookies, then waits out the
    /// fixed delay.
    ///
    /// The remote token endpoint expects the session to have visited the
    /// web root first; the GET, the delay, and the token POST must stay in
    /// that order. A workaround for an undocumented anti-automation measure
    /// on the remote side, carried over as-is.
    ///
    /// Priming failures are logged but not fatal: the token request is
    /// still worth attempting without the cookies.
    pub async fn prime(&self) {
        tracing::info!(url = %self.web_base, "visiting web root to pick up cookies");
        match self.client.get(&self.web_base).send().await {
            Ok(response) => {
                tracing::debug!(status = %response.status(), "priming request completed");
            }
            Err(e) => {
                tracing::warn!(error = %e, "priming request failed, continuing without cookies");
            }
        }

        if !self.priming_delay.is_zero() {
            tokio::time::sleep(self.priming_delay).await;
        }
    }

    /// Probes the web root and the API documentation page with a bounded
    /// timeout.
    ///
    /// Used by the diagnostics mode to distinguish "the service is down or
    /// shielded" from "my credentials are wrong" before touching the
    /// authenticated endpoints.
    pub async fn probe(&self) -> Vec<ProbeResult> {
        let endpoints = [
            ("Product Hunt website", self.web_base.clone()),
            ("API documentation", self.docs_url.clone()),
        ];

        let mut results = Vec::with_capacity(endpoints.len());
        for (name, url) in endpoints {
            results.push(self.probe_one(name, url).await);
        }
        results
    }

    async fn probe_one(&self, name: &'static str, url: String) -> ProbeResult {
        let outcome = self
            .client
            .get(&url)
            .timeout(self.request_timeout)
            .send()
            .await;

        match outcome {
            Ok(response) => {
                let status = response.status().as_u16();
                let cf_ray = response
                    .headers()
                    .get("cf-ray")
                    .and_then(|v| v.to_str().ok())
                    .map(String::from);
                let body_bytes = response.bytes().await.map(|b| b.len()).ok();
                ProbeResult {
                    name,
                    url,
                    status: Some(status),
                    body_bytes,
                    cf_ray,
                    error: None,
                }
            }
            Err(e) => ProbeResult {
                name,
                url,
                status: None,
                body_bytes: None,
                cf_ray: None,
                error: Some(e.to_string()),
            },
        }
    }
}
