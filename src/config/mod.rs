//! Configuration for the Product Hunt connector.
//!
//! The main types in this module are:
//!
//! - [`Config`]: the configuration struct holding credentials and endpoint
//!   settings
//! - [`ConfigBuilder`]: a builder for constructing [`Config`] instances
//! - [`ClientId`] / [`ClientSecret`]: validated credential newtypes
//!
//! Configuration is instance-based and passed explicitly. The only place
//! that touches the process environment is [`Config::from_env`], which the
//! binary calls once at startup; the acquirer and fetcher never read
//! environment variables themselves.
//!
//! # Example
//!
//! ```rust
//! use producthunt_digest::{ClientId, ClientSecret, Config};
//!
//! let config = Config::builder()
//!     .client_id(ClientId::new("my-client-id").unwrap())
//!     .client_secret(ClientSecret::new("my-secret").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.api_base(), Config::DEFAULT_API_BASE);
//! ```

mod newtypes;

pub use newtypes::{ClientId, ClientSecret};

use crate::error::ConfigError;
use std::env;
use std::time::Duration;

/// Environment variable holding the OAuth client ID.
pub const CLIENT_ID_VAR: &str = "CLIENT_ID";

/// Environment variable holding the OAuth client secret.
pub const CLIENT_SECRET_VAR: &str = "CLIENT_SECRET";

/// Configuration for the connector.
///
/// Holds the OAuth credentials, the API and web base URLs, the priming
/// delay, and the bounded per-request timeout used by the GraphQL call and
/// the connectivity probes. The token POST itself runs without a timeout.
///
/// The base URLs default to the production Product Hunt hosts. The
/// overrides exist so tests can point the connector at a mock server; the
/// CLI never exposes them.
///
/// # Thread Safety
///
/// `Config` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug)]
pub struct Config {
    client_id: ClientId,
    client_secret: ClientSecret,
    api_base: String,
    web_base: String,
    priming_delay: Duration,
    request_timeout: Duration,
}

impl Config {
    /// Production API host serving the token and GraphQL endpoints.
    pub const DEFAULT_API_BASE: &'static str = "https://api.producthunt.com";

    /// Production web root, visited by the priming request.
    pub const DEFAULT_WEB_BASE: &'static str = "https://www.producthunt.com";

    /// Default pause between the priming request and the token request.
    pub const DEFAULT_PRIMING_DELAY: Duration = Duration::from_secs(2);

    /// Default bounded timeout for the GraphQL call and probes.
    pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

    /// Creates a new builder for constructing a `Config`.
    #[must_use]
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// Builds a configuration from the `CLIENT_ID` and `CLIENT_SECRET`
    /// environment variables.
    ///
    /// This is the single point where the connector reads the process
    /// environment. All other settings take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEnvVar`] if either variable is unset,
    /// or the empty-credential errors if one is set but blank.
    pub fn from_env() -> Result<Self, ConfigError> {
        let client_id = env::var(CLIENT_ID_VAR)
            .map_err(|_| ConfigError::MissingEnvVar {
                name: CLIENT_ID_VAR,
            })
            .and_then(ClientId::new)?;
        let client_secret = env::var(CLIENT_SECRET_VAR)
            .map_err(|_| ConfigError::MissingEnvVar {
                name: CLIENT_SECRET_VAR,
            })
            .and_then(ClientSecret::new)?;

        Self::builder()
            .client_id(client_id)
            .client_secret(client_secret)
            .build()
    }

    /// Returns the client ID.
    #[must_use]
    pub const fn client_id(&self) -> &ClientId {
        &self.client_id
    }

    /// Returns the client secret.
    #[must_use]
    pub const fn client_secret(&self) -> &ClientSecret {
        &self.client_secret
    }

    /// Returns the API base URL.
    #[must_use]
    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// Returns the web root URL used by the priming request.
    #[must_use]
    pub fn web_base(&self) -> &str {
        &self.web_base
    }

    /// Returns the pause inserted between the priming request and the token
    /// request.
    #[must_use]
    pub const fn priming_delay(&self) -> Duration {
        self.priming_delay
    }

    /// Returns the bounded per-request timeout for the GraphQL call and
    /// probes.
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    /// Returns the full URL of the OAuth token endpoint.
    #[must_use]
    pub fn token_url(&self) -> String {
        format!("{}/v2/oauth/token", self.api_base)
    }

    /// Returns the full URL of the GraphQL endpoint.
    #[must_use]
    pub fn graphql_url(&self) -> String {
        format!("{}/v2/api/graphql", self.api_base)
    }

    /// Returns the full URL of the API documentation page, used by the
    /// connectivity probe.
    #[must_use]
    pub fn docs_url(&self) -> String {
        format!("{}/v2/docs", self.api_base)
    }
}

// Verify Config is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Config>();
};

/// Builder for constructing [`Config`] instances.
///
/// Required fields are `client_id` and `client_secret`. All other fields
/// have defaults matching the production service.
///
/// # Example
///
/// ```rust
/// use producthunt_digest::{ClientId, ClientSecret, Config};
/// use std::time::Duration;
///
/// let config = Config::builder()
///     .client_id(ClientId::new("id").unwrap())
///     .client_secret(ClientSecret::new("secret").unwrap())
///     .priming_delay(Duration::ZERO)
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    client_id: Option<ClientId>,
    client_secret: Option<ClientSecret>,
    api_base: Option<String>,
    web_base: Option<String>,
    priming_delay: Option<Duration>,
    request_timeout: Option<Duration>,
}

impl ConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the client ID (required).
    #[must_use]
    pub fn client_id(mut self, id: ClientId) -> Self {
        self.client_id = Some(id);
        self
    }

    /// Sets the client secret (required).
    #[must_use]
    pub fn client_secret(mut self, secret: ClientSecret) -> Self {
        self.client_secret = Some(secret);
        self
    }

    /// Overrides the API base URL. Intended for tests.
    #[must_use]
    pub fn api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = Some(base.into());
        self
    }

    /// Overrides the web root URL. Intended for tests.
    #[must_use]
    pub fn web_base(mut self, base: impl Into<String>) -> Self {
        self.web_base = Some(base.into());
        self
    }

    /// Sets the pause between the priming request and the token request.
    #[must_use]
    pub fn priming_delay(mut self, delay: Duration) -> Self {
        self.priming_delay = Some(delay);
        self
    }

    /// Sets the bounded per-request timeout for the GraphQL call and probes.
    #[must_use]
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `client_id` or
    /// `client_secret` was not set, or [`ConfigError::InvalidBaseUrl`] if a
    /// base URL override is not an absolute http(s) URL.
    pub fn build(self) -> Result<Config, ConfigError> {
        let client_id = self.client_id.ok_or(ConfigError::MissingRequiredField {
            field: "client_id",
        })?;
        let client_secret = self
            .client_secret
            .ok_or(ConfigError::MissingRequiredField {
                field: "client_secret",
            })?;

        let api_base = self
            .api_base
            .unwrap_or_else(|| Config::DEFAULT_API_BASE.to_string());
        let web_base = self
            .web_base
            .unwrap_or_else(|| Config::DEFAULT_WEB_BASE.to_string());
        Self::validate_base(&api_base)?;
        Self::validate_base(&web_base)?;

        Ok(Config {
            client_id,
            client_secret,
            api_base: api_base.trim_end_matches('/').to_string(),
            web_base: web_base.trim_end_matches('/').to_string(),
            priming_delay: self.priming_delay.unwrap_or(Config::DEFAULT_PRIMING_DELAY),
            request_timeout: self
                .request_timeout
                .unwrap_or(Config::DEFAULT_REQUEST_TIMEOUT),
        })
    }

    fn validate_base(url: &str) -> Result<(), ConfigError> {
        if url.starts_with("http://") || url.starts_with("https://") {
            Ok(())
        } else {
            Err(ConfigError::InvalidBaseUrl {
                url: url.to_string(),
            })
        }
    }
}
