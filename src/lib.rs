//! # Product Hunt digest
//!
//! A small connector for the Product Hunt API v2: it authenticates via the
//! OAuth 2.0 Client Credentials Grant, issues one GraphQL query for
//! recently posted products ordered by vote count, and reports the result.
//!
//! ## Overview
//!
//! The connector runs two stages in order over one shared HTTP session:
//!
//! 1. **Token acquisition** — a priming GET to the web root (the remote
//!    service expects the cookies), a fixed delay, then the
//!    client-credentials POST.
//! 2. **Product fetch** — one bearer-authorized GraphQL POST, decoded
//!    envelope handed back unchanged.
//!
//! A reporting layer formats the edges into a numbered console listing and
//! optionally persists the raw payload to a JSON file.
//!
//! There is deliberately no retry, caching, pagination, or concurrency:
//! each run is a single sequential pass, and every failure is terminal.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use producthunt_digest::{
//!     acquire_access_token, fetch_posts, Config, HttpSession, QueryWindow,
//! };
//!
//! let config = Config::from_env()?;
//! let session = HttpSession::new(&config);
//!
//! session.prime().await;
//! let token = acquire_access_token(&session, &config).await?;
//! let payload = fetch_posts(&session, &config, &token, &QueryWindow::default()).await?;
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: configuration is instance-based; only
//!   [`Config::from_env`] touches the environment, once, at the edge
//! - **Typed failures**: each stage returns its own error enum instead of
//!   an absent-value sentinel
//! - **Passthrough payloads**: the fetch layer never interprets the
//!   GraphQL `errors` field; presentation decides what to show

pub mod auth;
pub mod config;
pub mod error;
pub mod posts;
pub mod report;
pub mod session;

// Re-export public types at crate root for convenience
pub use auth::{acquire_access_token, AccessToken, AuthError};
pub use config::{ClientId, ClientSecret, Config, ConfigBuilder};
pub use error::ConfigError;
pub use posts::{extract_posts, fetch_posts, Post, PostsOrder, QueryError, QueryWindow, Thumbnail};
pub use session::{HttpSession, ProbeResult};
