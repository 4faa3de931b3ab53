//! The one supported product query: recently posted products ordered by
//! vote count.
//!
//! [`QueryWindow`] fully determines the query shape; [`fetch_posts`] runs it
//! and hands back the raw GraphQL envelope; [`extract_posts`] gives a typed
//! view over the edges for presentation.

mod fetch;
mod model;
mod window;

pub use fetch::{fetch_posts, QueryError};
pub use model::{extract_posts, Post, Thumbnail};
pub use window::{PostsOrder, QueryWindow};
