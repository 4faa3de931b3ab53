//! Typed view over the GraphQL envelope.
//!
//! The fetch layer hands the decoded response through unchanged; these types
//! give the reporter a structured view of `data.posts.edges[].node` without
//! the fetch layer ever validating the envelope itself.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Thumbnail wrapper as the API nests it.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct Thumbnail {
    /// Image URL, when the service has one.
    pub url: Option<String>,
}

/// One product record, an immutable snapshot of the remote node.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Product name.
    pub name: String,
    /// One-line tagline.
    pub tagline: String,
    /// Product page URL.
    pub url: String,
    /// Vote count at fetch time.
    pub votes_count: i64,
    /// When the product was posted.
    pub created_at: DateTime<Utc>,
    /// Longer description, not always present.
    #[serde(default)]
    pub description: Option<String>,
    /// Thumbnail image, not always present.
    #[serde(default)]
    pub thumbnail: Option<Thumbnail>,
}

impl Post {
    /// Returns the thumbnail URL if the node carries one.
    #[must_use]
    pub fn thumbnail_url(&self) -> Option<&str> {
        self.thumbnail.as_ref().and_then(|t| t.url.as_deref())
    }
}

/// Walks `data.posts.edges[].node` out of a raw GraphQL envelope.
///
/// Returns `None` when the envelope does not have the expected shape (the
/// response-format failure branch). An empty vector is a valid outcome and
/// means the window genuinely contained no posts, which callers must report
/// differently from a failure.
#[must_use]
pub fn extract_posts(payload: &serde_json::Value) -> Option<Vec<Post>> {
    let edges = payload
        .get("data")?
        .get("posts")?
        .get("edges")?
        .as_array()?;

    let mut posts = Vec::with_capacity(edges.len());
    for edge in edges {
        let node = edge.get("node")?;
        let post: Post = serde_json::from_value(node.clone()).ok()?;
        posts.push(post);
    }
    Some(posts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn envelope(edges: serde_json::Value) -> serde_json::Value {
        json!({ "data": { "posts": { "edges": edges } } })
    }

    fn node(name: &str, votes: i64) -> serde_json::Value {
        json!({
            "node": {
                "name": name,
                "tagline": "A tagline",
                "url": "https://www.producthunt.com/posts/example",
                "votesCount": votes,
                "createdAt": "2024-06-10T08:00:00Z",
                "description": null,
                "thumbnail": null,
            }
        })
    }

    #[test]
    fn test_extract_posts_preserves_remote_order() {
        let payload = envelope(json!([node("Alpha", 120), node("Beta", 80)]));
        let posts = extract_posts(&payload).unwrap();

        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].name, "Alpha");
        assert_eq!(posts[0].votes_count, 120);
        assert_eq!(posts[1].name, "Beta");
        assert_eq!(posts[1].votes_count, 80);
    }

    #[test]
    fn test_extract_posts_empty_edges_is_some_empty() {
        let payload = envelope(json!([]));
        let posts = extract_posts(&payload).unwrap();

        assert!(posts.is_empty());
    }

    #[test]
    fn test_extract_posts_missing_data_is_none() {
        let payload = json!({ "errors": [{ "message": "unauthorized" }] });
        assert!(extract_posts(&payload).is_none());
    }

    #[test]
    fn test_extract_posts_missing_edges_is_none() {
        let payload = json!({ "data": { "posts": {} } });
        assert!(extract_posts(&payload).is_none());
    }

    #[test]
    fn test_post_deserializes_camel_case_fields() {
        let value = json!({
            "name": "Gamma",
            "tagline": "Tagline",
            "url": "https://example.com",
            "votesCount": 42,
            "createdAt": "2024-06-10T08:00:00Z",
            "description": "A description",
            "thumbnail": { "url": "https://example.com/thumb.png" }
        });
        let post: Post = serde_json::from_value(value).unwrap();

        assert_eq!(post.votes_count, 42);
        assert_eq!(post.description.as_deref(), Some("A description"));
        assert_eq!(post.thumbnail_url(), Some("https://example.com/thumb.png"));
    }

    #[test]
    fn test_post_tolerates_absent_optional_fields() {
        let value = json!({
            "name": "Delta",
            "tagline": "Tagline",
            "url": "https://example.com",
            "votesCount": 1,
            "createdAt": "2024-06-10T08:00:00Z"
        });
        let post: Post = serde_json::from_value(value).unwrap();

        assert!(post.description.is_none());
        assert!(post.thumbnail_url().is_none());
    }
}
