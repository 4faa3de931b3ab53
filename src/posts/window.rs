//! The query window and the GraphQL document it renders to.

use chrono::{DateTime, Duration, Utc};

/// Sort order for the posts query.
///
/// The remote API supports several orders; this connector only ever asks
/// for the vote-count ranking.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PostsOrder {
    /// Order by vote count, descending.
    #[default]
    Votes,
}

impl PostsOrder {
    /// The GraphQL enum value for this order.
    #[must_use]
    pub const fn as_graphql(self) -> &'static str {
        match self {
            Self::Votes => "VOTES",
        }
    }
}

/// Fully determines the one supported query shape: the first `limit` posts
/// ordered by `order`, posted in the last `days_ago` days.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QueryWindow {
    /// How far back the window reaches, in whole days.
    pub days_ago: i64,
    /// Maximum number of posts to request.
    pub limit: u32,
    /// Sort order.
    pub order: PostsOrder,
}

impl Default for QueryWindow {
    fn default() -> Self {
        Self {
            days_ago: 7,
            limit: 10,
            order: PostsOrder::Votes,
        }
    }
}

impl QueryWindow {
    /// Computes the `postedAfter` bound: `now` minus `days_ago`, truncated
    /// to UTC midnight, formatted as an ISO-8601 `Z` timestamp.
    #[must_use]
    pub fn posted_after(&self, now: DateTime<Utc>) -> String {
        let start = now - Duration::days(self.days_ago);
        start.format("%Y-%m-%dT00:00:00Z").to_string()
    }

    /// Renders the static GraphQL document for this window.
    ///
    /// `posted_after` must come from [`Self::posted_after`]; it is spliced
    /// into the document as a quoted literal.
    #[must_use]
    pub fn build_query(&self, posted_after: &str) -> String {
        format!(
            r#"
    query {{
      posts(first: {limit}, order: {order}, postedAfter: "{posted_after}") {{
        edges {{
          node {{
            name
            tagline
            url
            votesCount
            createdAt
            description
            thumbnail {{
              url
            }}
          }}
        }}
      }}
    }}
    "#,
            limit = self.limit,
            order = self.order.as_graphql(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_posted_after_is_utc_midnight_seven_days_back() {
        let now = Utc.with_ymd_and_hms(2024, 6, 15, 13, 45, 30).unwrap();
        let window = QueryWindow {
            days_ago: 7,
            ..QueryWindow::default()
        };

        assert_eq!(window.posted_after(now), "2024-06-08T00:00:00Z");
    }

    #[test]
    fn test_posted_after_crosses_month_boundary() {
        let now = Utc.with_ymd_and_hms(2024, 3, 3, 1, 0, 0).unwrap();
        let window = QueryWindow {
            days_ago: 7,
            ..QueryWindow::default()
        };

        assert_eq!(window.posted_after(now), "2024-02-25T00:00:00Z");
    }

    #[test]
    fn test_posted_after_zero_days_is_today_midnight() {
        let now = Utc.with_ymd_and_hms(2024, 6, 15, 23, 59, 59).unwrap();
        let window = QueryWindow {
            days_ago: 0,
            ..QueryWindow::default()
        };

        assert_eq!(window.posted_after(now), "2024-06-15T00:00:00Z");
    }

    #[test]
    fn test_build_query_includes_window_parameters() {
        let window = QueryWindow {
            days_ago: 7,
            limit: 10,
            order: PostsOrder::Votes,
        };
        let query = window.build_query("2024-06-08T00:00:00Z");

        assert!(query.contains("posts(first: 10, order: VOTES, postedAfter: \"2024-06-08T00:00:00Z\")"));
    }

    #[test]
    fn test_build_query_selects_all_reported_fields() {
        let query = QueryWindow::default().build_query("2024-06-08T00:00:00Z");

        for field in [
            "name",
            "tagline",
            "url",
            "votesCount",
            "createdAt",
            "description",
            "thumbnail",
        ] {
            assert!(query.contains(field), "query is missing field {field}");
        }
    }

    #[test]
    fn test_default_window_is_last_week_top_ten() {
        let window = QueryWindow::default();
        assert_eq!(window.days_ago, 7);
        assert_eq!(window.limit, 10);
        assert_eq!(window.order, PostsOrder::Votes);
    }
}
