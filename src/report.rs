//! Presentation of fetch results.
//!
//! Pure formatting over any [`io::Write`]: a banner, then a numbered list of
//! products in the order the remote returned them. No re-sorting, no
//! business logic. The raw payload can also be persisted verbatim for later
//! inspection.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use crate::posts::Post;

/// Default filename for the raw payload dump.
pub const DEFAULT_OUTPUT_FILE: &str = "product_hunt_response.json";

/// Descriptions longer than this are truncated.
const DESCRIPTION_LIMIT: usize = 100;

/// Truncated descriptions keep this many characters before the marker.
const DESCRIPTION_KEEP: usize = 97;

/// Truncates a description to the display limit, appending `...` when cut.
///
/// Descriptions of up to 100 characters pass through unchanged; longer ones
/// are cut to the first 97 characters plus the ellipsis marker.
#[must_use]
pub fn truncate_description(description: &str) -> String {
    let chars: Vec<char> = description.chars().collect();
    if chars.len() > DESCRIPTION_LIMIT {
        let kept: String = chars[..DESCRIPTION_KEEP].iter().collect();
        format!("{kept}...")
    } else {
        description.to_string()
    }
}

/// Writes the banner and the numbered product listing.
///
/// Emits exactly one numbered entry per post, in input order. An empty list
/// takes the distinct "no products found" branch with guidance text rather
/// than a failure message.
///
/// # Errors
///
/// Returns any I/O error from the underlying writer.
pub fn render_listing<W: Write>(out: &mut W, posts: &[Post], days_ago: i64) -> io::Result<()> {
    let rule = "=".repeat(50);
    writeln!(out, "\n{rule}")?;
    writeln!(out, "TOP PRODUCTS ON PRODUCT HUNT (Last {days_ago} days)")?;
    writeln!(out, "{rule}")?;

    if posts.is_empty() {
        writeln!(out, "\nNo products found in the last {days_ago} days. This could be because:")?;
        writeln!(out, "1. The API might be experiencing issues")?;
        writeln!(out, "2. Your query parameters might need adjustment")?;
        writeln!(out, "3. There might be rate limiting in effect")?;
        writeln!(out, "\nTry modifying the date range or checking the API status.")?;
    } else {
        for (i, post) in posts.iter().enumerate() {
            writeln!(out, "\n{}. {}", i + 1, post.name)?;
            writeln!(out, "   {}", post.tagline)?;
            writeln!(out, "   Votes: {}", post.votes_count)?;
            writeln!(out, "   URL: {}", post.url)?;
            writeln!(out, "   Created: {}", post.created_at.to_rfc3339())?;
            if let Some(description) = &post.description {
                writeln!(out, "   Description: {}", truncate_description(description))?;
            }
            if let Some(thumbnail) = post.thumbnail_url() {
                writeln!(out, "   Thumbnail: {thumbnail}")?;
            }
        }
    }

    writeln!(out, "\n{rule}")?;
    Ok(())
}

/// Writes guidance for an unusable response format.
///
/// # Errors
///
/// Returns any I/O error from the underlying writer.
pub fn render_query_failure<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "No products found or error in response format.")?;
    writeln!(out, "\nTroubleshooting tips:")?;
    writeln!(out, "1. Verify your API credentials are correct")?;
    writeln!(out, "2. Check if your Product Hunt application has the necessary permissions")?;
    writeln!(
        out,
        "3. Try accessing the API through the Product Hunt API Explorer: https://api.producthunt.com/v2/docs"
    )?;
    Ok(())
}

/// Writes guidance for a failed token acquisition.
///
/// # Errors
///
/// Returns any I/O error from the underlying writer.
pub fn render_auth_failure<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Failed to obtain access token. Please check your credentials.")?;
    writeln!(out, "\nTroubleshooting tips:")?;
    writeln!(out, "1. Verify your Client ID and Client Secret are correct")?;
    writeln!(out, "2. Make sure your OAuth application is properly registered")?;
    writeln!(out, "3. Check if your application has the necessary scopes")?;
    writeln!(out, "4. Try generating new credentials if the current ones aren't working")?;
    writeln!(out, "5. The API might be experiencing issues or rate limiting")?;
    Ok(())
}

/// Persists the raw decoded payload verbatim, pretty-printed with two-space
/// indentation. Reading the file back yields a structure deep-equal to the
/// original.
///
/// # Errors
///
/// Returns any serialization or file I/O error.
pub fn save_raw(payload: &serde_json::Value, path: &Path) -> io::Result<()> {
    let pretty = serde_json::to_string_pretty(payload)?;
    fs::write(path, pretty)?;
    tracing::info!(path = %path.display(), "raw response saved");
    Ok(())
}
