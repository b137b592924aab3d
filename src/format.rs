//! Result rendering.
//!
//! Pure, deterministic functions with no I/O; any input sequence, including
//! an empty one, yields valid output.

use std::fmt::Write;

use crate::{ImageResult, SearchError, SearchResult};

/// Apology used when a chat query could not be answered.
pub const CHAT_APOLOGY: &str =
    "I'm having trouble searching for information about that right now. \
     Can you try asking something else?";

const CHAT_CLOSING: &str = "Is there anything specific about this you'd like to know more about?";

/// Renders web results as a numbered list.
pub fn render(results: &[SearchResult], query: &str) -> String {
    if results.is_empty() {
        return format!("No results found for '{}'.\n", query);
    }

    let mut out = format!("Search results for '{}':\n\n", query);
    for (i, result) in results.iter().enumerate() {
        let _ = writeln!(out, "{}. {}", i + 1, result.title);
        let _ = writeln!(out, "   {}", result.body);
        let _ = writeln!(out, "   {}", result.url);
        out.push('\n');
    }
    out
}

/// Renders image results as a numbered list.
pub fn render_images(results: &[ImageResult], query: &str) -> String {
    if results.is_empty() {
        return format!("No image results found for '{}'.\n", query);
    }

    let mut out = format!("Image results for '{}':\n\n", query);
    for (i, image) in results.iter().enumerate() {
        let _ = writeln!(
            out,
            "{}. {} ({}x{}, {})",
            i + 1,
            image.title,
            image.width,
            image.height,
            image.source_site
        );
        let _ = writeln!(out, "   Image: {}", image.image_url);
        let _ = writeln!(out, "   Page:  {}", image.source_url);
        out.push('\n');
    }
    out
}

/// Assembles the chat reply from result snippets.
///
/// Template text, not an algorithm: a bulleted block of bodies between a
/// fixed opening and closing sentence. An empty input (failed or matchless
/// search) yields the fixed apology.
pub fn summarize(results: &[SearchResult]) -> String {
    if results.is_empty() {
        return CHAT_APOLOGY.to_string();
    }

    let mut out = String::from("Based on my search, I found:\n\n");
    for result in results {
        let _ = writeln!(out, "- {}", result.body);
        out.push('\n');
    }
    out.push_str(CHAT_CLOSING);
    out
}

/// Renders a one-line error notice for a failed search.
pub fn render_error(err: &SearchError) -> String {
    format!("Error during search: {}", err)
}
