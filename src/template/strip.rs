// ABOUTME: Post-render HTML comment stripping
// ABOUTME: Removes comment spans from the final rendered text before output

use once_cell::sync::Lazy;
use regex::Regex;

// (?s) so a comment span may contain newlines; non-greedy so adjacent
// comments are removed individually rather than swallowing the text
// between them.
static HTML_COMMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<!--.*?-->").expect("HTML comment pattern is valid"));

/// Remove every HTML comment span from rendered output.
///
/// This is a textual pass over the final rendered string, not a
/// template-level suppression: comments assembled dynamically at render
/// time are stripped as long as they match the literal marker syntax.
pub fn strip_html_comments(rendered: &str) -> String {
    HTML_COMMENT.replace_all(rendered, "").into_owned()
}
