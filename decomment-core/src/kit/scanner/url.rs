//! URL scheme heuristic for `//`
//!
//! A `//` in code that directly follows something like `http:` is more likely a
//! misclassified URL than a comment. The check looks at a bounded tail of what
//! has already been emitted. It is a heuristic: scheme text emitted long before
//! (or text from a string that just closed) can suppress a real comment, and a
//! URL whose scheme fell out of the window is still treated as a comment.

/// Number of trailing output characters inspected
pub const URL_WINDOW: usize = 10;

/// Scheme prefixes that suppress a line comment, matched case-insensitively
pub const URL_SCHEMES: [&str; 4] = ["http:", "https:", "ftp:", "file:"];

/// True when the last [`URL_WINDOW`] characters of `output` contain a URL scheme
pub fn follows_url_scheme(output: &str) -> bool {
    let start = output
        .char_indices()
        .rev()
        .nth(URL_WINDOW - 1)
        .map_or(0, |(idx, _)| idx);
    let tail = output[start..].to_lowercase();
    URL_SCHEMES.iter().any(|scheme| tail.contains(scheme))
}
