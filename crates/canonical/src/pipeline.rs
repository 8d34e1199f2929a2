use std::borrow::Cow;

use crate::config::SanitizeConfig;
use crate::patterns::{char_filter, NON_ALPHANUM_SPACE_PATTERN, URL_PATTERN};

/// Main entry point. Strips URLs, drops every character outside the
/// configured alphabet and lowercases what is left.
///
/// The output only ever contains `[a-z0-9_]` (plus `' '` when
/// [`SanitizeConfig::allow_space`] is set), so it is safe to slice by byte
/// offset downstream.
pub fn sanitize(text: &str, cfg: &SanitizeConfig) -> String {
    let without_urls = strip_urls(text);
    let filtered = char_filter(cfg.allow_space).replace_all(&without_urls, "");
    // Only ASCII survives the filter, so ASCII lowercasing is exact.
    filtered.to_ascii_lowercase()
}

/// Remove every http/https/ftp URL. Borrows the input when nothing matched.
pub fn strip_urls(text: &str) -> Cow<'_, str> {
    URL_PATTERN.replace_all(text, "")
}

/// Lengths of the whitespace-separated words left after URL stripping and
/// space-preserving character filtering.
///
/// Case is not touched; it has no bearing on length.
pub fn word_lengths(text: &str) -> Vec<usize> {
    let without_urls = strip_urls(text);
    let filtered = NON_ALPHANUM_SPACE_PATTERN.replace_all(&without_urls, "");
    filtered.split_whitespace().map(str::len).collect()
}
