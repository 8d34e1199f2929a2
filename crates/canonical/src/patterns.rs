//! Process-wide filter patterns.
//!
//! Each pattern is compiled once on first use and shared by every caller.
//! The literals are fixed at compile time, so a failed compile can only be a
//! programming error; `regex` would report it on the very first call in any
//! test run.

use std::sync::LazyLock;

use regex::Regex;

/// `scheme://host[/path]` for the http, https and ftp schemes.
///
/// The host is two or more dot-separated runs of word characters (or `-`);
/// the optional path is a broad set of URL-safe characters that must not end
/// on punctuation such as `.` or `,`.
const URL: &str = r"(http|ftp|https)://([\w_-]+(?:(?:\.[\w_-]+)+))([\w.,@?^=%&:/~+#-]*[\w@?^=%&/~+#-])?";

/// Everything outside `[A-Za-z0-9_]`, plus any explicit bracket runs.
const NON_ALPHANUM: &str = r"[^A-Za-z0-9_]|[\[\]]+";

/// Same as [`NON_ALPHANUM`] but ASCII space is kept.
const NON_ALPHANUM_SPACE: &str = r"[^A-Za-z0-9_ ]|[\[\]]+";

pub(crate) static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| compile(URL));

pub(crate) static NON_ALPHANUM_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| compile(NON_ALPHANUM));

pub(crate) static NON_ALPHANUM_SPACE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| compile(NON_ALPHANUM_SPACE));

fn compile(pattern: &str) -> Regex {
    match Regex::new(pattern) {
        Ok(re) => re,
        Err(err) => panic!("invalid built-in pattern {pattern:?}: {err}"),
    }
}

/// Pick the character filter matching the space policy.
pub(crate) fn char_filter(allow_space: bool) -> &'static Regex {
    if allow_space {
        &NON_ALPHANUM_SPACE_PATTERN
    } else {
        &NON_ALPHANUM_PATTERN
    }
}
