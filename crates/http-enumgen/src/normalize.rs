//! Citation-marker stripping for scraped cell text.

use regex::Regex;
use std::sync::OnceLock;

/// Greedy on purpose: the reference pages carry at most one bracket run
/// per field, so `Foo[1][2]` collapses in one match.
fn citation_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\[.*\]").expect("static citation pattern"))
}

/// Remove `[...]` citation markers and surrounding whitespace.
pub fn normalize(text: &str) -> String {
    citation_pattern().replace_all(text, "").trim().to_string()
}
