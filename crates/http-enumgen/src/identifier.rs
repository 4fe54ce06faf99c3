//! Derive C# enum member names from scraped header names and status labels.

/// Status label that marks a reserved, never-assigned code.
pub const UNUSED_SENTINEL: &str = "unused";

/// Post-derivation renames, applied after separator removal.
pub const STATUS_OVERRIDES: &[(&str, &str)] = &[("Imateapot", "IAmATeapot")];

/// Header names only need hyphens removed: `Accept-Charset` -> `AcceptCharset`.
pub fn derive_header_identifier(name: &str) -> String {
    name.replace('-', "")
}

/// Derive a status member name from its reason phrase.
///
/// Returns `None` for the `unused` sentinel, which must never become a member.
pub fn derive_status_identifier(label: &str) -> Option<String> {
    let stripped: String = label
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '\''))
        .collect();
    let id = apply_overrides(&stripped, STATUS_OVERRIDES);
    if id == UNUSED_SENTINEL {
        return None;
    }
    Some(id)
}

/// Replace `id` with its override when the table names one.
pub fn apply_overrides(id: &str, overrides: &[(&str, &str)]) -> String {
    overrides
        .iter()
        .find(|(from, _)| *from == id)
        .map(|(_, to)| (*to).to_string())
        .unwrap_or_else(|| id.to_string())
}

/// Non-empty, ASCII alphanumeric, and not starting with a digit.
pub fn is_valid_identifier(id: &str) -> bool {
    let mut chars = id.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => chars.all(|c| c.is_ascii_alphanumeric()),
        _ => false,
    }
}
