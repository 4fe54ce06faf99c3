//! Core data types for extracted rows and generator errors.

use serde::Serialize;

/// One row of the header field table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderRow {
    /// Header names from the first cell, comma-split, in page order.
    pub names: Vec<String>,
    pub description: String,
    pub example: String,
}

/// One status code entry from the definition list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusRow {
    pub code: u16,
    /// Raw phrase after the numeric code, e.g. `I'm a teapot`.
    pub label: String,
}

/// A header row after identifier derivation, ready for emission.
///
/// The documentation comment is emitted once per group, immediately
/// before the group's members.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderGroup {
    pub description: String,
    pub example: String,
    /// Identifiers first introduced by this row. May be empty when every
    /// name in the row collided with an earlier one.
    pub members: Vec<String>,
}

/// Counters collected while building one document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BuildStats {
    pub rows: usize,
    pub members: usize,
    pub duplicates_dropped: usize,
    pub sentinels_skipped: usize,
    pub invalid_skipped: usize,
}

/// Errors that can occur while generating an enum document.
#[derive(thiserror::Error, Debug)]
pub enum EnumGenError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid selector: {0}")]
    Selector(String),

    #[error("Invalid proxy: {0}")]
    InvalidProxy(String),
}

/// Convenience result type.
pub type EnumGenResult<T> = Result<T, EnumGenError>;
