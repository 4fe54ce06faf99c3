//! The two reference pages the generator knows how to read.

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// A named data source and the artifact generated from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Source {
    Headers,
    StatusCodes,
}

impl Source {
    pub const ALL: [Source; 2] = [Source::Headers, Source::StatusCodes];

    pub fn default_url(self) -> &'static str {
        match self {
            Source::Headers => "https://en.wikipedia.org/wiki/List_of_HTTP_header_fields",
            Source::StatusCodes => "https://developer.mozilla.org/en-US/docs/Web/HTTP/Status",
        }
    }

    /// Generated file name, relative to the output directory.
    pub fn file_name(self) -> &'static str {
        match self {
            Source::Headers => "Header.cs",
            Source::StatusCodes => "StatusCode.cs",
        }
    }

    /// Project-relative default output path.
    pub fn default_output(self) -> PathBuf {
        PathBuf::from("./echo.primary/core/h2tp").join(self.file_name())
    }

    pub fn enum_name(self) -> &'static str {
        match self {
            Source::Headers => "RfcHeader",
            Source::StatusCodes => "RfcStatusCode",
        }
    }

    pub fn lookup_class(self) -> &'static str {
        match self {
            Source::Headers => "HeaderToString",
            Source::StatusCodes => "StatusToString",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Headers => write!(f, "headers"),
            Source::StatusCodes => write!(f, "status-codes"),
        }
    }
}
