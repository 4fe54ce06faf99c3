//! http-enumgen — generate C# enums from the HTTP header field and status
//! code reference pages.

pub mod emit;
pub mod extract;
pub mod fetch;
pub mod identifier;
pub mod normalize;
pub mod pipeline;
pub mod source;
pub mod table;
pub mod types;

pub use emit::{emit_header_document, emit_status_document, write_document, EmitOptions};
pub use extract::{DefinitionListExtractor, Extractor, TableRowExtractor};
pub use fetch::PageFetcher;
pub use normalize::normalize;
pub use pipeline::{
    build_document, build_header_document, build_status_document, generate, GenerateOptions,
    Generated, RunReport,
};
pub use source::Source;
pub use table::IdentifierTable;
pub use types::*;
