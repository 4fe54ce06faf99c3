//! http-enumgen command-line front end.

pub mod commands;
pub mod config;

pub use commands::SourceArgs;
pub use config::{resolve_namespace, resolve_output_path, resolve_proxy};
