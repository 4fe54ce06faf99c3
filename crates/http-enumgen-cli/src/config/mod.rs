//! Configuration loading and resolution.
//!
//! Every setting resolves the same way: explicit flag, then environment,
//! then the built-in default.

use http_enumgen::emit::DEFAULT_NAMESPACE;
use http_enumgen::Source;
use std::path::PathBuf;

/// Proxy endpoint used for `https` requests.
pub const PROXY_ENV: &str = "HTTP_ENUMGEN_PROXY";
/// Directory the generated files are written into.
pub const OUT_DIR_ENV: &str = "HTTP_ENUMGEN_OUT_DIR";

/// Resolve the proxy endpoint, if any.
pub fn resolve_proxy(explicit: Option<&str>) -> Option<String> {
    resolve_proxy_from(explicit, std::env::var(PROXY_ENV).ok())
}

fn resolve_proxy_from(explicit: Option<&str>, env: Option<String>) -> Option<String> {
    if let Some(proxy) = explicit {
        return Some(proxy.to_string());
    }
    env.filter(|p| !p.trim().is_empty())
}

/// Resolve where the document for `source` is written.
pub fn resolve_output_path(source: Source, explicit: Option<&str>) -> PathBuf {
    resolve_output_path_from(source, explicit, std::env::var(OUT_DIR_ENV).ok())
}

fn resolve_output_path_from(source: Source, explicit: Option<&str>, env: Option<String>) -> PathBuf {
    if let Some(path) = explicit {
        return PathBuf::from(path);
    }

    if let Some(dir) = env.filter(|d| !d.trim().is_empty()) {
        return PathBuf::from(dir).join(source.file_name());
    }

    source.default_output()
}

/// Resolve the namespace of the generated file.
pub fn resolve_namespace(explicit: Option<&str>) -> String {
    explicit.unwrap_or(DEFAULT_NAMESPACE).to_string()
}
