//! C# enum and lookup-function emitter.
//!
//! Documents are built as a list of lines and joined with CRLF, with no
//! trailing terminator. Output depends only on its inputs, so an unchanged
//! page regenerates a byte-identical file.

use crate::table::IdentifierTable;
use crate::types::{EnumGenResult, HeaderGroup};
use std::fs;
use std::path::Path;

/// Line terminator used between emitted fragments.
pub const LINE_ENDING: &str = "\r\n";

/// Namespace the generated files live in.
pub const DEFAULT_NAMESPACE: &str = "echo.primary.core.h2tp";

/// Names used in one generated document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitOptions {
    pub namespace: String,
    pub enum_name: String,
    pub lookup_class: String,
}

impl EmitOptions {
    pub fn new(enum_name: &str, lookup_class: &str) -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_string(),
            enum_name: enum_name.to_string(),
            lookup_class: lookup_class.to_string(),
        }
    }

    pub fn with_namespace(mut self, namespace: &str) -> Self {
        self.namespace = namespace.to_string();
        self
    }
}

/// Emit the header enum: bare members, each row's members preceded by
/// its description/example comment block.
pub fn emit_header_document(
    groups: &[HeaderGroup],
    table: &IdentifierTable,
    options: &EmitOptions,
) -> String {
    let mut lines = preamble(options);

    for group in groups {
        lines.push("/*<summary>".to_string());
        push_text(&mut lines, &group.description);
        lines.push("</summary>".to_string());
        lines.push("Example:".to_string());
        push_text(&mut lines, &group.example);
        lines.push("*/".to_string());
        lines.push(String::new());

        for member in &group.members {
            lines.push(format!("{member},"));
        }
    }
    lines.push("}".to_string());

    push_lookup(&mut lines, table, options);
    lines.join(LINE_ENDING)
}

/// Emit the status enum: every member assigned its numeric code.
pub fn emit_status_document(table: &IdentifierTable, options: &EmitOptions) -> String {
    let mut lines = preamble(options);

    for entry in table.iter() {
        match entry.discriminant {
            Some(code) => lines.push(format!("{}={code},", entry.identifier)),
            None => lines.push(format!("{},", entry.identifier)),
        }
    }
    lines.push("}".to_string());

    push_lookup(&mut lines, table, options);
    lines.join(LINE_ENDING)
}

/// Free text may span lines; re-split it so every terminator is CRLF.
fn push_text(lines: &mut Vec<String>, text: &str) {
    if text.is_empty() {
        lines.push(String::new());
        return;
    }
    lines.extend(text.lines().map(str::to_string));
}

/// Usings, namespace, and the opening of the enum declaration.
fn preamble(options: &EmitOptions) -> Vec<String> {
    vec![
        "using System.Diagnostics;".to_string(),
        String::new(),
        format!("namespace {};", options.namespace),
        String::new(),
        format!("public enum {} {{", options.enum_name),
    ]
}

/// Reverse lookup: one case per table entry, then an unreachable default.
fn push_lookup(lines: &mut Vec<String>, table: &IdentifierTable, options: &EmitOptions) {
    let enum_name = &options.enum_name;

    lines.push(format!("internal static class {}{{", options.lookup_class));
    lines.push(format!("static string ToString({enum_name} ev) {{"));
    lines.push("switch (ev) {".to_string());
    for entry in table.iter() {
        lines.push(format!(
            "case {enum_name}.{}: {{return \"{}\";}}",
            entry.identifier,
            escape_literal(&entry.canonical)
        ));
    }
    lines.push("default: { throw new UnreachableException();  }".to_string());
    lines.push("}".to_string());
    lines.push("}".to_string());
    lines.push("}".to_string());
}

/// Escape `\\` and `"` for a regular C# string literal.
fn escape_literal(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Truncate-and-replace `path` with `document`, creating parent directories.
pub fn write_document(path: &Path, document: &str) -> EnumGenResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, document)?;
    Ok(())
}
