//! Scrape → normalize → derive → deduplicate → emit, one source per run.
//!
//! The `build_*` functions are pure: markup in, document text out. [`generate`]
//! adds the I/O at both ends (fetch or read the page, write the file).

use crate::emit::{self, EmitOptions};
use crate::extract::{DefinitionListExtractor, Extractor, TableRowExtractor};
use crate::fetch::PageFetcher;
use crate::identifier::{derive_header_identifier, derive_status_identifier, is_valid_identifier};
use crate::source::Source;
use crate::table::IdentifierTable;
use crate::types::{BuildStats, EnumGenResult, HeaderGroup, HeaderRow, StatusRow};
use scraper::Html;
use serde::Serialize;
use std::path::PathBuf;

/// A built document and the counters gathered while building it.
#[derive(Debug, Clone)]
pub struct Generated {
    pub document: String,
    pub stats: BuildStats,
}

/// Inputs for one [`generate`] run. Unset fields fall back to the
/// source's defaults.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Page to fetch instead of the source's default URL.
    pub url: Option<String>,
    /// Read markup from this file instead of fetching.
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub proxy: Option<String>,
    pub namespace: Option<String>,
    /// Build the document but leave the output file untouched.
    pub dry_run: bool,
}

/// Summary of one run.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub source: Source,
    /// URL fetched or input file read.
    pub origin: String,
    /// Path written; `None` on a dry run.
    pub output: Option<String>,
    #[serde(flatten)]
    pub stats: BuildStats,
    pub bytes: usize,
    #[serde(skip)]
    pub document: String,
}

/// Build the header enum document from the header field table markup.
pub fn build_header_document(markup: &str, options: &EmitOptions) -> EnumGenResult<Generated> {
    let document = Html::parse_document(markup);
    let extractor = TableRowExtractor::new()?;
    Ok(build_header_document_with(&document, &extractor, options))
}

/// Same as [`build_header_document`] with a caller-supplied extractor.
pub fn build_header_document_with<E>(
    document: &Html,
    extractor: &E,
    options: &EmitOptions,
) -> Generated
where
    E: Extractor<Entry = HeaderRow>,
{
    let mut table = IdentifierTable::new();
    let mut groups = Vec::new();
    let mut stats = BuildStats::default();

    for row in extractor.extract(document) {
        stats.rows += 1;
        tracing::debug!("header row: {:?}", row.names);

        let mut members = Vec::new();
        for name in &row.names {
            let id = derive_header_identifier(name);
            if !is_valid_identifier(&id) {
                tracing::warn!("skipping header '{name}': '{id}' is not a valid identifier");
                stats.invalid_skipped += 1;
                continue;
            }
            if table.insert(&id, &name.to_lowercase()) {
                members.push(id);
            }
        }

        groups.push(HeaderGroup {
            description: row.description,
            example: row.example,
            members,
        });
    }

    finish_stats(&mut stats, &table);
    Generated {
        document: emit::emit_header_document(&groups, &table, options),
        stats,
    }
}

/// Build the status code enum document from the status page markup.
pub fn build_status_document(markup: &str, options: &EmitOptions) -> EnumGenResult<Generated> {
    let document = Html::parse_document(markup);
    let extractor = DefinitionListExtractor::new()?;
    Ok(build_status_document_with(&document, &extractor, options))
}

/// Same as [`build_status_document`] with a caller-supplied extractor.
pub fn build_status_document_with<E>(
    document: &Html,
    extractor: &E,
    options: &EmitOptions,
) -> Generated
where
    E: Extractor<Entry = StatusRow>,
{
    let mut table = IdentifierTable::new();
    let mut stats = BuildStats::default();

    for row in extractor.extract(document) {
        stats.rows += 1;
        tracing::debug!("status row: {} {}", row.code, row.label);

        let Some(id) = derive_status_identifier(&row.label) else {
            stats.sentinels_skipped += 1;
            continue;
        };
        if !is_valid_identifier(&id) {
            tracing::warn!(
                "skipping status {} '{}': '{id}' is not a valid identifier",
                row.code,
                row.label
            );
            stats.invalid_skipped += 1;
            continue;
        }
        table.insert_with_discriminant(&id, &row.label, row.code);
    }

    finish_stats(&mut stats, &table);
    Generated {
        document: emit::emit_status_document(&table, options),
        stats,
    }
}

fn finish_stats(stats: &mut BuildStats, table: &IdentifierTable) {
    stats.members = table.len();
    stats.duplicates_dropped = table.dropped().len();

    for dup in table.dropped() {
        tracing::warn!(
            "dropped duplicate {}: '{}' (kept '{}')",
            dup.identifier,
            dup.rejected,
            dup.kept
        );
    }
    if stats.members == 0 {
        tracing::warn!("no members extracted; the page layout may have changed");
    }
}

/// Build the document for `source` from already-loaded markup.
pub fn build_document(
    source: Source,
    markup: &str,
    options: &EmitOptions,
) -> EnumGenResult<Generated> {
    match source {
        Source::Headers => build_header_document(markup, options),
        Source::StatusCodes => build_status_document(markup, options),
    }
}

/// Run the whole pipeline for one source.
pub async fn generate(source: Source, options: GenerateOptions) -> EnumGenResult<RunReport> {
    let (origin, markup) = match &options.input {
        Some(path) => {
            tracing::info!("reading {source} markup from {}", path.display());
            (path.display().to_string(), std::fs::read_to_string(path)?)
        }
        None => {
            let url = options
                .url
                .clone()
                .unwrap_or_else(|| source.default_url().to_string());
            let fetcher = PageFetcher::new(options.proxy.as_deref())?;
            let markup = fetcher.fetch(&url).await?;
            (url, markup)
        }
    };

    let mut emit_options = EmitOptions::new(source.enum_name(), source.lookup_class());
    if let Some(ns) = &options.namespace {
        emit_options = emit_options.with_namespace(ns);
    }

    let generated = build_document(source, &markup, &emit_options)?;
    tracing::info!(
        "{source}: {} rows, {} members, {} duplicates dropped",
        generated.stats.rows,
        generated.stats.members,
        generated.stats.duplicates_dropped
    );

    let output = if options.dry_run {
        None
    } else {
        let path = options.output.unwrap_or_else(|| source.default_output());
        emit::write_document(&path, &generated.document)?;
        tracing::info!("wrote {}", path.display());
        Some(path.display().to_string())
    };

    Ok(RunReport {
        source,
        origin,
        output,
        stats: generated.stats,
        bytes: generated.document.len(),
        document: generated.document,
    })
}
