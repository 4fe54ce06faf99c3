//! Subcommand implementations for the `http-enumgen` binary.

use crate::config;
use anyhow::{bail, Context, Result};
use http_enumgen::{generate, GenerateOptions, RunReport, Source};
use std::path::PathBuf;

/// Per-source settings as given on the command line.
#[derive(Debug, Clone, Default)]
pub struct SourceArgs {
    pub url: Option<String>,
    pub input: Option<String>,
    pub output: Option<String>,
    pub proxy: Option<String>,
    pub namespace: Option<String>,
    pub dry_run: bool,
}

/// Resolve flags against the environment into pipeline options.
pub fn options_for(source: Source, args: &SourceArgs) -> GenerateOptions {
    GenerateOptions {
        url: args.url.clone(),
        input: args.input.as_deref().map(PathBuf::from),
        output: Some(config::resolve_output_path(source, args.output.as_deref())),
        proxy: config::resolve_proxy(args.proxy.as_deref()),
        namespace: Some(config::resolve_namespace(args.namespace.as_deref())),
        dry_run: args.dry_run,
    }
}

/// Generate one source.
pub async fn run(source: Source, args: &SourceArgs) -> Result<RunReport> {
    let options = options_for(source, args);
    generate(source, options)
        .await
        .with_context(|| format!("failed to generate {source}"))
}

/// Generate every source, one after the other. `--url`, `--input` and
/// `--output` name a single page or file, so they are rejected here.
pub async fn run_all(args: &SourceArgs) -> Result<Vec<RunReport>> {
    if args.url.is_some() || args.input.is_some() || args.output.is_some() {
        bail!("--url, --input and --output apply to a single source; use `headers` or `status`");
    }

    let mut reports = Vec::with_capacity(Source::ALL.len());
    for source in Source::ALL {
        reports.push(run(source, args).await?);
    }
    Ok(reports)
}

/// One summary line per report.
pub fn summary_line(report: &RunReport) -> String {
    let target = report.output.as_deref().unwrap_or("stdout");
    format!(
        "{}: {} rows -> {} members ({} duplicates dropped, {} sentinels, {} invalid) -> {} ({} B)",
        report.source,
        report.stats.rows,
        report.stats.members,
        report.stats.duplicates_dropped,
        report.stats.sentinels_skipped,
        report.stats.invalid_skipped,
        target,
        report.bytes
    )
}

/// Text for stdout.
///
/// Plain mode prints the documents of dry runs. JSON mode prints one array
/// of reports and nothing else, with dry-run documents carried in a
/// `document` field.
pub fn render_stdout(reports: &[RunReport], json: bool) -> Result<String> {
    if !json {
        let documents: Vec<&str> = reports
            .iter()
            .filter(|r| r.output.is_none())
            .map(|r| r.document.as_str())
            .collect();
        return Ok(documents.join("\n"));
    }

    let mut values = Vec::with_capacity(reports.len());
    for report in reports {
        let mut value = serde_json::to_value(report)?;
        if report.output.is_none() {
            if let Some(obj) = value.as_object_mut() {
                obj.insert("document".to_string(), report.document.clone().into());
            }
        }
        values.push(value);
    }
    Ok(serde_json::to_string_pretty(&values)?)
}

/// Print [`render_stdout`] to stdout and, in plain mode, summaries to stderr.
pub fn print_reports(reports: &[RunReport], json: bool) -> Result<()> {
    let out = render_stdout(reports, json)?;
    if !out.is_empty() {
        println!("{out}");
    }

    if !json {
        for report in reports {
            eprintln!("{}", summary_line(report));
        }
    }
    Ok(())
}
