//! mupdf-probe
//!
//! Opens a document through the guarded MuPDF adapters and reports what
//! each step produced.

use std::fs::File;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
#[path = "../tests/common/mod.rs"]
mod common;

use mupdf_guard::outline::{flatten, toc_from_outlines};
use mupdf_guard::stext::plain_text;
use mupdf_guard::{
    count_pages, load_outline, load_page, new_stext_page_from_page, open_document,
    open_document_with_stream, ErrorContext, GuardConfig, StextOptions, TocEntry,
};

#[derive(Parser)]
#[command(name = "mupdf-probe")]
#[command(version)]
#[command(about = "Probe a document through sentinel-returning MuPDF adapters", long_about = None)]
struct Cli {
    /// Document to open
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Open through a stream with this MIME type or extension instead of by path
    #[arg(long, value_name = "KIND")]
    stream: Option<String>,

    /// Zero-based page to load
    #[arg(short, long, default_value = "0")]
    page: i32,

    /// Extract the page's text
    #[arg(short, long)]
    text: bool,

    /// Load the outline
    #[arg(short, long)]
    outline: bool,

    /// Preserve whitespace during text extraction
    #[arg(long)]
    preserve_whitespace: bool,

    /// Print a JSON report
    #[arg(long)]
    json: bool,
}

#[derive(Serialize, Default)]
struct Report {
    file: String,
    page_count: i32,
    outline: Option<Vec<TocEntry>>,
    page: Option<i32>,
    text: Option<String>,
    failures: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mupdf_guard=info,mupdf_probe=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = GuardConfig::from_env();
    tracing::debug!(?config, "Loaded guard configuration");

    let mut ctx = ErrorContext::with_config(config);
    let report = probe(&cli, &mut ctx)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    Ok(())
}

fn probe(cli: &Cli, ctx: &mut ErrorContext) -> anyhow::Result<Report> {
    let path = cli
        .input
        .to_str()
        .context("input path is not valid UTF-8")?;

    let (operation, doc) = match &cli.stream {
        Some(kind) => {
            let mut file = File::open(&cli.input)
                .with_context(|| format!("failed to open {}", cli.input.display()))?;
            (
                "open_document_with_stream",
                open_document_with_stream(ctx, kind, &mut file),
            )
        }
        None => ("open_document", open_document(ctx, path)),
    };
    let doc = ctx
        .check(operation, doc)
        .with_context(|| format!("cannot open {path}"))?;
    tracing::info!(file = path, "Opened document");

    let mut report = Report {
        file: path.to_string(),
        ..Default::default()
    };

    report.page_count = count_pages(ctx, &doc);
    if report.page_count < 0 {
        record_failure(ctx, &mut report);
    }

    if cli.outline {
        match load_outline(ctx, &doc) {
            Some(outlines) => report.outline = Some(toc_from_outlines(&outlines)),
            None => record_failure(ctx, &mut report),
        }
    }

    match load_page(ctx, &doc, cli.page) {
        Some(page) => {
            report.page = Some(cli.page);
            if cli.text {
                let options = StextOptions {
                    preserve_whitespace: cli.preserve_whitespace,
                    ..Default::default()
                };
                match new_stext_page_from_page(ctx, &page, &options) {
                    Some(text_page) => report.text = Some(plain_text(&text_page)),
                    None => record_failure(ctx, &mut report),
                }
            }
        }
        None => record_failure(ctx, &mut report),
    }

    Ok(report)
}

fn record_failure(ctx: &mut ErrorContext, report: &mut Report) {
    match ctx.take_failure() {
        Some(failure) => report.failures.push(failure.to_string()),
        None => report.failures.push("load_outline: document has no outline".to_string()),
    }
}

fn print_report(report: &Report) {
    println!("File: {}", report.file);
    println!("Pages: {}", report.page_count);

    if let Some(toc) = &report.outline {
        println!("Outline:");
        for entry in flatten(toc) {
            let target = entry
                .page
                .map(|p| (p + 1).to_string())
                .unwrap_or_else(|| "-".to_string());
            println!("{}{} ({})", "  ".repeat(entry.depth + 1), entry.title, target);
        }
    }

    if let Some(page) = report.page {
        println!("Loaded page {}", page);
    }
    if let Some(text) = &report.text {
        println!("{}", text.trim_end());
    }

    for failure in &report.failures {
        println!("Failed: {}", failure);
    }
}
