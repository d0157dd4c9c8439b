//! Extraction entry points.
//!
//! The eager functions ([`extract`], [`extract_from_bytes`],
//! [`extract_document`]) run the whole pipeline and return an
//! [`ExtractedTable`]. [`extract_rows`] stops after locating the table and
//! hands back the lazy [`TableRows`] sequence for callers that want to
//! consume rows one at a time.

use crate::config::ExtractionConfig;
use crate::document::Document;
use crate::error::Pdf2TableError;
use crate::output::ExtractedTable;
use crate::pipeline::locate::locate_table;
use crate::pipeline::parse::TableRows;
use crate::pipeline::rows::RowAssembler;
use crate::pipeline::{input, source};
use std::path::Path;
use std::time::Instant;
use tracing::{info, warn};

/// Extract the table from the PDF file at `path`.
///
/// # Errors
/// - File not found / permission denied / not a PDF
/// - pdfium binding or load failure
/// - Header keyword not found ([`Pdf2TableError::HeaderNotFound`])
/// - Malformed first row under [`crate::config::LeadingRows::Reject`]
pub fn extract(
    path: impl AsRef<Path>,
    config: &ExtractionConfig,
) -> Result<ExtractedTable, Pdf2TableError> {
    let start = Instant::now();
    let pdf_path = input::resolve_local(path)?;
    info!("Starting extraction: {}", pdf_path.display());

    let document = source::load_document(&pdf_path, config.password.as_deref())?;
    finish(extract_document(&document, config), start)
}

/// Extract the table from PDF bytes already in memory.
pub fn extract_from_bytes(
    bytes: &[u8],
    config: &ExtractionConfig,
) -> Result<ExtractedTable, Pdf2TableError> {
    let start = Instant::now();
    input::check_pdf_bytes(bytes)?;

    let document = source::load_document_from_bytes(bytes, config.password.as_deref())?;
    finish(extract_document(&document, config), start)
}

/// Extract the table from an already-loaded [`Document`].
pub fn extract_document(
    document: &Document,
    config: &ExtractionConfig,
) -> Result<ExtractedTable, Pdf2TableError> {
    let start = Instant::now();
    let (page, mut rows) = table_rows(document, config)?;

    let parsed: Vec<_> = rows.by_ref().collect();
    if let Some(e) = rows.take_rejected() {
        return Err(Pdf2TableError::LeadingRowRejected(e));
    }

    let mut stats = rows.stats().clone();
    stats.page = page;
    stats.duration_ms = start.elapsed().as_millis() as u64;

    if parsed.is_empty() {
        warn!(
            "No row below header '{}' matched the {}-column schema ({} raw rows seen)",
            config.header,
            config.columns.len(),
            stats.raw_rows
        );
    }

    Ok(ExtractedTable {
        columns: config
            .columns
            .output_tags()
            .into_iter()
            .map(str::to_string)
            .collect(),
        rows: parsed,
        stats,
    })
}

/// Locate the table and return its rows as a lazy sequence.
pub fn extract_rows<'c>(
    document: &Document,
    config: &'c ExtractionConfig,
) -> Result<TableRows<'c, RowAssembler>, Pdf2TableError> {
    table_rows(document, config).map(|(_, rows)| rows)
}

fn table_rows<'c>(
    document: &Document,
    config: &'c ExtractionConfig,
) -> Result<(usize, TableRows<'c, RowAssembler>), Pdf2TableError> {
    let located = locate_table(document, config)?;
    let rows = TableRows::new(located.candidates.into_rows(), config);
    Ok((located.page, rows))
}

/// Stamp the end-to-end duration (load included) on a finished table.
fn finish(
    result: Result<ExtractedTable, Pdf2TableError>,
    start: Instant,
) -> Result<ExtractedTable, Pdf2TableError> {
    let mut table = result?;
    table.stats.duration_ms = start.elapsed().as_millis() as u64;
    info!(
        "Extraction complete: {} rows from page {} in {}ms",
        table.rows.len(),
        table.stats.page,
        table.stats.duration_ms
    );
    Ok(table)
}
