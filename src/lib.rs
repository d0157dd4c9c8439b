//! # edgequake-pdf2table
//!
//! Extract typed tables (invoices, order confirmations, price lists) from
//! PDF documents by reconstructing rows and columns from text geometry.
//!
//! ## How it works
//!
//! A PDF has no notion of a table: it only places runs of text at
//! coordinates. For simple tables, where every row sits on one line and
//! every row has the same number of cells, geometry is enough:
//!
//! ```text
//! PDF
//!  │
//!  ├─ 1. Source   pdfium text segments → positioned fragments
//!  ├─ 2. Locate   header keyword → everything below it on the page
//!  ├─ 3. Rows     same y0 → one row, ordered by x0
//!  └─ 4. Parse    cells typed by schema; first bad row after data ends it
//! ```
//!
//! Assumptions: the table is on one page, each row is one text line, all
//! rows have the same column count, and prices use `,` as decimal
//! separator. Multi-page tables, merged cells and OCR are out of scope.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use edgequake_pdf2table::{extract, ColumnType, ExtractionConfig};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ExtractionConfig::builder()
//!         .header("Bezeichnung")
//!         .columns(vec![ColumnType::Quantity, ColumnType::Label, ColumnType::Price])
//!         .build()?;
//!     let table = extract("invoice.pdf", &config)?;
//!     print!("{}", table.to_text());
//!     Ok(())
//! }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `pdf2table` binary (clap + anyhow + tracing-subscriber) |

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod document;
pub mod error;
pub mod extract;
pub mod output;
pub mod pipeline;
pub mod schema;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{ExtractionConfig, ExtractionConfigBuilder, LeadingRows};
pub use document::{Document, Fragment, PageFragments};
pub use error::{Pdf2TableError, RowError};
pub use extract::{extract, extract_document, extract_from_bytes, extract_rows};
pub use output::{CellValue, ExtractedTable, ExtractionStats, ParsedRow};
pub use pipeline::parse::{ParseState, TableRows};
pub use pipeline::rows::RawRow;
pub use schema::{ColumnSchema, ColumnType};
