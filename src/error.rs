//! Error types for the edgequake-pdf2table library.
//!
//! Two distinct error types reflect two distinct failure modes:
//!
//! * [`Pdf2TableError`] is **fatal**: the extraction cannot proceed at all
//!   (bad input file, wrong password, header keyword missing). Returned as
//!   `Err(Pdf2TableError)` from the top-level `extract*` functions.
//!
//! * [`RowError`] is **non-fatal**: a single raw row does not fit the column
//!   schema. Once at least one row has parsed, the first `RowError` marks the
//!   end of the table (footers, totals, page numbers). Before that, leading
//!   rows are skipped or rejected according to
//!   [`crate::config::LeadingRows`].

use std::path::PathBuf;
use thiserror::Error;

/// All fatal errors returned by the edgequake-pdf2table library.
#[derive(Debug, Error)]
pub enum Pdf2TableError {
    // ── Input errors ──────────────────────────────────────────────────────
    /// Input file was not found at the given path.
    #[error("PDF file not found: '{path}'\nCheck the path exists and is readable.")]
    FileNotFound { path: PathBuf },

    /// Process does not have read permission on the file.
    #[error("Permission denied reading '{path}'\nTry: chmod +r {path:?}")]
    PermissionDenied { path: PathBuf },

    /// The file exists and was read, but is not a PDF.
    #[error("File is not a valid PDF: '{path}'\nFirst bytes: {magic:?}")]
    NotAPdf { path: PathBuf, magic: [u8; 4] },

    // ── PDF errors ────────────────────────────────────────────────────────
    /// PDF header/trailer/xref is corrupt and cannot be parsed.
    #[error("PDF '{path}' is corrupt: {detail}\nTry repairing with: qpdf --decrypt input.pdf output.pdf")]
    CorruptPdf { path: PathBuf, detail: String },

    /// PDF requires a password but none was provided.
    #[error("PDF '{path}' is encrypted and requires a password.\nProvide it with --password <PASSWORD>.")]
    PasswordRequired { path: PathBuf },

    /// A password was provided but it is wrong.
    #[error("Wrong password for PDF '{path}'")]
    WrongPassword { path: PathBuf },

    /// The document has no pages to search.
    #[error("PDF contains no pages")]
    EmptyDocument,

    /// The configured page number exceeds the actual page count.
    #[error("Page {page} is out of range (document has {total} pages)")]
    PageOutOfRange { page: usize, total: usize },

    /// pdfium could not read the text layer of a page.
    #[error("Text extraction failed for page {page}: {detail}")]
    TextExtractionFailed { page: usize, detail: String },

    // ── Table errors ──────────────────────────────────────────────────────
    /// No fragment contains the header keyword, so no table was located.
    #[error("Header '{header}' not found in {searched_pages} searched page(s)")]
    HeaderNotFound { header: String, searched_pages: usize },

    /// A fragment carries a NaN or infinite coordinate.
    #[error("Fragment '{text}' on page {page} has malformed coordinates ({x0}, {y0}, {x1}, {y1})")]
    MalformedCoordinates {
        page: usize,
        text: String,
        x0: f32,
        y0: f32,
        x1: f32,
        y1: f32,
    },

    /// The first candidate row was malformed and leading rows are rejected.
    #[error("First row below the header does not match the column schema: {0}")]
    LeadingRowRejected(#[source] RowError),

    // ── Config errors ─────────────────────────────────────────────────────
    /// Builder validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // ── Pdfium binding errors ─────────────────────────────────────────────
    /// Could not bind to a pdfium library.
    #[error(
        "Failed to bind to pdfium library: {0}\n\n\
You can:\n\
  • Set PDFIUM_LIB_PATH=/path/to/libpdfium to use an existing copy.\n\
  • Place libpdfium next to the working directory.\n\
  • Install pdfium system-wide (binaries: https://github.com/bblanchon/pdfium-binaries).\n"
    )]
    PdfiumBindingFailed(String),
}

/// A non-fatal error for a single raw row.
///
/// Raised by [`crate::pipeline::parse::RowParser`] and consumed by
/// [`crate::pipeline::parse::TableRows`], which decides whether it ends the
/// table or merely skips the row.
#[derive(Debug, Clone, PartialEq, Error, serde::Serialize, serde::Deserialize)]
pub enum RowError {
    /// The row does not have one cell per schema column.
    #[error("{cells:?} does not have {expected} elements (found {found})")]
    ColumnCountMismatch {
        expected: usize,
        found: usize,
        cells: Vec<String>,
    },

    /// A `quantity` cell is not a base-10 integer literal.
    #[error("invalid quantity '{value}': not an integer")]
    InvalidQuantity { value: String },

    /// A `price` cell is not a numeric literal once currency markers and
    /// separators are normalised.
    #[error("invalid price '{value}'")]
    InvalidPrice { value: String },
}
