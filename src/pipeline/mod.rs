//! Pipeline stages for PDF table extraction.
//!
//! Each submodule implements exactly one transformation step, so each is
//! independently testable and the PDF backend can be swapped without
//! touching the geometry or parsing code.
//!
//! ## Data Flow
//!
//! ```text
//! input ──▶ source ──▶ locate ──▶ rows ──▶ parse
//! (path)   (pdfium)   (header)   (y0/x0)  (schema)
//! ```
//!
//! 1. [`input`]: validate the user-supplied path (exists, readable, `%PDF`)
//! 2. [`source`]: load the PDF via pdfium into owned, positioned fragments
//! 3. [`locate`]: find the header line and collect the candidate fragments
//!    below it
//! 4. [`rows`]: group candidates into raw rows, highest first
//! 5. [`parse`]: type each cell and decide where the table ends

pub mod input;
pub mod locate;
pub mod parse;
pub mod rows;
pub mod source;
