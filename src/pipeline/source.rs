//! Fragment source: load a PDF via pdfium and collect its positioned text.
//!
//! Each pdfium text segment becomes one [`Fragment`]. pdfium reports
//! segment bounds in PDF user space (origin bottom-left), which is exactly
//! the coordinate system the locator and row assembler expect, so no
//! flipping is done here.
//!
//! Everything is read eagerly into an owned [`Document`]; the pdfium
//! handles are dropped before table extraction starts.

use crate::document::{Document, Fragment, PageFragments};
use crate::error::Pdf2TableError;
use pdfium_render::prelude::*;
use std::path::Path;
use tracing::{debug, info};

/// Bind to a pdfium library.
///
/// Resolution order: `PDFIUM_LIB_PATH`, then a library in the working
/// directory, then the system library search path.
pub fn bind_pdfium() -> Result<Pdfium, Pdf2TableError> {
    let bindings = match std::env::var("PDFIUM_LIB_PATH") {
        Ok(lib_path) if !lib_path.is_empty() => {
            debug!("Binding pdfium from PDFIUM_LIB_PATH={}", lib_path);
            Pdfium::bind_to_library(&lib_path)
        }
        _ => Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path("./"))
            .or_else(|_| Pdfium::bind_to_system_library()),
    }
    .map_err(|e| Pdf2TableError::PdfiumBindingFailed(format!("{e:?}")))?;

    Ok(Pdfium::new(bindings))
}

/// Load every page of the PDF at `pdf_path` as fragments.
pub fn load_document(pdf_path: &Path, password: Option<&str>) -> Result<Document, Pdf2TableError> {
    let pdfium = bind_pdfium()?;
    let document = pdfium
        .load_pdf_from_file(pdf_path, password)
        .map_err(|e| map_load_error(e, pdf_path, password))?;

    collect_fragments(&document)
}

/// Load every page of an in-memory PDF as fragments.
pub fn load_document_from_bytes(
    bytes: &[u8],
    password: Option<&str>,
) -> Result<Document, Pdf2TableError> {
    let pdfium = bind_pdfium()?;
    let document = pdfium
        .load_pdf_from_byte_slice(bytes, password)
        .map_err(|e| map_load_error(e, Path::new("<memory>"), password))?;

    collect_fragments(&document)
}

fn map_load_error(e: PdfiumError, pdf_path: &Path, password: Option<&str>) -> Pdf2TableError {
    let err_str = format!("{:?}", e);
    if err_str.contains("Password") || err_str.contains("password") {
        if password.is_some() {
            Pdf2TableError::WrongPassword {
                path: pdf_path.to_path_buf(),
            }
        } else {
            Pdf2TableError::PasswordRequired {
                path: pdf_path.to_path_buf(),
            }
        }
    } else {
        Pdf2TableError::CorruptPdf {
            path: pdf_path.to_path_buf(),
            detail: err_str,
        }
    }
}

fn collect_fragments(document: &PdfDocument<'_>) -> Result<Document, Pdf2TableError> {
    let pages = document.pages();
    info!("PDF loaded: {} pages", pages.len());

    let mut result = Vec::with_capacity(pages.len() as usize);
    for (idx, page) in pages.iter().enumerate() {
        let text = page
            .text()
            .map_err(|e| Pdf2TableError::TextExtractionFailed {
                page: idx + 1,
                detail: format!("{:?}", e),
            })?;

        let mut fragments = Vec::new();
        for segment in text.segments().iter() {
            let content = segment.text();
            if content.trim().is_empty() {
                continue;
            }

            let bounds = segment.bounds();
            fragments.push(Fragment::new(
                content,
                bounds.left().value,
                bounds.bottom().value,
                bounds.right().value,
                bounds.top().value,
            ));
        }

        debug!("Page {}: {} text fragments", idx + 1, fragments.len());
        result.push(PageFragments::new(
            page.width().value,
            page.height().value,
            fragments,
        ));
    }

    Ok(Document::from_pages(result))
}
