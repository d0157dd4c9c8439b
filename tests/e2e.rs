//! End-to-end test against a real PDF and a real pdfium library.
//!
//! Gated behind the `E2E_PDF` environment variable so it does not run in CI
//! unless explicitly requested. The PDF must contain a table whose header
//! line includes `E2E_HEADER` (default `Bezeichnung`) with the columns
//! given in `E2E_COLS` (default `Anzahl Bezeichnung Preis`).
//!
//! Run with:
//!   E2E_PDF=test_cases/invoice.pdf PDFIUM_LIB_PATH=./libpdfium.so \
//!     cargo test --test e2e -- --nocapture

use edgequake_pdf2table::{extract, ColumnSchema, ExtractionConfig};
use std::path::PathBuf;

/// Skip this test if E2E_PDF is not set *or* the file does not exist.
macro_rules! e2e_skip_unless_ready {
    () => {{
        let Ok(p) = std::env::var("E2E_PDF") else {
            println!("SKIP: set E2E_PDF=/path/to/table.pdf to run e2e tests");
            return;
        };
        let p = PathBuf::from(p);
        if !p.exists() {
            println!("SKIP: test file not found: {}", p.display());
            return;
        }
        p
    }};
}

#[test]
fn test_extract_real_pdf() {
    let path = e2e_skip_unless_ready!();

    let header = std::env::var("E2E_HEADER").unwrap_or_else(|_| "Bezeichnung".into());
    let cols: ColumnSchema = std::env::var("E2E_COLS")
        .unwrap_or_else(|_| "Anzahl Bezeichnung Preis".into())
        .parse()
        .expect("E2E_COLS should list valid column types");

    let config = ExtractionConfig::builder()
        .header(header)
        .columns(cols.clone())
        .build()
        .expect("valid config");

    let table = extract(&path, &config).expect("extract() should succeed");

    assert!(!table.rows.is_empty(), "expected at least one table row");
    assert!(
        table.rows.iter().all(|r| r.len() == cols.output_len()),
        "every row must have one value per printed column"
    );

    print!("{}", table.to_text());
    println!("Stats: {:?}", table.stats);
}
