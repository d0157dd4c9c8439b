//! Integration tests over synthetic documents.
//!
//! These build `Document`s by hand, so they exercise locate → rows → parse
//! without a pdfium library.

use edgequake_pdf2table::{
    extract_document, extract_rows, CellValue, ColumnType, Document, ExtractionConfig, Fragment,
    LeadingRows, PageFragments, ParseState, Pdf2TableError, RowError,
};

// ── Test helpers ─────────────────────────────────────────────────────────────

const COLUMN_X: [f32; 3] = [40.0, 120.0, 420.0];

/// A row of cells laid out on the shared column grid at baseline `y0`.
fn row(y0: f32, cells: &[&str]) -> Vec<Fragment> {
    cells
        .iter()
        .zip(COLUMN_X.iter().chain(std::iter::repeat(&500.0)))
        .map(|(text, &x0)| Fragment::new(*text, x0, y0, x0 + 60.0, y0 + 9.0))
        .collect()
}

fn page(rows: Vec<Vec<Fragment>>) -> PageFragments {
    PageFragments::new(595.0, 842.0, rows.into_iter().flatten().collect())
}

fn config(header: &str, cols: &[ColumnType]) -> ExtractionConfig {
    ExtractionConfig::builder()
        .header(header)
        .columns(cols.to_vec())
        .build()
        .expect("valid config")
}

const QLP: [ColumnType; 3] = [ColumnType::Quantity, ColumnType::Label, ColumnType::Price];

// ── Round trip ───────────────────────────────────────────────────────────────

#[test]
fn three_rows_below_total_header() {
    let doc = Document::from_pages(vec![page(vec![
        row(100.0, &["Anzahl", "Bezeichnung", "Total"]),
        row(90.0, &["1", "Kabel", "3,00 €"]),
        row(80.0, &["2", "Stecker", "€1.234,56"]),
        row(70.0, &["3", "Dose", "12,50 EUR"]),
    ])]);

    let table = extract_document(&doc, &config("Total", &QLP)).unwrap();

    assert_eq!(table.columns, vec!["Anzahl", "Bezeichnung", "Preis"]);
    assert_eq!(table.rows.len(), 3);
    assert_eq!(
        table.rows[0].values,
        vec![
            CellValue::Quantity(1),
            CellValue::Label("Kabel".into()),
            CellValue::Price(3.0)
        ]
    );
    assert_eq!(table.rows[1].values[2], CellValue::Price(1234.56));
    assert_eq!(table.rows[2].values[2], CellValue::Price(12.5));
    assert_eq!(table.stats.page, 1);
    assert_eq!(table.stats.parsed_rows, 3);
}

#[test]
fn fragments_are_ordered_by_x_not_by_source_order() {
    let mut cells = row(90.0, &["7", "Mutter", "0,10 €"]);
    cells.reverse();
    let doc = Document::from_pages(vec![page(vec![
        row(100.0, &["Anzahl", "Bezeichnung", "Preis"]),
        cells,
    ])]);

    let table = extract_document(&doc, &config("Preis", &QLP)).unwrap();
    assert_eq!(table.to_text(), "['Anzahl', 'Bezeichnung', 'Preis']\n[7, 'Mutter', 0.1]\n");
}

#[test]
fn ignored_column_is_dropped_from_output() {
    let doc = Document::from_pages(vec![page(vec![
        row(100.0, &["Menge", "Artikel", "Lager"]),
        row(90.0, &["5", "Widget", "ignored"]),
    ])]);
    let cols = [ColumnType::Quantity, ColumnType::Label, ColumnType::Ignore];

    let table = extract_document(&doc, &config("Menge", &cols)).unwrap();
    assert_eq!(table.columns, vec!["Anzahl", "Bezeichnung"]);
    assert_eq!(table.to_text().lines().nth(1), Some("[5, 'Widget']"));
}

// ── Termination ──────────────────────────────────────────────────────────────

#[test]
fn footer_row_ends_table_without_error() {
    let doc = Document::from_pages(vec![page(vec![
        row(100.0, &["Anzahl", "Bezeichnung", "Preis"]),
        row(90.0, &["1", "Kabel", "3,00"]),
        row(80.0, &["2", "Stecker", "4,00"]),
        row(70.0, &["Summe", "7,00"]),
        row(60.0, &["9", "Nach der Summe", "1,00"]),
    ])]);
    let cfg = config("Preis", &QLP);

    let mut rows = extract_rows(&doc, &cfg).unwrap();
    let collected: Vec<_> = rows.by_ref().collect();
    assert_eq!(collected.len(), 2);
    assert_eq!(rows.state(), ParseState::Done);

    let table = extract_document(&doc, &cfg).unwrap();
    assert_eq!(table.rows.len(), 2);
    assert_eq!(table.stats.raw_rows, 3);
}

#[test]
fn leading_malformed_rows_are_skipped_by_default() {
    let doc = Document::from_pages(vec![page(vec![
        row(100.0, &["Anzahl", "Bezeichnung", "Preis"]),
        row(95.0, &["Stk.", "", "EUR"]),
        row(90.0, &["1", "Kabel", "3,00"]),
    ])]);

    let table = extract_document(&doc, &config("Preis", &QLP)).unwrap();
    assert_eq!(table.rows.len(), 1);
    assert_eq!(table.stats.skipped_rows, 1);
}

#[test]
fn leading_malformed_row_can_be_rejected() {
    let doc = Document::from_pages(vec![page(vec![
        row(100.0, &["Anzahl", "Bezeichnung", "Preis"]),
        row(95.0, &["Stk.", "-", "EUR"]),
        row(90.0, &["1", "Kabel", "3,00"]),
    ])]);
    let cfg = ExtractionConfig::builder()
        .header("Preis")
        .columns(QLP.to_vec())
        .leading_rows(LeadingRows::Reject)
        .build()
        .unwrap();

    match extract_document(&doc, &cfg).unwrap_err() {
        Pdf2TableError::LeadingRowRejected(RowError::InvalidQuantity { value }) => {
            assert_eq!(value, "Stk.")
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn no_matching_rows_yields_empty_table() {
    let doc = Document::from_pages(vec![page(vec![
        row(100.0, &["Anzahl", "Bezeichnung", "Preis"]),
        row(90.0, &["nur Text"]),
    ])]);

    let table = extract_document(&doc, &config("Preis", &QLP)).unwrap();
    assert!(table.rows.is_empty());
    assert_eq!(table.to_text(), "['Anzahl', 'Bezeichnung', 'Preis']\n");
}

// ── Locator ──────────────────────────────────────────────────────────────────

#[test]
fn missing_header_is_fatal() {
    let doc = Document::from_pages(vec![page(vec![row(90.0, &["1", "Kabel", "3,00"])])]);
    let err = extract_document(&doc, &config("Preis", &QLP)).unwrap_err();
    assert!(matches!(err, Pdf2TableError::HeaderNotFound { .. }));
}

#[test]
fn text_above_header_is_never_a_row() {
    let doc = Document::from_pages(vec![page(vec![
        row(700.0, &["1", "Briefkopf", "9,99"]),
        row(100.0, &["Anzahl", "Bezeichnung", "Preis"]),
        row(90.0, &["2", "Kabel", "3,00"]),
    ])]);

    let table = extract_document(&doc, &config("Bezeichnung", &QLP)).unwrap();
    assert_eq!(table.rows.len(), 1);
    assert_eq!(table.rows[0].values[1], CellValue::Label("Kabel".into()));
}

#[test]
fn table_on_second_page() {
    let doc = Document::from_pages(vec![
        page(vec![row(500.0, &["Anschreiben"])]),
        page(vec![
            row(300.0, &["Anzahl", "Bezeichnung", "Preis"]),
            row(280.0, &["4", "Lampe", "19,90 €"]),
        ]),
    ]);

    let table = extract_document(&doc, &config("Bezeichnung", &QLP)).unwrap();
    assert_eq!(table.stats.page, 2);
    assert_eq!(table.rows.len(), 1);
}

#[test]
fn json_output_shape() {
    let doc = Document::from_pages(vec![page(vec![
        row(100.0, &["Anzahl", "Bezeichnung", "Preis"]),
        row(90.0, &["1", "Kabel", "3,50"]),
    ])]);

    let table = extract_document(&doc, &config("Preis", &QLP)).unwrap();
    let json: serde_json::Value = serde_json::to_value(&table).unwrap();
    assert_eq!(json["columns"][2], "Preis");
    assert_eq!(json["rows"][0], serde_json::json!([1, "Kabel", 3.5]));
    assert_eq!(json["stats"]["parsed_rows"], 1);
}
