//! Row parsing: validate raw rows against the column schema and convert
//! each cell to a typed value.
//!
//! [`TableRows`] wraps the raw-row sequence in a three-state machine:
//!
//! ```text
//!              parse ok                     parse error
//! NotStarted ───────────▶ InTable ───────────────────────▶ Done
//!     │                                                    ▲
//!     │ parse error: Skip → stay NotStarted                │
//!     └──────────────── Reject ────────────────────────────┘
//! ```
//!
//! The first malformed row after a valid one (totals, footers, page numbers)
//! ends the table without an error.

use crate::config::{ExtractionConfig, LeadingRows};
use crate::error::RowError;
use crate::output::{CellValue, ExtractionStats, ParsedRow};
use crate::pipeline::rows::RawRow;
use crate::schema::{ColumnSchema, ColumnType};
use tracing::debug;

/// Parse a base-10 integer quantity such as `"3"` or `"-2"`.
pub fn parse_quantity(value: &str) -> Result<i64, RowError> {
    value
        .trim()
        .parse::<i64>()
        .map_err(|_| RowError::InvalidQuantity {
            value: value.to_string(),
        })
}

/// Parse a comma-decimal euro amount.
///
/// One leading and one trailing currency marker (`€` or `EUR`) are stripped,
/// periods are dropped as thousands separators and the decimal comma becomes
/// a point: `"€1.234,56"` → `1234.56`, `"12,50 EUR"` → `12.5`.
pub fn parse_price(value: &str) -> Result<f64, RowError> {
    let mut v = value.trim();
    if let Some(rest) = v.strip_prefix('€') {
        v = rest.trim_start();
    }
    if let Some(rest) = v.strip_prefix("EUR") {
        v = rest.trim_start();
    }
    if let Some(rest) = v.strip_suffix('€') {
        v = rest.trim_end();
    }
    if let Some(rest) = v.strip_suffix("EUR") {
        v = rest.trim_end();
    }

    let normalised = v.replace('.', "").replace(',', ".");
    match normalised.parse::<f64>() {
        Ok(p) if p.is_finite() => Ok(p),
        _ => Err(RowError::InvalidPrice {
            value: value.to_string(),
        }),
    }
}

/// Parse one row's cells against `schema`.
pub fn parse_cells(schema: &ColumnSchema, cells: &[String]) -> Result<ParsedRow, RowError> {
    if cells.len() != schema.len() {
        return Err(RowError::ColumnCountMismatch {
            expected: schema.len(),
            found: cells.len(),
            cells: cells.to_vec(),
        });
    }

    let mut values = Vec::with_capacity(schema.output_len());
    for (column, cell) in schema.columns().iter().zip(cells) {
        match column {
            ColumnType::Quantity => values.push(CellValue::Quantity(parse_quantity(cell)?)),
            ColumnType::Label => values.push(CellValue::Label(cell.trim().to_string())),
            ColumnType::Price => values.push(CellValue::Price(parse_price(cell)?)),
            ColumnType::Ignore => {}
        }
    }
    Ok(ParsedRow::new(values))
}

/// Converts [`RawRow`]s to [`ParsedRow`]s for a fixed schema.
#[derive(Debug, Clone, Copy)]
pub struct RowParser<'c> {
    schema: &'c ColumnSchema,
}

impl<'c> RowParser<'c> {
    pub fn new(schema: &'c ColumnSchema) -> Self {
        Self { schema }
    }

    pub fn parse(&self, row: &RawRow) -> Result<ParsedRow, RowError> {
        parse_cells(self.schema, &row.cells)
    }
}

/// Position of [`TableRows`] relative to the table body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseState {
    /// No row has parsed yet.
    NotStarted,
    /// At least one row has parsed.
    InTable,
    /// The sequence has ended.
    Done,
}

/// Lazy sequence of parsed rows over a raw-row source.
#[derive(Debug)]
pub struct TableRows<'c, I> {
    rows: I,
    parser: RowParser<'c>,
    leading_rows: LeadingRows,
    state: ParseState,
    stats: ExtractionStats,
    rejected: Option<RowError>,
}

impl<'c, I> TableRows<'c, I>
where
    I: Iterator<Item = RawRow>,
{
    pub fn new(rows: I, config: &'c ExtractionConfig) -> Self {
        Self {
            rows,
            parser: RowParser::new(&config.columns),
            leading_rows: config.leading_rows,
            state: ParseState::NotStarted,
            stats: ExtractionStats::default(),
            rejected: None,
        }
    }

    pub fn state(&self) -> ParseState {
        self.state
    }

    pub fn stats(&self) -> &ExtractionStats {
        &self.stats
    }

    /// The row error that ended the sequence under [`LeadingRows::Reject`].
    pub fn take_rejected(&mut self) -> Option<RowError> {
        self.rejected.take()
    }
}

impl<I> Iterator for TableRows<'_, I>
where
    I: Iterator<Item = RawRow>,
{
    type Item = ParsedRow;

    fn next(&mut self) -> Option<ParsedRow> {
        loop {
            if self.state == ParseState::Done {
                return None;
            }

            let Some(raw) = self.rows.next() else {
                self.state = ParseState::Done;
                return None;
            };
            self.stats.raw_rows += 1;

            match self.parser.parse(&raw) {
                Ok(row) => {
                    self.state = ParseState::InTable;
                    self.stats.parsed_rows += 1;
                    return Some(row);
                }
                Err(e) => match (self.state, self.leading_rows) {
                    (ParseState::InTable, _) => {
                        debug!("End of table at y={:.2}: {}", raw.y, e);
                        self.state = ParseState::Done;
                    }
                    (_, LeadingRows::Skip) => {
                        debug!("Skipping leading row at y={:.2}: {}", raw.y, e);
                        self.stats.skipped_rows += 1;
                    }
                    (_, LeadingRows::Reject) => {
                        debug!("Rejecting leading row at y={:.2}: {}", raw.y, e);
                        self.rejected = Some(e);
                        self.state = ParseState::Done;
                    }
                },
            }
        }
    }
}

impl<I> std::iter::FusedIterator for TableRows<'_, I> where I: Iterator<Item = RawRow> {}
