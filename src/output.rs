//! Output types: typed cells, parsed rows and the assembled table.
//!
//! Text rendering follows a list-literal style, one line per row:
//!
//! ```text
//! ['Anzahl', 'Bezeichnung', 'Preis']
//! [2, 'Schraube M4', 1.5]
//! [10, 'Unterlegscheibe', 0.35]
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// One typed cell value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Quantity(i64),
    Label(String),
    Price(f64),
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Quantity(n) => write!(f, "{n}"),
            // `{:?}` keeps the fractional part on whole amounts (`12.0`).
            CellValue::Price(p) => write!(f, "{p:?}"),
            CellValue::Label(s) => write_quoted(f, s),
        }
    }
}

/// Quote a label for the list-literal form: single quotes,
/// unless the text holds a `'` and no `"`, in which case double quotes.
fn write_quoted(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    let quote = if s.contains('\'') && !s.contains('"') {
        '"'
    } else {
        '\''
    };
    write!(f, "{quote}")?;
    for c in s.chars() {
        match c {
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            c if c == quote => write!(f, "\\{c}")?,
            c => write!(f, "{c}")?,
        }
    }
    write!(f, "{quote}")
}

/// One parsed table row: a value per non-ignored schema column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParsedRow {
    pub values: Vec<CellValue>,
}

impl ParsedRow {
    pub fn new(values: Vec<CellValue>) -> Self {
        Self { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl fmt::Display for ParsedRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, v) in self.values.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{v}")?;
        }
        f.write_str("]")
    }
}

/// Counters collected while the row parser runs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractionStats {
    /// 1-indexed page the table was read from.
    pub page: usize,
    /// Raw rows pulled from the row assembler, including the terminating one.
    pub raw_rows: usize,
    pub parsed_rows: usize,
    /// Malformed rows skipped before the first valid row.
    pub skipped_rows: usize,
    pub duration_ms: u64,
}

/// A fully extracted table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtractedTable {
    /// Tags of the emitted columns (schema minus `-` entries).
    pub columns: Vec<String>,
    pub rows: Vec<ParsedRow>,
    pub stats: ExtractionStats,
}

impl ExtractedTable {
    /// Render the header line followed by one line per row.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        out.push('[');
        for (i, c) in self.columns.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            out.push_str(&CellValue::Label(c.clone()).to_string());
        }
        out.push_str("]\n");
        for row in &self.rows {
            out.push_str(&row.to_string());
            out.push('\n');
        }
        out
    }
}
