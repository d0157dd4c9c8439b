//! Column schema: the ordered list of column types a table row must match.
//!
//! The schema is supplied by the caller and fixed for one extraction run.
//! Its length is the exact number of cells every valid row must have;
//! [`ColumnType::Ignore`] columns count towards that length but are dropped
//! from the parsed output.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type tag for one table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColumnType {
    /// Base-10 integer count (`Anzahl`).
    Quantity,
    /// Free text, passed through trimmed (`Bezeichnung`).
    Label,
    /// Comma-decimal currency amount (`Preis`).
    Price,
    /// Cell is required to be present but is not emitted (`-`).
    Ignore,
}

impl ColumnType {
    /// The token used on the command line and in the output header line.
    pub fn tag(self) -> &'static str {
        match self {
            ColumnType::Quantity => "Anzahl",
            ColumnType::Label => "Bezeichnung",
            ColumnType::Price => "Preis",
            ColumnType::Ignore => "-",
        }
    }

    pub fn is_ignored(self) -> bool {
        self == ColumnType::Ignore
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Error returned when a column token is not recognised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownColumnType(pub String);

impl fmt::Display for UnknownColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown column type '{}' (expected Anzahl, Bezeichnung, Preis or -)",
            self.0
        )
    }
}

impl std::error::Error for UnknownColumnType {}

impl FromStr for ColumnType {
    type Err = UnknownColumnType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Anzahl" | "quantity" => Ok(ColumnType::Quantity),
            "Bezeichnung" | "label" => Ok(ColumnType::Label),
            "Preis" | "price" => Ok(ColumnType::Price),
            "-" | "ignore" => Ok(ColumnType::Ignore),
            other => Err(UnknownColumnType(other.to_string())),
        }
    }
}

/// Ordered sequence of column types, one per table column.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnSchema(Vec<ColumnType>);

impl ColumnSchema {
    pub fn new(columns: Vec<ColumnType>) -> Self {
        Self(columns)
    }

    /// Number of cells a raw row must have, ignored columns included.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn columns(&self) -> &[ColumnType] {
        &self.0
    }

    /// Number of values in a parsed row.
    pub fn output_len(&self) -> usize {
        self.0.iter().filter(|c| !c.is_ignored()).count()
    }

    /// Tags of the emitted columns, in schema order.
    pub fn output_tags(&self) -> Vec<&'static str> {
        self.0
            .iter()
            .filter(|c| !c.is_ignored())
            .map(|c| c.tag())
            .collect()
    }
}

impl From<Vec<ColumnType>> for ColumnSchema {
    fn from(columns: Vec<ColumnType>) -> Self {
        Self(columns)
    }
}

impl FromStr for ColumnSchema {
    type Err = UnknownColumnType;

    /// Parse a whitespace- or comma-separated token list, e.g.
    /// `"Anzahl Bezeichnung - Preis"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split(|c: char| c.is_whitespace() || c == ',')
            .filter(|t| !t.is_empty())
            .map(ColumnType::from_str)
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}
