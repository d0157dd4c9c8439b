//! Configuration types for table extraction.
//!
//! All extraction behaviour is controlled through [`ExtractionConfig`], built
//! via its [`ExtractionConfigBuilder`]. The config is immutable once built and
//! is passed by reference into the table locator and the row parser, so one
//! run never depends on ambient state.

use crate::error::Pdf2TableError;
use crate::schema::{ColumnSchema, ColumnType};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Configuration for one table extraction.
///
/// # Example
/// ```rust
/// use edgequake_pdf2table::{ColumnType, ExtractionConfig};
///
/// let config = ExtractionConfig::builder()
///     .header("Bezeichnung")
///     .columns(vec![ColumnType::Quantity, ColumnType::Label, ColumnType::Price])
///     .build()
///     .unwrap();
/// assert_eq!(config.columns.len(), 3);
/// ```
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct ExtractionConfig {
    /// Case-sensitive substring identifying the table's header line.
    pub header: String,

    /// Expected column types, left to right.
    pub columns: ColumnSchema,

    /// 1-indexed page hosting the table. If None, pages are searched in
    /// order and the first one containing `header` is used.
    pub page: Option<usize>,

    /// PDF user password for encrypted documents.
    #[serde(skip_serializing)]
    pub password: Option<String>,

    /// What to do with malformed rows seen before the first valid row.
    /// Default: [`LeadingRows::Skip`].
    pub leading_rows: LeadingRows,
}

impl fmt::Debug for ExtractionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExtractionConfig")
            .field("header", &self.header)
            .field("columns", &self.columns)
            .field("page", &self.page)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("leading_rows", &self.leading_rows)
            .finish()
    }
}

impl ExtractionConfig {
    /// Create a new builder for `ExtractionConfig`.
    pub fn builder() -> ExtractionConfigBuilder {
        ExtractionConfigBuilder {
            config: Self::default(),
        }
    }
}

/// Builder for [`ExtractionConfig`].
#[derive(Debug)]
pub struct ExtractionConfigBuilder {
    config: ExtractionConfig,
}

impl ExtractionConfigBuilder {
    pub fn header(mut self, header: impl Into<String>) -> Self {
        self.config.header = header.into();
        self
    }

    pub fn columns(mut self, columns: impl Into<ColumnSchema>) -> Self {
        self.config.columns = columns.into();
        self
    }

    pub fn column(mut self, column: ColumnType) -> Self {
        let mut cols = self.config.columns.columns().to_vec();
        cols.push(column);
        self.config.columns = ColumnSchema::new(cols);
        self
    }

    pub fn page(mut self, page: usize) -> Self {
        self.config.page = Some(page);
        self
    }

    pub fn password(mut self, pwd: impl Into<String>) -> Self {
        self.config.password = Some(pwd.into());
        self
    }

    pub fn leading_rows(mut self, policy: LeadingRows) -> Self {
        self.config.leading_rows = policy;
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(self) -> Result<ExtractionConfig, Pdf2TableError> {
        let c = &self.config;
        if c.header.is_empty() {
            return Err(Pdf2TableError::InvalidConfig(
                "Header keyword must not be empty".into(),
            ));
        }
        if c.columns.is_empty() {
            return Err(Pdf2TableError::InvalidConfig(
                "At least one column type is required".into(),
            ));
        }
        if c.columns.output_len() == 0 {
            return Err(Pdf2TableError::InvalidConfig(
                "Every column is ignored ('-'); nothing would be extracted".into(),
            ));
        }
        if c.page == Some(0) {
            return Err(Pdf2TableError::InvalidConfig(
                "Pages are 1-indexed, minimum is 1 (got 0)".into(),
            ));
        }
        Ok(self.config)
    }
}

// ── Enums ────────────────────────────────────────────────────────────────

/// Policy for malformed rows between the header and the first valid row.
///
/// Once a row has parsed, the first malformed row always ends the table.
/// Before that, sub-headers, units lines or blank spacer text may sit between
/// the header keyword and the data; `Skip` steps over them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LeadingRows {
    /// Skip malformed rows until one parses. (default)
    #[default]
    Skip,
    /// Treat a malformed first row as fatal.
    Reject,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> ExtractionConfigBuilder {
        ExtractionConfig::builder()
            .header("Menge")
            .columns(vec![ColumnType::Quantity, ColumnType::Label])
    }

    #[test]
    fn builds_with_defaults() {
        let config = base().build().unwrap();
        assert_eq!(config.page, None);
        assert_eq!(config.leading_rows, LeadingRows::Skip);
        assert!(config.password.is_none());
    }

    #[test]
    fn rejects_empty_header() {
        let err = base().header("").build().unwrap_err();
        assert!(matches!(err, Pdf2TableError::InvalidConfig(_)));
    }

    #[test]
    fn rejects_empty_or_all_ignored_schema() {
        let err = ExtractionConfig::builder().header("x").build().unwrap_err();
        assert!(matches!(err, Pdf2TableError::InvalidConfig(_)));

        let err = ExtractionConfig::builder()
            .header("x")
            .column(ColumnType::Ignore)
            .column(ColumnType::Ignore)
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("ignored"));
    }

    #[test]
    fn rejects_page_zero() {
        assert!(base().page(0).build().is_err());
        assert_eq!(base().page(2).build().unwrap().page, Some(2));
    }

    #[test]
    fn debug_redacts_password() {
        let config = base().password("hunter2").build().unwrap();
        let dbg = format!("{config:?}");
        assert!(!dbg.contains("hunter2"));
        assert!(dbg.contains("redacted"));
    }
}
