//! Error handling for captable
//!
//! The ledger and report engine fail with typed errors defined here. The
//! application layer (importer, config, CLI) uses anyhow for context
//! chaining; the typed errors convert into it with `?`.

use chrono::NaiveDate;
use std::fmt;
use thiserror::Error;

/// The field of a ledger record that failed to parse
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordField {
    Date,
    Shares,
    Price,
}

impl RecordField {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordField::Date => "date",
            RecordField::Shares => "shares",
            RecordField::Price => "price",
        }
    }
}

impl fmt::Display for RecordField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A record field could not be parsed as its expected type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid {field} '{value}': {reason}")]
pub struct FormatError {
    pub field: RecordField,
    pub value: String,
    pub reason: String,
}

impl FormatError {
    pub fn new(field: RecordField, value: impl Into<String>, reason: impl fmt::Display) -> Self {
        Self {
            field,
            value: value.into(),
            reason: reason.to_string(),
        }
    }
}

/// Core error types for cap table construction and reporting
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CapTableError {
    /// Record number is 1-based and excludes the header row
    #[error("record {record}: {source}")]
    Format {
        record: usize,
        #[source]
        source: FormatError,
    },

    #[error("cannot compute ownership as of {date}: no shares issued on or before that date")]
    DegenerateReport { date: NaiveDate },

    /// `investor` is `None` when the cross-investor total overflowed
    #[error(
        "{field} total overflowed as of {date}{}",
        .investor.as_ref().map(|name| format!(" for investor '{}'", name)).unwrap_or_default()
    )]
    TotalOverflow {
        field: RecordField,
        investor: Option<String>,
        date: NaiveDate,
    },
}

/// Result type alias for application-level operations
pub type Result<T> = anyhow::Result<T>;
