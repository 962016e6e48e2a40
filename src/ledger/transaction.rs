use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::str::FromStr;

use crate::error::{FormatError, RecordField};

/// Date layout used by ledger records
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// One raw ledger row, fields still as text, in file order:
/// date, shares, cash paid, investor name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerRecord {
    pub date: String,
    pub shares: String,
    pub price: String,
    pub investor: String,
}

impl LedgerRecord {
    pub fn new(
        date: impl Into<String>,
        shares: impl Into<String>,
        price: impl Into<String>,
        investor: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            shares: shares.into(),
            price: price.into(),
            investor: investor.into(),
        }
    }
}

impl<A, B, C, D> From<(A, B, C, D)> for LedgerRecord
where
    A: Into<String>,
    B: Into<String>,
    C: Into<String>,
    D: Into<String>,
{
    fn from((date, shares, price, investor): (A, B, C, D)) -> Self {
        Self::new(date, shares, price, investor)
    }
}

/// A single share purchase. Immutable once parsed.
///
/// `shares` may be zero or negative (buybacks) and is not validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    date: NaiveDate,
    shares: i64,
    price: Decimal,
    investor: String,
}

impl Transaction {
    /// Parse a transaction from its four text fields.
    ///
    /// Numeric and date fields are trimmed before parsing; the investor
    /// name is kept exactly as given. Prices may use exponent notation
    /// (`1e3`, `2.5E2`).
    pub fn parse(
        date: &str,
        shares: &str,
        price: &str,
        investor: &str,
    ) -> Result<Self, FormatError> {
        let date = parse_record_date(date)?;

        let shares = shares
            .trim()
            .parse::<i64>()
            .map_err(|e| FormatError::new(RecordField::Shares, shares, e))?;

        let price = parse_price(price)?;

        Ok(Self {
            date,
            shares,
            price,
            investor: investor.to_string(),
        })
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn shares(&self) -> i64 {
        self.shares
    }

    /// Cash paid for the whole transaction (not per share)
    pub fn price(&self) -> Decimal {
        self.price
    }

    pub fn investor(&self) -> &str {
        &self.investor
    }
}

impl TryFrom<&LedgerRecord> for Transaction {
    type Error = FormatError;

    fn try_from(record: &LedgerRecord) -> Result<Self, Self::Error> {
        Transaction::parse(
            &record.date,
            &record.shares,
            &record.price,
            &record.investor,
        )
    }
}

fn parse_record_date(text: &str) -> Result<NaiveDate, FormatError> {
    NaiveDate::parse_from_str(text.trim(), DATE_FORMAT)
        .map_err(|e| FormatError::new(RecordField::Date, text, e))
}

fn parse_price(text: &str) -> Result<Decimal, FormatError> {
    let trimmed = text.trim();
    Decimal::from_str(trimmed)
        .or_else(|e| Decimal::from_scientific(trimmed).map_err(|_| e))
        .map_err(|e| FormatError::new(RecordField::Price, text, e))
}
