use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::Transaction;
use crate::error::{CapTableError, RecordField};

/// Share and cash totals for one investor as of a cutoff date
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvestorTotals {
    pub investor: String,
    pub shares: i64,
    pub cash_paid: Decimal,
}

/// Purchase history of a single investor, in input order
///
/// Every transaction appended is expected to belong to `name`; the cap
/// table is the only caller and groups by investor before appending.
#[derive(Debug, Clone)]
pub struct InvestorLedger {
    name: String,
    history: Vec<Transaction>,
}

impl InvestorLedger {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            history: Vec::new(),
        }
    }

    pub fn append(&mut self, tx: Transaction) {
        self.history.push(tx);
    }

    /// Sum shares and cash over transactions dated on or before `cutoff`.
    /// An investor with nothing in range totals to zero.
    ///
    /// Fails with [`CapTableError::TotalOverflow`] if either sum leaves the
    /// range of its type.
    pub fn totals_as_of(&self, cutoff: NaiveDate) -> Result<InvestorTotals, CapTableError> {
        let overflow = |field: RecordField| CapTableError::TotalOverflow {
            field,
            investor: Some(self.name.clone()),
            date: cutoff,
        };

        let (shares, cash_paid) = self
            .history
            .iter()
            .filter(|tx| tx.date() <= cutoff)
            .try_fold((0i64, Decimal::ZERO), |(shares, cash), tx| {
                let shares = shares
                    .checked_add(tx.shares())
                    .ok_or_else(|| overflow(RecordField::Shares))?;
                let cash = cash
                    .checked_add(tx.price())
                    .ok_or_else(|| overflow(RecordField::Price))?;
                Ok::<_, CapTableError>((shares, cash))
            })?;

        Ok(InvestorTotals {
            investor: self.name.clone(),
            shares,
            cash_paid,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn history(&self) -> &[Transaction] {
        &self.history
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }
}
