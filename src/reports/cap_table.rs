use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::HashMap;

use crate::error::{CapTableError, RecordField};
use crate::ledger::{InvestorLedger, InvestorTotals, LedgerRecord, Transaction};

/// Date layout of the `date` key in the report
pub const REPORT_DATE_FORMAT: &str = "%Y/%m/%d";

/// What to do when no shares are outstanding at the cutoff date
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ZeroSharesPolicy {
    /// Refuse to build the report
    #[default]
    Fail,
    /// Report every investor at 0% ownership
    ReportZero,
}

/// One investor's line in the report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OwnershipEntry {
    pub investor: String,
    pub shares: i64,
    #[serde(with = "rust_decimal::serde::float")]
    pub cash_paid: Decimal,
    /// Percentage in the 0..=100 range. The key is spelled `ownsership`
    /// in the output format and has to stay that way.
    #[serde(rename = "ownsership", with = "rust_decimal::serde::float")]
    pub ownership_percent: Decimal,
}

/// Cap table as of a cutoff date
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CapTableReport {
    #[serde(serialize_with = "serialize_report_date")]
    pub date: NaiveDate,
    #[serde(with = "rust_decimal::serde::float")]
    pub cash_raised: Decimal,
    #[serde(rename = "total_number_of_shares")]
    pub total_shares: i64,
    pub ownership: Vec<OwnershipEntry>,
}

impl CapTableReport {
    /// Compact JSON in the report output format
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

fn serialize_report_date<S: Serializer>(
    date: &NaiveDate,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.collect_str(&date.format(REPORT_DATE_FORMAT))
}

/// Investor ledgers keyed by name, in order of first appearance
///
/// Built once from a full record stream; report generation never mutates
/// it, so reports for different cutoffs can be taken from the same table.
#[derive(Debug, Clone, Default)]
pub struct CapTable {
    ledgers: Vec<InvestorLedger>,
    index: HashMap<String, usize>,
}

impl CapTable {
    /// An empty cap table
    pub fn new() -> Self {
        Self::default()
    }

    /// Group records into per-investor ledgers.
    ///
    /// Fails on the first malformed record; no partial table is returned.
    pub fn build<I, R>(records: I) -> Result<Self, CapTableError>
    where
        I: IntoIterator<Item = R>,
        R: Into<LedgerRecord>,
    {
        let mut table = Self::new();

        for (idx, record) in records.into_iter().enumerate() {
            let record = record.into();
            let tx = Transaction::try_from(&record).map_err(|source| CapTableError::Format {
                record: idx + 1,
                source,
            })?;
            table.ledger_entry(tx.investor()).append(tx);
        }

        Ok(table)
    }

    fn ledger_entry(&mut self, investor: &str) -> &mut InvestorLedger {
        let idx = match self.index.get(investor) {
            Some(&idx) => idx,
            None => {
                let idx = self.ledgers.len();
                self.ledgers.push(InvestorLedger::new(investor));
                self.index.insert(investor.to_string(), idx);
                idx
            }
        };
        &mut self.ledgers[idx]
    }

    pub fn ledger(&self, investor: &str) -> Option<&InvestorLedger> {
        self.index.get(investor).map(|&idx| &self.ledgers[idx])
    }

    /// Ledgers in order of first appearance in the input
    pub fn ledgers(&self) -> &[InvestorLedger] {
        &self.ledgers
    }

    pub fn investor_count(&self) -> usize {
        self.ledgers.len()
    }

    pub fn transaction_count(&self) -> usize {
        self.ledgers.iter().map(InvestorLedger::len).sum()
    }

    /// Build the report as of `cutoff` (inclusive).
    ///
    /// Fails with [`CapTableError::DegenerateReport`] when no shares are
    /// outstanding at the cutoff, and with [`CapTableError::TotalOverflow`]
    /// when a share or cash total does not fit its type.
    pub fn generate_report(&self, cutoff: NaiveDate) -> Result<CapTableReport, CapTableError> {
        self.generate_report_with(cutoff, ZeroSharesPolicy::Fail)
    }

    pub fn generate_report_with(
        &self,
        cutoff: NaiveDate,
        policy: ZeroSharesPolicy,
    ) -> Result<CapTableReport, CapTableError> {
        let totals = self
            .ledgers
            .iter()
            .map(|ledger| ledger.totals_as_of(cutoff))
            .collect::<Result<Vec<InvestorTotals>, _>>()?;

        let overflow = |field: RecordField| CapTableError::TotalOverflow {
            field,
            investor: None,
            date: cutoff,
        };
        let total_shares = totals
            .iter()
            .try_fold(0i64, |sum, t| sum.checked_add(t.shares))
            .ok_or_else(|| overflow(RecordField::Shares))?;
        let cash_raised = totals
            .iter()
            .try_fold(Decimal::ZERO, |sum, t| sum.checked_add(t.cash_paid))
            .ok_or_else(|| overflow(RecordField::Price))?;

        if total_shares == 0 && policy == ZeroSharesPolicy::Fail {
            return Err(CapTableError::DegenerateReport { date: cutoff });
        }

        let ownership = totals
            .into_iter()
            .map(|t| OwnershipEntry {
                ownership_percent: ownership_percent(t.shares, total_shares),
                investor: t.investor,
                shares: t.shares,
                cash_paid: t.cash_paid,
            })
            .collect();

        Ok(CapTableReport {
            date: cutoff,
            cash_raised,
            total_shares,
            ownership,
        })
    }
}

/// `shares / total * 100`, or zero when nothing is outstanding
fn ownership_percent(shares: i64, total_shares: i64) -> Decimal {
    if total_shares == 0 {
        return Decimal::ZERO;
    }
    Decimal::from(shares) / Decimal::from(total_shares) * Decimal::ONE_HUNDRED
}
