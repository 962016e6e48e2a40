//! Captable - capitalization table reports
//!
//! This library groups a ledger of share purchases by investor and reports
//! cash raised, shares issued and each investor's ownership as of a date.

pub mod cli;
pub mod config;
pub mod error;
pub mod importers;
pub mod ledger;
pub mod reports;
pub mod utils;

pub use error::{CapTableError, FormatError, RecordField};
pub use ledger::{InvestorLedger, InvestorTotals, LedgerRecord, Transaction};
pub use reports::{CapTable, CapTableReport, OwnershipEntry, ZeroSharesPolicy};
