// Ledger module - purchase transactions and per-investor history

pub mod investor;
pub mod transaction;

pub use investor::{InvestorLedger, InvestorTotals};
pub use transaction::{LedgerRecord, Transaction, DATE_FORMAT};
