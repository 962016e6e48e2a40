// Import module - ledger CSV reader

pub mod ledger_csv;

pub use ledger_csv::{read_ledger, read_ledger_csv};
