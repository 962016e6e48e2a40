// Reports module - cap table aggregation and ownership report

pub mod cap_table;

pub use cap_table::{
    CapTable, CapTableReport, OwnershipEntry, ZeroSharesPolicy, REPORT_DATE_FORMAT,
};
