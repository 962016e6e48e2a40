use anyhow::{bail, Context, Result};
use csv::ReaderBuilder;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

use crate::ledger::LedgerRecord;

/// Fields per ledger row: date, shares, cash, name
const FIELDS_PER_RECORD: usize = 4;

/// Parse a ledger CSV file into raw records
///
/// The first row is a header and is skipped whatever it contains.
pub fn read_ledger_csv<P: AsRef<Path>>(file_path: P, delimiter: u8) -> Result<Vec<LedgerRecord>> {
    let path = file_path.as_ref();
    info!("Reading ledger CSV file: {:?}", path);

    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    let records = read_ledger(file, delimiter)
        .with_context(|| format!("Failed to read ledger {}", path.display()))?;

    info!("Read {} records from {:?}", records.len(), path);
    Ok(records)
}

/// Parse ledger rows from any reader
///
/// Fields are passed through untouched. Numeric fields are trimmed when
/// parsed, while investor names must match exactly.
pub fn read_ledger<R: Read>(reader: R, delimiter: u8) -> Result<Vec<LedgerRecord>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .delimiter(delimiter)
        .flexible(true) // Field count is checked per row for a clearer error
        .from_reader(reader);

    let headers = reader
        .headers()
        .context("Failed to read CSV header")?
        .clone();
    debug!("Skipping header row: {:?}", headers);

    let mut records = Vec::new();

    for result in reader.records() {
        let row = result.context("Failed to read CSV record")?;
        let line = row.position().map(|p| p.line()).unwrap_or_default();

        if row.len() != FIELDS_PER_RECORD {
            bail!(
                "line {}: expected {} fields (date, shares, cash, name), found {}",
                line,
                FIELDS_PER_RECORD,
                row.len()
            );
        }

        let record = LedgerRecord::new(&row[0], &row[1], &row[2], &row[3]);
        debug!("line {}: {:?}", line, record);
        records.push(record);
    }

    Ok(records)
}
