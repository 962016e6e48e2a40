use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::fs;
use std::path::Path;
use tracing::info;

use crate::cli::{formatters, Cli};
use crate::config::Config;
use crate::importers;
use crate::reports::CapTable;

/// Run one report: read the ledger, aggregate, write the JSON report.
///
/// Nothing is written unless the whole ledger parses and the report can
/// be generated.
pub fn run(cli: &Cli) -> Result<()> {
    if cli.no_color {
        colored::control::set_override(false);
    }

    let config = Config::load(cli.config.as_deref())?;
    let cutoff = cli.date.unwrap_or_else(today);

    let records = importers::read_ledger_csv(&cli.path, config.delimiter_byte()?)?;
    let table = CapTable::build(records)
        .with_context(|| format!("Failed to load ledger {}", cli.path.display()))?;
    info!(
        "Loaded {} transactions for {} investors",
        table.transaction_count(),
        table.investor_count()
    );

    let report = table
        .generate_report_with(cutoff, config.zero_shares)
        .context("Failed to generate cap table report")?;

    let json = formatters::format_report_json(&report, cli.pretty || config.pretty)
        .context("Failed to serialize report")?;

    if cli.stdout {
        println!("{}", json);
        return Ok(());
    }

    let output = cli.output.as_deref().unwrap_or(config.output.as_path());
    write_report(output, &json)?;
    info!("Wrote report as of {} to {:?}", cutoff, output);

    if cli.table {
        print!("{}", formatters::format_report_table(&report));
    }

    Ok(())
}

fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

fn write_report(path: &Path, json: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    fs::write(path, json).with_context(|| format!("Failed to write report to {}", path.display()))
}
