//! Output formatting module for CLI display
//!
//! This module handles all terminal output formatting, separating
//! the concerns of report calculation from presentation.

use colored::Colorize;
use tabled::{
    settings::{object::Columns, Alignment, Style},
    Table, Tabled,
};

use crate::reports::{CapTableReport, REPORT_DATE_FORMAT};
use crate::utils::{format_currency, format_percent, format_shares};

/// Serialize a report for the output file
pub fn format_report_json(report: &CapTableReport, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        report.to_json_pretty()
    } else {
        report.to_json()
    }
}

/// Format a report for terminal table output
pub fn format_report_table(report: &CapTableReport) -> String {
    let mut output = format!(
        "\n{} Cap table as of {}\n\n",
        "📊".cyan().bold(),
        report.date.format(REPORT_DATE_FORMAT)
    );

    #[derive(Tabled)]
    struct OwnershipRow {
        #[tabled(rename = "Investor")]
        investor: String,
        #[tabled(rename = "Shares")]
        shares: String,
        #[tabled(rename = "Cash Paid")]
        cash_paid: String,
        #[tabled(rename = "Ownership")]
        ownership: String,
    }

    let rows: Vec<OwnershipRow> = report
        .ownership
        .iter()
        .map(|entry| OwnershipRow {
            investor: entry.investor.clone(),
            shares: format_shares(entry.shares),
            cash_paid: format_currency(entry.cash_paid),
            ownership: format_percent(entry.ownership_percent),
        })
        .collect();

    let mut table = Table::new(&rows);
    table.with(Style::modern());
    // Right-align all columns except Investor (0)
    table.modify(Columns::new(1..), Alignment::right());

    output.push_str(&table.to_string());

    output.push_str(&format!("\n\n{} Summary", "━".repeat(60).bright_black()));
    output.push_str(&format!(
        "\n{:<20} {}",
        "Cash Raised:".bold(),
        format_currency(report.cash_raised)
    ));
    output.push_str(&format!(
        "\n{:<20} {}",
        "Total Shares:".bold(),
        format_shares(report.total_shares)
    ));
    output.push_str(&format!(
        "\n{:<20} {}\n",
        "Investors:".bold(),
        report.ownership.len()
    ));

    if report.total_shares == 0 {
        output.push_str(&format!(
            "{} No shares outstanding; ownership reported as 0%\n",
            "ℹ".blue().bold()
        ));
    } else if report.ownership.iter().any(|e| e.shares < 0) {
        output.push_str(&format!(
            "{} Some investors hold a negative share balance\n",
            "⚠".yellow().bold()
        ));
    }

    output
}
