use chrono::{Datelike, NaiveDate};
use clap::Parser;
use std::path::PathBuf;

pub mod formatters;
pub mod runner;

#[derive(Parser, Debug)]
#[command(name = "captable")]
#[command(version, about = "Capitalization table report from a share purchase ledger")]
#[command(
    long_about = "Read a ledger of share purchases (date, shares, cash, name; first row is a header) and write a JSON report of cash raised, shares issued and each investor's ownership as of a cutoff date."
)]
pub struct Cli {
    /// Path to the ledger CSV file
    pub path: PathBuf,

    /// Exclude transactions after this date (YYYY-MM-DD, YYYY-MM, or YYYY). Defaults to today
    #[arg(short, long, value_name = "YYYY-MM-DD", value_parser = parse_cutoff_date)]
    pub date: Option<NaiveDate>,

    /// Write the report to this file instead of the configured one
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Print the JSON report to stdout instead of writing a file
    #[arg(long, conflicts_with_all = ["output", "table"])]
    pub stdout: bool,

    /// Also print the report as a table
    #[arg(long)]
    pub table: bool,

    /// Pretty-print the JSON report
    #[arg(long)]
    pub pretty: bool,

    /// Disable colorized/ANSI output
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// Path to a TOML config file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// Parse a cutoff date given on the command line.
///
/// Besides a full `YYYY-MM-DD`, accepts `YYYY-MM` (last day of that month)
/// and `YYYY` (December 31).
pub fn parse_cutoff_date(s: &str) -> Result<NaiveDate, String> {
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(date);
    }

    if let Ok(first) = NaiveDate::parse_from_str(&format!("{}-01", s), "%Y-%m-%d") {
        let next_month = if first.month() == 12 {
            NaiveDate::from_ymd_opt(first.year() + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(first.year(), first.month() + 1, 1)
        };
        if let Some(last_day) = next_month.and_then(|nm| nm.pred_opt()) {
            return Ok(last_day);
        }
    }

    if let Ok(year) = s.parse::<i32>() {
        if let Some(date) = NaiveDate::from_ymd_opt(year, 12, 31).filter(|_| s.len() == 4) {
            return Ok(date);
        }
    }

    Err(format!("invalid date '{}'. Use YYYY-MM-DD, YYYY-MM, or YYYY", s))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_cutoff_full_date() {
        assert_eq!(parse_cutoff_date("2020-02-15").unwrap(), date(2020, 2, 15));
    }

    #[test]
    fn test_parse_cutoff_month_is_last_day() {
        assert_eq!(parse_cutoff_date("2020-02").unwrap(), date(2020, 2, 29));
        assert_eq!(parse_cutoff_date("2021-12").unwrap(), date(2021, 12, 31));
    }

    #[test]
    fn test_parse_cutoff_year_is_december_31() {
        assert_eq!(parse_cutoff_date("2019").unwrap(), date(2019, 12, 31));
    }

    #[test]
    fn test_parse_cutoff_rejects_garbage() {
        assert!(parse_cutoff_date("2020-13-40").is_err());
        assert!(parse_cutoff_date("15/02/2020").is_err());
        assert!(parse_cutoff_date("42").is_err());
        assert!(parse_cutoff_date("yesterday").is_err());
    }

    #[test]
    fn test_cli_parses_path_and_date() {
        let cli = Cli::try_parse_from(["captable", "ledger.csv", "-d", "2020-02-15"]).unwrap();
        assert_eq!(cli.path, PathBuf::from("ledger.csv"));
        assert_eq!(cli.date, Some(date(2020, 2, 15)));
        assert!(cli.output.is_none());

        let cli = Cli::try_parse_from(["captable", "ledger.csv", "--date", "2020"]).unwrap();
        assert_eq!(cli.date, Some(date(2020, 12, 31)));
    }

    #[test]
    fn test_cli_date_is_optional() {
        let cli = Cli::try_parse_from(["captable", "ledger.csv"]).unwrap();
        assert!(cli.date.is_none());
    }

    #[test]
    fn test_cli_rejects_stdout_with_output() {
        assert!(Cli::try_parse_from(["captable", "l.csv", "--stdout", "-o", "x.json"]).is_err());
    }
}
