//! Show command implementation.

use super::load_ledger;
use crate::error::CliError;
use serde::Serialize;
use std::path::Path;
use tally_codec::{to_csv, Ledger, LedgerEntry};

/// JSON view of a ledger.
#[derive(Debug, Serialize)]
pub struct ShowResult<'a> {
    /// Ledger path.
    pub path: String,
    /// All entries in order.
    pub entries: &'a [LedgerEntry],
    /// Sum of debits.
    pub total_debit: u128,
    /// Sum of credits.
    pub total_credit: u128,
    /// Whether debits equal credits.
    pub balanced: bool,
}

/// Runs the show command.
pub fn run(path: &Path, format: &str) -> Result<(), Box<dyn std::error::Error>> {
    let ledger = load_ledger(path)?;
    print!("{}", render(path, &ledger, format)?);
    Ok(())
}

/// Renders a ledger in the requested format.
pub fn render(
    path: &Path,
    ledger: &Ledger,
    format: &str,
) -> Result<String, Box<dyn std::error::Error>> {
    match format {
        "text" => Ok(ledger.to_string()),
        "csv" => Ok(String::from_utf8(to_csv(ledger))?),
        "json" => {
            let (total_debit, total_credit) = ledger.totals();
            let result = ShowResult {
                path: path.display().to_string(),
                entries: ledger.entries(),
                total_debit,
                total_credit,
                balanced: total_debit == total_credit,
            };
            Ok(serde_json::to_string_pretty(&result)? + "\n")
        }
        other => Err(CliError::UnknownFormat(other.to_string()).into()),
    }
}
