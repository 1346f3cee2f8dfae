//! Record command implementation.

use super::load_ledger;
use crate::error::CliError;
use std::fs;
use std::path::Path;
use tally_codec::{to_csv, Ledger};
use tracing::info;

/// Runs the record command.
///
/// Appends one movement to the ledger at `path`, creating the file if it
/// does not exist, and rewrites the file in canonical form.
pub fn run(
    path: &Path,
    date: &str,
    from: &str,
    to: &str,
    amount: u64,
    description: &str,
) -> Result<Ledger, Box<dyn std::error::Error>> {
    for (name, value) in [
        ("date", date),
        ("from", from),
        ("to", to),
        ("description", description),
    ] {
        check_field(name, value)?;
    }

    let mut ledger = if path.exists() {
        load_ledger(path)?
    } else {
        info!("Creating ledger {:?}", path);
        Ledger::new()
    };
    ledger.record_movement(date, from, to, amount, description);
    fs::write(path, to_csv(&ledger))?;

    println!(
        "Recorded {amount} from {from:?} to {to:?} ({} entries)",
        ledger.len()
    );
    Ok(ledger)
}

fn check_field(name: &'static str, value: &str) -> Result<(), CliError> {
    if value.contains([',', '\n', '\r']) {
        return Err(CliError::UnsafeField {
            name,
            value: value.to_string(),
        });
    }
    Ok(())
}
