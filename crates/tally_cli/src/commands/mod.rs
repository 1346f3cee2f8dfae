//! CLI command implementations.

pub mod demo;
pub mod record;
pub mod show;
pub mod verify;

use std::fs;
use std::path::Path;
use tally_codec::{from_csv, Ledger};

/// Reads and decodes a CSV ledger file.
pub fn load_ledger(path: &Path) -> Result<Ledger, Box<dyn std::error::Error>> {
    let bytes = fs::read(path).map_err(|e| format!("cannot read {}: {e}", path.display()))?;
    Ok(from_csv(&bytes)?)
}
