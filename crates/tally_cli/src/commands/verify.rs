//! Verify command implementation.

use super::load_ledger;
use crate::error::CliError;
use std::path::Path;

/// Verification result.
#[derive(Debug, PartialEq, Eq)]
pub struct VerifyResult {
    /// Number of entries decoded.
    pub entries: usize,
    /// Sum of debits.
    pub total_debit: u128,
    /// Sum of credits.
    pub total_credit: u128,
}

impl VerifyResult {
    fn is_ok(&self) -> bool {
        self.total_debit == self.total_credit
    }
}

/// Runs the verify command.
pub fn run(path: &Path) -> Result<VerifyResult, Box<dyn std::error::Error>> {
    println!("Verifying ledger at {:?}", path);

    let ledger = load_ledger(path)?;
    let (total_debit, total_credit) = ledger.totals();
    let result = VerifyResult {
        entries: ledger.len(),
        total_debit,
        total_credit,
    };

    println!("  Entries: {}", result.entries);
    println!("  Debits:  {}", result.total_debit);
    println!("  Credits: {}", result.total_credit);

    if result.is_ok() {
        println!("✓ Ledger verification passed");
        Ok(result)
    } else {
        println!("✗ Ledger verification failed");
        Err(CliError::Unbalanced {
            path: path.to_path_buf(),
            debit: total_debit,
            credit: total_credit,
        }
        .into())
    }
}
