//! Test fixtures and store helpers.
//!
//! Provides the sample ledger used throughout the docs, a store seeded with
//! it, and temporary ledger files.

use std::fs;
use std::path::{Path, PathBuf};
use tally_codec::{to_csv, CsvTranscoder, Ledger};
use tally_store::{Collection, InMemoryStore, Keyspace};
use tempfile::TempDir;

/// Document id used for the sample ledger.
pub const LEDGER_ID: &str = "the_ledger";

/// CSV form of [`example_ledger`].
pub const EXAMPLE_CSV: &str = "\
Date,Description,Account,Debit,Credit
2024-08-30,Payment received,Cash,1500,0
2024-08-30,Payment received,Accounts Receivable,0,1500
2024-08-31,Rent payment,Expenses,1000,0
2024-08-31,Rent payment,Cash,0,1000
2024-09-01,Office Supplies,Expenses,200,0
2024-09-01,Office Supplies,Cash,0,200
2024-09-02,Client Invoice,Accounts Receivable,1200,0
2024-09-02,Client Invoice,Revenue,0,1200
";

/// A ledger with a single received payment.
pub fn initial_ledger() -> Ledger {
    let mut ledger = Ledger::new();
    ledger.record_movement("2024-08-30", "Accounts Receivable", "Cash", 1500, "Payment received");
    ledger
}

/// A ledger with four movements: payment, rent, supplies and an invoice.
pub fn example_ledger() -> Ledger {
    let mut ledger = initial_ledger();
    ledger.record_movement("2024-08-31", "Cash", "Expenses", 1000, "Rent payment");
    ledger.record_movement("2024-09-01", "Cash", "Expenses", 200, "Office Supplies");
    ledger.record_movement("2024-09-02", "Revenue", "Accounts Receivable", 1200, "Client Invoice");
    ledger
}

/// A store holding [`initial_ledger`] under [`LEDGER_ID`] in the default keyspace.
pub fn seeded_store() -> InMemoryStore {
    let store = InMemoryStore::new();
    Collection::new(&store, Keyspace::default())
        .upsert::<CsvTranscoder>(LEDGER_ID, &initial_ledger())
        .expect("Failed to seed store");
    store
}

/// A ledger CSV file in a temporary directory, removed on drop.
pub struct TempLedgerFile {
    path: PathBuf,
    _temp_dir: TempDir,
}

impl TempLedgerFile {
    /// Creates a path for a ledger file that does not exist yet.
    pub fn missing() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        Self {
            path: temp_dir.path().join("ledger.csv"),
            _temp_dir: temp_dir,
        }
    }

    /// Creates a file holding `ledger` as CSV.
    pub fn with_ledger(ledger: &Ledger) -> Self {
        Self::with_bytes(&to_csv(ledger))
    }

    /// Creates a file holding raw bytes.
    pub fn with_bytes(bytes: &[u8]) -> Self {
        let file = Self::missing();
        fs::write(&file.path, bytes).expect("Failed to write ledger file");
        file
    }

    /// Returns the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the current file content.
    pub fn read(&self) -> Vec<u8> {
        fs::read(&self.path).expect("Failed to read ledger file")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tally_codec::from_csv;

    #[test]
    fn example_csv_matches_example_ledger() {
        assert_eq!(to_csv(&example_ledger()), EXAMPLE_CSV.as_bytes());
        assert_eq!(from_csv(EXAMPLE_CSV.as_bytes()).unwrap(), example_ledger());
    }

    #[test]
    fn temp_file_roundtrip() {
        let file = TempLedgerFile::with_ledger(&example_ledger());
        assert_eq!(file.read(), EXAMPLE_CSV.as_bytes());

        let missing = TempLedgerFile::missing();
        assert!(!missing.path().exists());
    }

    #[test]
    fn seeded_store_holds_initial_ledger() {
        let store = seeded_store();
        let ledger = Collection::new(&store, Keyspace::default())
            .get_as::<CsvTranscoder>(LEDGER_ID)
            .unwrap();
        assert_eq!(ledger, initial_ledger());
    }
}
