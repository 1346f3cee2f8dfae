//! Canonical CSV encoder.

use crate::entry::LedgerEntry;
use crate::ledger::Ledger;

/// Header line written before any entry.
pub const CSV_HEADER: &str = "Date,Description,Account,Debit,Credit";

/// Encode a ledger to canonical CSV bytes.
///
/// Output is the header followed by one line per entry, every line
/// terminated by `\n`. Fields are written verbatim: commas or newlines inside
/// `description` or `account` are not escaped and will not survive decoding.
pub fn to_csv(ledger: &Ledger) -> Vec<u8> {
    // Rough guess: dates and numbers are short, descriptions are not.
    let mut encoder = CsvEncoder::with_capacity(CSV_HEADER.len() + 1 + ledger.len() * 48);
    for entry in ledger {
        encoder.write_entry(entry);
    }
    encoder.into_bytes()
}

/// An incremental CSV encoder.
///
/// The header is written on construction.
pub struct CsvEncoder {
    buffer: Vec<u8>,
}

impl CsvEncoder {
    /// Create a new encoder.
    pub fn new() -> Self {
        Self::with_capacity(CSV_HEADER.len() + 1)
    }

    /// Create a new encoder with the specified capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut buffer = Vec::with_capacity(capacity.max(CSV_HEADER.len() + 1));
        buffer.extend_from_slice(CSV_HEADER.as_bytes());
        buffer.push(b'\n');
        Self { buffer }
    }

    /// Append one entry line.
    pub fn write_entry(&mut self, entry: &LedgerEntry) {
        for text in [&entry.date, &entry.description, &entry.account] {
            self.buffer.extend_from_slice(text.as_bytes());
            self.buffer.push(b',');
        }
        self.buffer.extend_from_slice(entry.debit.to_string().as_bytes());
        self.buffer.push(b',');
        self.buffer.extend_from_slice(entry.credit.to_string().as_bytes());
        self.buffer.push(b'\n');
    }

    /// Consume this encoder and return the encoded bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.buffer
    }

    /// Get a reference to the encoded bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }
}

impl Default for CsvEncoder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_ledger_is_header_only() {
        assert_eq!(to_csv(&Ledger::new()), b"Date,Description,Account,Debit,Credit\n");
    }

    #[test]
    fn single_movement() {
        let mut ledger = Ledger::new();
        ledger.record_movement(
            "2024-08-30",
            "Accounts Receivable",
            "Cash",
            1500,
            "Payment received",
        );

        let expected = "Date,Description,Account,Debit,Credit\n\
                        2024-08-30,Payment received,Cash,1500,0\n\
                        2024-08-30,Payment received,Accounts Receivable,0,1500\n";
        assert_eq!(String::from_utf8(to_csv(&ledger)).unwrap(), expected);
    }

    #[test]
    fn numbers_are_plain_decimal() {
        let entry = LedgerEntry::new("d", "x", "a", u64::MAX, 1_000_000);
        let ledger = Ledger::from_entries(vec![entry]);
        let text = String::from_utf8(to_csv(&ledger)).unwrap();
        assert!(text.ends_with(",18446744073709551615,1000000\n"));
    }

    #[test]
    fn separators_are_not_escaped() {
        let ledger = Ledger::from_entries(vec![LedgerEntry::new("d", "a,b", "acct", 1, 0)]);
        let text = String::from_utf8(to_csv(&ledger)).unwrap();
        assert!(text.ends_with("d,a,b,acct,1,0\n"));
    }

    #[test]
    fn deterministic_encoding() {
        let mut ledger = Ledger::new();
        ledger.record_movement("2024-09-01", "Cash", "Expenses", 200, "Office Supplies");
        let copy = ledger.clone();
        assert_eq!(to_csv(&ledger), to_csv(&copy));
    }

    #[test]
    fn incremental_matches_batch() {
        let mut ledger = Ledger::new();
        ledger.record_movement(
            "2024-09-02",
            "Revenue",
            "Accounts Receivable",
            1200,
            "Client Invoice",
        );

        let mut encoder = CsvEncoder::new();
        for entry in ledger.entries() {
            encoder.write_entry(entry);
        }
        assert_eq!(encoder.as_bytes(), to_csv(&ledger).as_slice());
    }
}
