//! # Tally Codec
//!
//! Double-entry ledger documents and the transcoders that move them in and
//! out of opaque document storage.
//!
//! The ledger is stored as CSV:
//!
//! ```text
//! Date,Description,Account,Debit,Credit
//! 2024-08-30,Payment received,Cash,1500,0
//! 2024-08-30,Payment received,Accounts Receivable,0,1500
//! ```
//!
//! ## Format Rules
//!
//! - Every line, header included, ends with `\n`
//! - Amounts are unsigned decimal integers
//! - The header is never validated on read
//! - Fields are not quoted or escaped, so text containing `,` or `\n`
//!   does not round-trip
//!
//! ## Usage
//!
//! ```
//! use tally_codec::{from_csv, to_csv, Ledger};
//!
//! let mut ledger = Ledger::new();
//! ledger.record_movement("2024-08-31", "Cash", "Expenses", 1000, "Rent payment");
//!
//! let bytes = to_csv(&ledger);
//! let decoded = from_csv(&bytes).unwrap();
//! assert_eq!(ledger, decoded);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod decoder;
mod encoder;
mod entry;
mod error;
mod format;
mod ledger;
mod transcoder;

pub use decoder::{from_csv, CsvDecoder};
pub use encoder::{to_csv, CsvEncoder, CSV_HEADER};
pub use entry::LedgerEntry;
pub use error::{CodecError, CodecResult};
pub use format::FormatTag;
pub use ledger::Ledger;
pub use transcoder::{CsvTranscoder, EncodedValue, JsonTranscoder, RawBinaryTranscoder, Transcoder};

/// Trait for types that can be encoded to their canonical bytes.
pub trait Encode {
    /// Encode this value to canonical bytes.
    fn encode(&self) -> CodecResult<Vec<u8>>;
}

/// Trait for types that can be decoded from their canonical bytes.
pub trait Decode: Sized {
    /// Decode this value from bytes.
    fn decode(bytes: &[u8]) -> CodecResult<Self>;
}

impl Encode for Ledger {
    fn encode(&self) -> CodecResult<Vec<u8>> {
        Ok(to_csv(self))
    }
}

impl Decode for Ledger {
    fn decode(bytes: &[u8]) -> CodecResult<Self> {
        from_csv(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ledger_from_example() -> Ledger {
        let mut ledger = Ledger::new();
        ledger.record_movement(
            "2024-08-30",
            "Accounts Receivable",
            "Cash",
            1500,
            "Payment received",
        );
        ledger.record_movement("2024-08-31", "Cash", "Expenses", 1000, "Rent payment");
        ledger.record_movement("2024-09-01", "Cash", "Expenses", 200, "Office Supplies");
        ledger.record_movement(
            "2024-09-02",
            "Revenue",
            "Accounts Receivable",
            1200,
            "Client Invoice",
        );
        ledger
    }

    #[test]
    fn roundtrip_example_ledger() {
        let ledger = ledger_from_example();
        let bytes = ledger.encode().unwrap();
        let decoded = Ledger::decode(&bytes).unwrap();
        assert_eq!(ledger, decoded);
    }

    #[test]
    fn roundtrip_empty_ledger() {
        let ledger = Ledger::new();
        assert_eq!(Ledger::decode(&ledger.encode().unwrap()).unwrap(), ledger);
    }

    #[test]
    fn roundtrip_empty_strings() {
        let mut ledger = Ledger::new();
        ledger.record_movement("", "", "", 0, "");
        assert_eq!(Ledger::decode(&ledger.encode().unwrap()).unwrap(), ledger);
    }

    #[test]
    fn example_ledger_csv() {
        let text = String::from_utf8(to_csv(&ledger_from_example())).unwrap();
        let expected = "\
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
        assert_eq!(text, expected);
    }

    #[test]
    fn embedded_separator_does_not_roundtrip() {
        let mut ledger = Ledger::new();
        ledger.record_movement("d", "a", "b", 1, "rent, march");
        // Fields shift right: the account name lands in the debit column.
        assert!(matches!(
            from_csv(&to_csv(&ledger)),
            Err(CodecError::ParseFailure { field: "debit", value, .. }) if value == "b"
        ));
    }
}
