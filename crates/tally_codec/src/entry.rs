//! Ledger entry type.

use serde::{Deserialize, Serialize};

/// One side of a recorded movement.
///
/// String fields are stored verbatim. The CSV format does not escape
/// separators, so `description` and `account` must not contain `,` or `\n`
/// if the entry is expected to survive an encode/decode round trip.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LedgerEntry {
    /// Date as supplied by the caller; never parsed.
    pub date: String,
    /// Free-text description of the movement.
    pub description: String,
    /// Account this side applies to.
    pub account: String,
    /// Debited amount.
    pub debit: u64,
    /// Credited amount.
    pub credit: u64,
}

impl LedgerEntry {
    /// Creates an entry from its fields.
    pub fn new(
        date: impl Into<String>,
        description: impl Into<String>,
        account: impl Into<String>,
        debit: u64,
        credit: u64,
    ) -> Self {
        Self {
            date: date.into(),
            description: description.into(),
            account: account.into(),
            debit,
            credit,
        }
    }

    /// Returns true if this entry is the debit side of a movement.
    #[must_use]
    pub fn is_debit(&self) -> bool {
        self.credit == 0 && self.debit > 0
    }

    /// Returns true if this entry is the credit side of a movement.
    #[must_use]
    pub fn is_credit(&self) -> bool {
        self.debit == 0 && self.credit > 0
    }
}
