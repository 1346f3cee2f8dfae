//! Double-entry ledger document.

use crate::entry::LedgerEntry;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An ordered collection of double-entry records.
///
/// Entries are only ever appended, two at a time, by
/// [`record_movement`](Ledger::record_movement). Order is significant and is
/// preserved by the CSV codec.
///
/// # Example
///
/// ```
/// use tally_codec::Ledger;
///
/// let mut ledger = Ledger::new();
/// ledger.record_movement("2024-08-30", "Accounts Receivable", "Cash", 1500, "Payment received");
///
/// assert_eq!(ledger.len(), 2);
/// assert!(ledger.is_balanced());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ledger {
    entries: Vec<LedgerEntry>,
}

impl Ledger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a ledger from previously recorded entries.
    #[must_use]
    pub fn from_entries(entries: Vec<LedgerEntry>) -> Self {
        Self { entries }
    }

    /// Records a movement of `amount` from `from_account` to `to_account`.
    ///
    /// Appends the debit side (on `to_account`) followed by the credit side
    /// (on `from_account`).
    pub fn record_movement(
        &mut self,
        date: &str,
        from_account: &str,
        to_account: &str,
        amount: u64,
        description: &str,
    ) {
        self.entries.reserve(2);
        self.entries
            .push(LedgerEntry::new(date, description, to_account, amount, 0));
        self.entries
            .push(LedgerEntry::new(date, description, from_account, 0, amount));
    }

    /// Returns all entries in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[LedgerEntry] {
        &self.entries
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no entries have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over entries in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, LedgerEntry> {
        self.entries.iter()
    }

    /// Returns the sums of all debits and all credits.
    #[must_use]
    pub fn totals(&self) -> (u128, u128) {
        self.entries.iter().fold((0, 0), |(debit, credit), entry| {
            (
                debit + u128::from(entry.debit),
                credit + u128::from(entry.credit),
            )
        })
    }

    /// Returns true if total debits equal total credits.
    #[must_use]
    pub fn is_balanced(&self) -> bool {
        let (debit, credit) = self.totals();
        debit == credit
    }

    /// Consumes the ledger and returns its entries.
    #[must_use]
    pub fn into_entries(self) -> Vec<LedgerEntry> {
        self.entries
    }
}

impl<'a> IntoIterator for &'a Ledger {
    type Item = &'a LedgerEntry;
    type IntoIter = std::slice::Iter<'a, LedgerEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Renders the ledger as a fixed-width table.
impl fmt::Display for Ledger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:<15} {:<30} {:<20} {:>10} {:>10}",
            "Date", "Description", "Account", "Debit", "Credit"
        )?;
        writeln!(f, "{:-<90}", "")?;
        for entry in &self.entries {
            writeln!(
                f,
                "{:<15} {:<30} {:<20} {:>10} {:>10}",
                entry.date, entry.description, entry.account, entry.debit, entry.credit
            )?;
        }
        Ok(())
    }
}
