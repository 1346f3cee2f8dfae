//! Property-based test generators using proptest.
//!
//! Provides strategies for generating ledgers whose text fields survive the
//! CSV format (no `,`, no line breaks).

use proptest::prelude::*;
use tally_codec::{Ledger, LedgerEntry};

/// A single movement as passed to [`Ledger::record_movement`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Movement {
    /// Date text.
    pub date: String,
    /// Account the amount is credited from.
    pub from_account: String,
    /// Account the amount is debited to.
    pub to_account: String,
    /// Amount moved.
    pub amount: u64,
    /// Description text.
    pub description: String,
}

impl Movement {
    /// Records this movement on `ledger`.
    pub fn apply(&self, ledger: &mut Ledger) {
        ledger.record_movement(
            &self.date,
            &self.from_account,
            &self.to_account,
            self.amount,
            &self.description,
        );
    }
}

/// Strategy for text that is safe to store in a CSV field.
pub fn csv_text_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Za-z0-9 ._:/()'&-]{0,24}").expect("Invalid regex")
}

/// Strategy for date-like text.
pub fn date_strategy() -> impl Strategy<Value = String> {
    (2000u32..2100, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| format!("{y:04}-{m:02}-{d:02}"))
}

/// Strategy for movements with CSV-safe text.
pub fn movement_strategy() -> impl Strategy<Value = Movement> {
    (
        date_strategy(),
        csv_text_strategy(),
        csv_text_strategy(),
        any::<u64>(),
        csv_text_strategy(),
    )
        .prop_map(|(date, from_account, to_account, amount, description)| Movement {
            date,
            from_account,
            to_account,
            amount,
            description,
        })
}

/// Strategy for ledgers built from up to `max_movements` movements.
pub fn ledger_strategy(max_movements: usize) -> impl Strategy<Value = Ledger> {
    prop::collection::vec(movement_strategy(), 0..=max_movements).prop_map(|movements| {
        let mut ledger = Ledger::new();
        for movement in &movements {
            movement.apply(&mut ledger);
        }
        ledger
    })
}

/// Strategy for arbitrary entries, not necessarily balanced.
pub fn entry_strategy() -> impl Strategy<Value = LedgerEntry> {
    (
        csv_text_strategy(),
        csv_text_strategy(),
        csv_text_strategy(),
        any::<u64>(),
        any::<u64>(),
    )
        .prop_map(|(date, description, account, debit, credit)| LedgerEntry {
            date,
            description,
            account,
            debit,
            credit,
        })
}
