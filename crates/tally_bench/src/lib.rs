//! Benchmark utilities.

use tally_codec::Ledger;

const ACCOUNTS: [&str; 5] = [
    "Cash",
    "Expenses",
    "Revenue",
    "Accounts Receivable",
    "Accounts Payable",
];

/// Builds a ledger of `movements` deterministic movements.
pub fn synthetic_ledger(movements: usize) -> Ledger {
    let mut ledger = Ledger::new();
    for i in 0..movements {
        let from = ACCOUNTS[i % ACCOUNTS.len()];
        let to = ACCOUNTS[(i + 1) % ACCOUNTS.len()];
        let date = format!("2024-{:02}-{:02}", i % 12 + 1, i % 28 + 1);
        let description = format!("Movement {i}");
        ledger.record_movement(&date, from, to, (i as u64 + 1) * 100, &description);
    }
    ledger
}
