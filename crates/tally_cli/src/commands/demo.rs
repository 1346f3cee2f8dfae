//! Demo command implementation.
//!
//! Walks through storing a CSV ledger as a binary document and updating it
//! in transactions, then through a JSON account transfer.

use crate::config::DemoConfig;
use serde::{Deserialize, Serialize};
use std::fmt;
use tally_codec::{CsvTranscoder, JsonTranscoder, Ledger};
use tally_store::{
    Collection, DocumentStore, InMemoryStore, StoreError, StoreResult, TransactionConfig,
    Transactions,
};
use tracing::info;

/// Document id of the demo ledger.
pub const LEDGER_ID: &str = "the_ledger";

/// Amount moved from Alice to Bob.
pub const TRANSFER_AMOUNT: i64 = 1_234;

/// A bank account stored as JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankAccount {
    /// Holder name.
    pub name: String,
    /// Balance in USD.
    pub balance: i64,
}

impl fmt::Display for BankAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "bank_account(name: \"{}\", balance: {} USD)",
            self.name, self.balance
        )
    }
}

type AccountTranscoder = JsonTranscoder<BankAccount>;

/// Runs the demo command.
pub fn run(config: &DemoConfig) -> Result<(), Box<dyn std::error::Error>> {
    print!("{}", config.describe());
    println!();

    let store = InMemoryStore::new();
    let collection = Collection::new(&store, config.keyspace.clone());
    let transactions = Transactions::new(
        &store,
        TransactionConfig::new().max_attempts(config.max_attempts),
    );

    let ledger = ledger_walkthrough(&collection, &transactions)?;
    println!("The final result:\n{ledger}");

    let (alice, bob) = transfer_walkthrough(&collection, &transactions)?;
    println!("Alice: {alice}");
    println!("Bob: {bob}");

    Ok(())
}

/// Stores the initial ledger, extends it in two transactions and reads it back.
pub fn ledger_walkthrough<S: DocumentStore + ?Sized>(
    collection: &Collection<'_, S>,
    transactions: &Transactions<'_, S>,
) -> StoreResult<Ledger> {
    let mut initial = Ledger::new();
    initial.record_movement("2024-08-30", "Accounts Receivable", "Cash", 1500, "Payment received");
    let cas = collection.upsert::<CsvTranscoder>(LEDGER_ID, &initial)?;
    info!(key = %collection.key(LEDGER_ID), %cas, "stored initial ledger");

    for (amount, description) in [(1000, "Rent payment"), (200, "Office Supplies")] {
        let result = transactions.run(|ctx| {
            let doc = ctx.get(collection, LEDGER_ID)?;
            let mut ledger = doc.content_as::<CsvTranscoder>()?;
            ledger.record_movement("2024-09-01", "Cash", "Expenses", amount, description);
            ctx.replace_as::<CsvTranscoder>(&doc, &ledger)?;
            Ok(())
        })?;
        println!(
            "transaction {} completed successfully",
            result.transaction_id
        );
    }

    collection.get_as::<CsvTranscoder>(LEDGER_ID)
}

/// Opens two accounts and moves [`TRANSFER_AMOUNT`] from Alice to Bob.
pub fn transfer_walkthrough<S: DocumentStore + ?Sized>(
    collection: &Collection<'_, S>,
    transactions: &Transactions<'_, S>,
) -> StoreResult<(BankAccount, BankAccount)> {
    for (id, name, balance) in [("alice", "Alice", 124_000), ("bob", "Bob", 42_000)] {
        let account = BankAccount {
            name: name.to_string(),
            balance,
        };
        println!("Initialize account for {name}: {account}");
        let cas = collection.upsert::<AccountTranscoder>(id, &account)?;
        println!("Stored account for {name} (CAS={cas})");
    }

    transfer(collection, transactions, "alice", "bob", TRANSFER_AMOUNT)?;

    let alice = collection.get_as::<AccountTranscoder>("alice")?;
    let bob = collection.get_as::<AccountTranscoder>("bob")?;
    Ok((alice, bob))
}

/// Moves `amount` between two accounts in one transaction.
///
/// Aborts without writing anything if the source account cannot cover it.
pub fn transfer<S: DocumentStore + ?Sized>(
    collection: &Collection<'_, S>,
    transactions: &Transactions<'_, S>,
    from_id: &str,
    to_id: &str,
    amount: i64,
) -> StoreResult<()> {
    transactions.run(|ctx| {
        let from_doc = ctx.get(collection, from_id)?;
        let to_doc = ctx.get(collection, to_id)?;
        let mut from = from_doc.content_as::<AccountTranscoder>()?;
        let mut to = to_doc.content_as::<AccountTranscoder>()?;

        if from.balance < amount {
            return Err(StoreError::aborted(format!(
                "{} does not have enough money to transfer {amount} USD to {}",
                from.name, to.name
            )));
        }
        from.balance -= amount;
        to.balance += amount;

        ctx.replace_as::<AccountTranscoder>(&from_doc, &from)?;
        ctx.replace_as::<AccountTranscoder>(&to_doc, &to)?;
        Ok(())
    })?;
    Ok(())
}
