//! Transaction runner.

use crate::backend::DocumentStore;
use crate::config::TransactionConfig;
use crate::error::{StoreError, StoreResult};
use crate::transaction::attempt::AttemptContext;
use tracing::{debug, warn};
use uuid::Uuid;

/// Outcome of a committed transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionResult<R> {
    /// Transaction identifier.
    pub transaction_id: Uuid,
    /// Number of attempts it took, including the one that committed.
    pub attempts: u32,
    /// Value returned by the transaction logic.
    pub value: R,
}

/// Runs optimistic transactions against a store.
///
/// Transaction logic is a closure that reads and stages writes through an
/// [`AttemptContext`]. When it returns `Ok`, the staged writes are applied
/// atomically, each checked against the CAS observed when the document was
/// read. If another writer got there first, the attempt is thrown away and
/// the closure runs again from scratch.
///
/// ## Guarantees
///
/// - **Atomicity**: all staged writes commit, or none do
/// - **Read-your-writes**: within an attempt, reads see staged writes
/// - **No lost updates**: a document changed since it was read fails the
///   commit and triggers a retry
///
/// # Example
///
/// ```rust
/// use tally_codec::{CsvTranscoder, Ledger};
/// use tally_store::{Collection, InMemoryStore, Keyspace, TransactionConfig, Transactions};
///
/// let store = InMemoryStore::new();
/// let books = Collection::new(&store, Keyspace::default());
/// books.upsert::<CsvTranscoder>("the_ledger", &Ledger::new()).unwrap();
///
/// let transactions = Transactions::new(&store, TransactionConfig::default());
/// let result = transactions
///     .run(|ctx| {
///         let doc = ctx.get(&books, "the_ledger")?;
///         let mut ledger = doc.content_as::<CsvTranscoder>()?;
///         ledger.record_movement("2024-09-01", "Cash", "Expenses", 1000, "Rent payment");
///         ctx.replace_as::<CsvTranscoder>(&doc, &ledger)?;
///         Ok(ledger.len())
///     })
///     .unwrap();
/// assert_eq!(result.value, 2);
/// ```
pub struct Transactions<'s, S: DocumentStore + ?Sized> {
    store: &'s S,
    config: TransactionConfig,
}

impl<'s, S: DocumentStore + ?Sized> Transactions<'s, S> {
    /// Creates a runner for `store`.
    pub fn new(store: &'s S, config: TransactionConfig) -> Self {
        Self { store, config }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &TransactionConfig {
        &self.config
    }

    /// Runs `logic` until it commits, fails, or runs out of attempts.
    ///
    /// # Errors
    ///
    /// - [`StoreError::TransactionFailed`] if `logic` returns an error or the
    ///   commit fails for a reason other than a conflict; nothing is written
    /// - [`StoreError::TransactionExpired`] if every attempt conflicted
    pub fn run<R, F>(&self, mut logic: F) -> StoreResult<TransactionResult<R>>
    where
        F: FnMut(&mut AttemptContext<'s, S>) -> StoreResult<R>,
    {
        let id = Uuid::new_v4();
        let max_attempts = self.config.max_attempts.max(1);
        debug!(transaction_id = %id, max_attempts, "transaction started");

        for attempt in 1..=max_attempts {
            let mut ctx = AttemptContext::new(self.store);
            let value = logic(&mut ctx).map_err(|cause| {
                debug!(transaction_id = %id, attempt, error = %cause, "transaction logic failed");
                StoreError::TransactionFailed {
                    id,
                    attempts: attempt,
                    cause: Box::new(cause),
                }
            })?;

            let ops = ctx.into_ops();
            let writes = ops.len();
            match self.store.apply_batch(ops) {
                Ok(()) => {
                    debug!(transaction_id = %id, attempt, writes, "transaction committed");
                    return Ok(TransactionResult {
                        transaction_id: id,
                        attempts: attempt,
                        value,
                    });
                }
                Err(e) if e.is_conflict() => {
                    warn!(transaction_id = %id, attempt, error = %e, "commit conflict, retrying");
                }
                Err(e) => {
                    return Err(StoreError::TransactionFailed {
                        id,
                        attempts: attempt,
                        cause: Box::new(e),
                    });
                }
            }
        }

        warn!(transaction_id = %id, attempts = max_attempts, "transaction expired");
        Err(StoreError::TransactionExpired {
            id,
            attempts: max_attempts,
        })
    }
}
