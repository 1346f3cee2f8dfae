//! Optimistic transactions over a document store.
//!
//! Writes are staged per attempt and committed in one atomic batch guarded
//! by the CAS values observed at read time. Conflicting attempts are
//! discarded and re-run.

mod attempt;
mod runner;

pub use attempt::{AttemptContext, TransactionDocument};
pub use runner::{TransactionResult, Transactions};
