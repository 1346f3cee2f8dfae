//! # Tally Store
//!
//! Keyed document storage for Tally documents.
//!
//! Stores are **opaque byte stores**: they keep an [`EncodedValue`] (bytes
//! plus format flags) per key and never decode it. Callers pick a
//! [`Transcoder`](tally_codec::Transcoder) at every call site to turn
//! documents into encoded values and back.
//!
//! ## Design Principles
//!
//! - Every mutation issues a new [`Cas`]; writers that hold a stale CAS fail
//! - Transactions stage writes and commit them atomically, retrying on
//!   conflicts
//! - Stores must be `Send + Sync`
//!
//! ## Example
//!
//! ```rust
//! use tally_codec::{CsvTranscoder, Ledger};
//! use tally_store::{Collection, InMemoryStore, Keyspace};
//!
//! let store = InMemoryStore::new();
//! let books = Collection::new(&store, Keyspace::default());
//!
//! let mut ledger = Ledger::new();
//! ledger.record_movement("2024-08-30", "Accounts Receivable", "Cash", 1500, "Payment received");
//! let cas = books.upsert::<CsvTranscoder>("the_ledger", &ledger).unwrap();
//!
//! let doc = books.get("the_ledger").unwrap();
//! assert_eq!(doc.cas, cas);
//! assert_eq!(doc.content_as::<CsvTranscoder>().unwrap(), ledger);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod backend;
mod collection;
mod config;
mod error;
mod memory;
mod transaction;
mod types;

pub use backend::{DocumentStore, WriteOp};
pub use collection::Collection;
pub use config::{Keyspace, TransactionConfig, DEFAULT_BUCKET, DEFAULT_NAME};
pub use error::{StoreError, StoreResult};
pub use memory::InMemoryStore;
pub use tally_codec::EncodedValue;
pub use transaction::{AttemptContext, TransactionDocument, TransactionResult, Transactions};
pub use types::{Cas, StoredDocument};
