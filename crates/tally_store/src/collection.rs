//! Typed collection access.

use crate::backend::DocumentStore;
use crate::config::Keyspace;
use crate::error::StoreResult;
use crate::types::{Cas, StoredDocument};
use tally_codec::Transcoder;
use tracing::debug;

/// A collection within a store.
///
/// Every write names the [`Transcoder`] that encodes the document, so the
/// same collection can hold JSON accounts next to CSV ledgers.
///
/// # Example
///
/// ```rust
/// use tally_codec::{CsvTranscoder, Ledger};
/// use tally_store::{Collection, InMemoryStore, Keyspace};
///
/// let store = InMemoryStore::new();
/// let books = Collection::new(&store, Keyspace::default());
///
/// let mut ledger = Ledger::new();
/// ledger.record_movement("2024-08-30", "Accounts Receivable", "Cash", 1500, "Payment received");
/// books.upsert::<CsvTranscoder>("the_ledger", &ledger).unwrap();
///
/// let read: Ledger = books.get_as::<CsvTranscoder>("the_ledger").unwrap();
/// assert_eq!(read, ledger);
/// ```
pub struct Collection<'s, S: DocumentStore + ?Sized> {
    store: &'s S,
    keyspace: Keyspace,
}

impl<'s, S: DocumentStore + ?Sized> Collection<'s, S> {
    /// Creates a handle for `keyspace` in `store`.
    pub fn new(store: &'s S, keyspace: Keyspace) -> Self {
        Self { store, keyspace }
    }

    /// Returns the keyspace.
    pub fn keyspace(&self) -> &Keyspace {
        &self.keyspace
    }

    /// Returns the underlying store.
    pub fn store(&self) -> &'s S {
        self.store
    }

    /// Returns the store key for a document id.
    pub fn key(&self, id: &str) -> String {
        self.keyspace.document_key(id)
    }

    /// Creates or overwrites a document.
    pub fn upsert<C: Transcoder>(&self, id: &str, document: &C::Document) -> StoreResult<Cas> {
        let key = self.key(id);
        let cas = self.store.upsert(&key, C::encode(document)?)?;
        debug!(%key, %cas, "upserted document");
        Ok(cas)
    }

    /// Creates a document that must not exist yet.
    pub fn insert<C: Transcoder>(&self, id: &str, document: &C::Document) -> StoreResult<Cas> {
        let key = self.key(id);
        let cas = self.store.insert(&key, C::encode(document)?)?;
        debug!(%key, %cas, "inserted document");
        Ok(cas)
    }

    /// Overwrites a document last seen at `cas`.
    pub fn replace<C: Transcoder>(
        &self,
        id: &str,
        document: &C::Document,
        cas: Cas,
    ) -> StoreResult<Cas> {
        let key = self.key(id);
        let cas = self.store.replace(&key, C::encode(document)?, cas)?;
        debug!(%key, %cas, "replaced document");
        Ok(cas)
    }

    /// Reads a document without decoding it.
    pub fn get(&self, id: &str) -> StoreResult<StoredDocument> {
        self.store.get(&self.key(id))
    }

    /// Reads and decodes a document.
    pub fn get_as<C: Transcoder>(&self, id: &str) -> StoreResult<C::Document> {
        self.get(id)?.content_as::<C>()
    }

    /// Deletes a document last seen at `cas`.
    pub fn remove(&self, id: &str, cas: Cas) -> StoreResult<()> {
        let key = self.key(id);
        self.store.remove(&key, cas)?;
        debug!(%key, "removed document");
        Ok(())
    }
}
