//! Document store trait definition.

use crate::error::{StoreError, StoreResult};
use crate::types::{Cas, StoredDocument};
use tally_codec::EncodedValue;

/// A keyed store of encoded documents.
///
/// Stores are **opaque**: they keep the bytes and flags handed to them and
/// never decode them. Decoding is the caller's job, through a
/// [`tally_codec::Transcoder`].
///
/// # Invariants
///
/// - Every successful mutation assigns the document a fresh CAS, strictly
///   greater than any CAS issued before by the same store
/// - `replace` and `remove` only succeed if the supplied CAS permits the
///   stored one (see [`Cas::permits`])
/// - `apply_batch` is all-or-nothing
/// - Stores must be `Send + Sync` for concurrent access
pub trait DocumentStore: Send + Sync {
    /// Reads the document under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DocumentNotFound`] if there is none.
    fn get(&self, key: &str) -> StoreResult<StoredDocument>;

    /// Creates a document, failing if one exists.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DocumentExists`] if the key is taken.
    fn insert(&self, key: &str, value: EncodedValue) -> StoreResult<Cas>;

    /// Creates or overwrites a document.
    fn upsert(&self, key: &str, value: EncodedValue) -> StoreResult<Cas>;

    /// Overwrites an existing document.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DocumentNotFound`] if there is no document and
    /// [`StoreError::CasMismatch`] if it changed since `cas` was observed.
    fn replace(&self, key: &str, value: EncodedValue, cas: Cas) -> StoreResult<Cas>;

    /// Deletes an existing document.
    ///
    /// # Errors
    ///
    /// Same conditions as [`replace`](DocumentStore::replace).
    fn remove(&self, key: &str, cas: Cas) -> StoreResult<()>;

    /// Applies all writes or none of them.
    ///
    /// Keys within one batch must be distinct.
    ///
    /// # Errors
    ///
    /// Returns the first failing check; no write is applied in that case.
    fn apply_batch(&self, ops: Vec<WriteOp>) -> StoreResult<()>;

    /// Returns true if a document exists under `key`.
    fn contains(&self, key: &str) -> StoreResult<bool> {
        match self.get(key) {
            Ok(_) => Ok(true),
            Err(StoreError::DocumentNotFound { .. }) => Ok(false),
            Err(e) => Err(e),
        }
    }
}

/// One write inside an atomic batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOp {
    /// Create a document that must not exist.
    Insert {
        /// Store key.
        key: String,
        /// New content.
        value: EncodedValue,
    },
    /// Overwrite a document at a known revision.
    Replace {
        /// Store key.
        key: String,
        /// New content.
        value: EncodedValue,
        /// Revision observed when the document was read.
        cas: Cas,
    },
    /// Delete a document at a known revision.
    Remove {
        /// Store key.
        key: String,
        /// Revision observed when the document was read.
        cas: Cas,
    },
}

impl WriteOp {
    /// Returns the key this write targets.
    #[must_use]
    pub fn key(&self) -> &str {
        match self {
            WriteOp::Insert { key, .. }
            | WriteOp::Replace { key, .. }
            | WriteOp::Remove { key, .. } => key,
        }
    }
}
