//! Transaction attempt state.

use crate::backend::{DocumentStore, WriteOp};
use crate::collection::Collection;
use crate::error::{StoreError, StoreResult};
use crate::types::Cas;
use std::collections::HashMap;
use tally_codec::{EncodedValue, Transcoder};

/// A document read or written inside a transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionDocument {
    /// Full store key.
    pub key: String,
    /// Current content as seen by this attempt.
    pub value: EncodedValue,
    /// Revision observed when the document was first read; `Cas::ANY` for
    /// documents inserted by this attempt.
    pub cas: Cas,
}

impl TransactionDocument {
    /// Decodes the content with the given transcoder.
    pub fn content_as<C: Transcoder>(&self) -> StoreResult<C::Document> {
        Ok(C::decode(&self.value)?)
    }
}

/// A write staged by an attempt, applied on commit.
#[derive(Debug, Clone)]
enum StagedWrite {
    Insert(EncodedValue),
    Replace { value: EncodedValue, cas: Cas },
    Remove { cas: Cas },
}

/// Context handed to transaction logic for one attempt.
///
/// Reads go to the store unless this attempt already wrote the document,
/// in which case the staged content is returned. Writes are only staged;
/// they reach the store together when the attempt commits.
pub struct AttemptContext<'s, S: DocumentStore + ?Sized> {
    store: &'s S,
    staged: HashMap<String, StagedWrite>,
}

impl<'s, S: DocumentStore + ?Sized> AttemptContext<'s, S> {
    pub(crate) fn new(store: &'s S) -> Self {
        Self {
            store,
            staged: HashMap::new(),
        }
    }

    /// Returns the number of staged writes.
    pub fn staged_writes(&self) -> usize {
        self.staged.len()
    }

    /// Reads a document.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DocumentNotFound`] if the document does not
    /// exist or was removed earlier in this attempt.
    pub fn get(
        &mut self,
        collection: &Collection<'_, S>,
        id: &str,
    ) -> StoreResult<TransactionDocument> {
        let key = collection.key(id);
        match self.staged.get(&key) {
            Some(StagedWrite::Insert(value)) => Ok(TransactionDocument {
                key,
                value: value.clone(),
                cas: Cas::ANY,
            }),
            Some(StagedWrite::Replace { value, cas }) => Ok(TransactionDocument {
                value: value.clone(),
                cas: *cas,
                key,
            }),
            Some(StagedWrite::Remove { .. }) => Err(StoreError::not_found(key)),
            None => {
                let doc = self.store.get(&key)?;
                Ok(TransactionDocument {
                    key: doc.key,
                    value: doc.value,
                    cas: doc.cas,
                })
            }
        }
    }

    /// Stages new content for a document previously returned by this attempt.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DocumentNotFound`] if the document was removed
    /// earlier in this attempt.
    pub fn replace(
        &mut self,
        doc: &TransactionDocument,
        value: EncodedValue,
    ) -> StoreResult<TransactionDocument> {
        let staged = match self.staged.get(&doc.key) {
            Some(StagedWrite::Insert(_)) => StagedWrite::Insert(value.clone()),
            Some(StagedWrite::Remove { .. }) => return Err(StoreError::not_found(doc.key.as_str())),
            Some(StagedWrite::Replace { cas, .. }) => StagedWrite::Replace {
                value: value.clone(),
                cas: *cas,
            },
            // Inserted and then removed earlier in this attempt.
            None if doc.cas.is_any() => return Err(StoreError::not_found(doc.key.as_str())),
            None => StagedWrite::Replace {
                value: value.clone(),
                cas: doc.cas,
            },
        };
        self.staged.insert(doc.key.clone(), staged);
        Ok(TransactionDocument {
            key: doc.key.clone(),
            value,
            cas: doc.cas,
        })
    }

    /// Encodes `document` with `C` and stages it as the new content of `doc`.
    pub fn replace_as<C: Transcoder>(
        &mut self,
        doc: &TransactionDocument,
        document: &C::Document,
    ) -> StoreResult<TransactionDocument> {
        self.replace(doc, C::encode(document)?)
    }

    /// Stages creation of a new document.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DocumentExists`] if the document exists in the
    /// store or was already written by this attempt.
    pub fn insert(
        &mut self,
        collection: &Collection<'_, S>,
        id: &str,
        value: EncodedValue,
    ) -> StoreResult<TransactionDocument> {
        let key = collection.key(id);
        let staged = match self.staged.get(&key) {
            // Re-creating a document removed earlier in this attempt.
            Some(StagedWrite::Remove { cas }) => StagedWrite::Replace {
                value: value.clone(),
                cas: *cas,
            },
            Some(_) => return Err(StoreError::exists(key)),
            None => {
                if self.store.contains(&key)? {
                    return Err(StoreError::exists(key));
                }
                StagedWrite::Insert(value.clone())
            }
        };
        let cas = match &staged {
            StagedWrite::Replace { cas, .. } => *cas,
            _ => Cas::ANY,
        };
        self.staged.insert(key.clone(), staged);
        Ok(TransactionDocument { key, value, cas })
    }

    /// Encodes `document` with `C` and stages its creation.
    pub fn insert_as<C: Transcoder>(
        &mut self,
        collection: &Collection<'_, S>,
        id: &str,
        document: &C::Document,
    ) -> StoreResult<TransactionDocument> {
        self.insert(collection, id, C::encode(document)?)
    }

    /// Stages removal of a document previously returned by this attempt.
    pub fn remove(&mut self, doc: &TransactionDocument) -> StoreResult<()> {
        // `None` means the document only ever existed in this attempt.
        let observed = match self.staged.get(&doc.key) {
            Some(StagedWrite::Insert(_)) => None,
            Some(StagedWrite::Remove { .. }) => {
                return Err(StoreError::not_found(doc.key.as_str()));
            }
            Some(StagedWrite::Replace { cas, .. }) => Some(*cas),
            None if doc.cas.is_any() => return Err(StoreError::not_found(doc.key.as_str())),
            None => Some(doc.cas),
        };
        match observed {
            Some(cas) => {
                self.staged
                    .insert(doc.key.clone(), StagedWrite::Remove { cas });
            }
            None => {
                self.staged.remove(&doc.key);
            }
        }
        Ok(())
    }

    /// Turns staged writes into a batch for [`DocumentStore::apply_batch`].
    pub(crate) fn into_ops(self) -> Vec<WriteOp> {
        let mut ops: Vec<WriteOp> = self
            .staged
            .into_iter()
            .map(|(key, write)| match write {
                StagedWrite::Insert(value) => WriteOp::Insert { key, value },
                StagedWrite::Replace { value, cas } => WriteOp::Replace { key, value, cas },
                StagedWrite::Remove { cas } => WriteOp::Remove { key, cas },
            })
            .collect();
        ops.sort_by(|a, b| a.key().cmp(b.key()));
        ops
    }
}
