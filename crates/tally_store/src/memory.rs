//! In-memory document store.

use crate::backend::{DocumentStore, WriteOp};
use crate::error::{StoreError, StoreResult};
use crate::types::{Cas, StoredDocument};
use parking_lot::RwLock;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicU64, Ordering};
use tally_codec::EncodedValue;

/// An in-memory document store.
///
/// Suitable for tests, demos and ephemeral data. Nothing is persisted.
///
/// # Thread Safety
///
/// The store is thread-safe and can be shared across threads. Writes to
/// the same document from different threads are serialized by CAS checks.
///
/// # Example
///
/// ```rust
/// use tally_codec::{EncodedValue, FormatTag};
/// use tally_store::{DocumentStore, InMemoryStore};
///
/// let store = InMemoryStore::new();
/// let value = EncodedValue::new(&b"hello"[..], FormatTag::Binary);
/// let cas = store.upsert("greeting", value).unwrap();
/// let doc = store.get("greeting").unwrap();
/// assert_eq!(doc.cas, cas);
/// assert_eq!(&doc.value.data[..], b"hello");
/// ```
#[derive(Debug, Default)]
pub struct InMemoryStore {
    docs: RwLock<HashMap<String, Entry>>,
    last_cas: AtomicU64,
}

#[derive(Debug, Clone)]
struct Entry {
    value: EncodedValue,
    cas: Cas,
}

impl InMemoryStore {
    /// Creates a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of documents.
    #[must_use]
    pub fn len(&self) -> usize {
        self.docs.read().len()
    }

    /// Returns true if the store holds no documents.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.docs.read().is_empty()
    }

    /// Returns all keys, sorted.
    #[must_use]
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.docs.read().keys().cloned().collect();
        keys.sort();
        keys
    }

    /// Removes all documents. CAS values keep increasing afterwards.
    pub fn clear(&self) {
        self.docs.write().clear();
    }

    fn next_cas(&self) -> Cas {
        Cas::new(self.last_cas.fetch_add(1, Ordering::SeqCst) + 1)
    }

    fn check_current(docs: &HashMap<String, Entry>, key: &str, cas: Cas) -> StoreResult<()> {
        let entry = docs.get(key).ok_or_else(|| StoreError::not_found(key))?;
        if cas.permits(entry.cas) {
            Ok(())
        } else {
            Err(StoreError::CasMismatch {
                key: key.to_string(),
                expected: cas,
                actual: entry.cas,
            })
        }
    }

    fn check(docs: &HashMap<String, Entry>, op: &WriteOp) -> StoreResult<()> {
        match op {
            WriteOp::Insert { key, .. } => {
                if docs.contains_key(key) {
                    Err(StoreError::exists(key.as_str()))
                } else {
                    Ok(())
                }
            }
            WriteOp::Replace { key, cas, .. } | WriteOp::Remove { key, cas } => {
                Self::check_current(docs, key, *cas)
            }
        }
    }
}

impl DocumentStore for InMemoryStore {
    fn get(&self, key: &str) -> StoreResult<StoredDocument> {
        let docs = self.docs.read();
        let entry = docs.get(key).ok_or_else(|| StoreError::not_found(key))?;
        Ok(StoredDocument {
            key: key.to_string(),
            value: entry.value.clone(),
            cas: entry.cas,
        })
    }

    fn insert(&self, key: &str, value: EncodedValue) -> StoreResult<Cas> {
        let mut docs = self.docs.write();
        if docs.contains_key(key) {
            return Err(StoreError::exists(key));
        }
        let cas = self.next_cas();
        docs.insert(key.to_string(), Entry { value, cas });
        Ok(cas)
    }

    fn upsert(&self, key: &str, value: EncodedValue) -> StoreResult<Cas> {
        let mut docs = self.docs.write();
        let cas = self.next_cas();
        docs.insert(key.to_string(), Entry { value, cas });
        Ok(cas)
    }

    fn replace(&self, key: &str, value: EncodedValue, cas: Cas) -> StoreResult<Cas> {
        let mut docs = self.docs.write();
        Self::check_current(&docs, key, cas)?;
        let cas = self.next_cas();
        docs.insert(key.to_string(), Entry { value, cas });
        Ok(cas)
    }

    fn remove(&self, key: &str, cas: Cas) -> StoreResult<()> {
        let mut docs = self.docs.write();
        Self::check_current(&docs, key, cas)?;
        docs.remove(key);
        Ok(())
    }

    fn apply_batch(&self, ops: Vec<WriteOp>) -> StoreResult<()> {
        {
            let mut seen = HashSet::with_capacity(ops.len());
            for op in &ops {
                if !seen.insert(op.key()) {
                    return Err(StoreError::invalid_operation(format!(
                        "key {} appears twice in one batch",
                        op.key()
                    )));
                }
            }
        }

        let mut docs = self.docs.write();
        for op in &ops {
            Self::check(&docs, op)?;
        }
        for op in ops {
            match op {
                WriteOp::Insert { key, value } | WriteOp::Replace { key, value, .. } => {
                    let cas = self.next_cas();
                    docs.insert(key, Entry { value, cas });
                }
                WriteOp::Remove { key, .. } => {
                    docs.remove(&key);
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tally_codec::FormatTag;

    fn value(text: &'static str) -> EncodedValue {
        EncodedValue::new(text.as_bytes(), FormatTag::Binary)
    }

    #[test]
    fn memory_new_is_empty() {
        let store = InMemoryStore::new();
        assert!(store.is_empty());
        assert!(!store.contains("a").unwrap());
    }

    #[test]
    fn get_missing_document() {
        let store = InMemoryStore::new();
        assert!(matches!(
            store.get("nope"),
            Err(StoreError::DocumentNotFound { key }) if key == "nope"
        ));
    }

    #[test]
    fn upsert_then_get() {
        let store = InMemoryStore::new();
        let cas = store.upsert("a", value("one")).unwrap();
        let doc = store.get("a").unwrap();
        assert_eq!(doc.key, "a");
        assert_eq!(doc.cas, cas);
        assert_eq!(doc.value, value("one"));
    }

    #[test]
    fn cas_strictly_increases() {
        let store = InMemoryStore::new();
        let c1 = store.upsert("a", value("1")).unwrap();
        let c2 = store.upsert("b", value("2")).unwrap();
        let c3 = store.upsert("a", value("3")).unwrap();
        assert!(c1 < c2 && c2 < c3);
        assert!(!c1.is_any());
    }

    #[test]
    fn insert_refuses_existing() {
        let store = InMemoryStore::new();
        store.insert("a", value("1")).unwrap();
        assert!(matches!(
            store.insert("a", value("2")),
            Err(StoreError::DocumentExists { .. })
        ));
        assert_eq!(store.get("a").unwrap().value, value("1"));
    }

    #[test]
    fn replace_checks_cas() {
        let store = InMemoryStore::new();
        let c1 = store.upsert("a", value("1")).unwrap();
        let c2 = store.replace("a", value("2"), c1).unwrap();

        let err = store.replace("a", value("3"), c1).unwrap_err();
        assert!(matches!(
            err,
            StoreError::CasMismatch { expected, actual, .. } if expected == c1 && actual == c2
        ));

        store.replace("a", value("4"), Cas::ANY).unwrap();
        assert_eq!(store.get("a").unwrap().value, value("4"));
    }

    #[test]
    fn replace_missing_document() {
        let store = InMemoryStore::new();
        assert!(matches!(
            store.replace("a", value("1"), Cas::ANY),
            Err(StoreError::DocumentNotFound { .. })
        ));
    }

    #[test]
    fn remove_checks_cas() {
        let store = InMemoryStore::new();
        let c1 = store.upsert("a", value("1")).unwrap();
        assert!(store.remove("a", Cas::new(c1.as_u64() + 1)).is_err());
        store.remove("a", c1).unwrap();
        assert!(!store.contains("a").unwrap());
    }

    #[test]
    fn batch_is_all_or_nothing() {
        let store = InMemoryStore::new();
        let cas_a = store.upsert("a", value("a1")).unwrap();
        store.upsert("b", value("b1")).unwrap();

        let stale = Cas::new(cas_a.as_u64() + 100);
        let result = store.apply_batch(vec![
            WriteOp::Replace {
                key: "a".into(),
                value: value("a2"),
                cas: cas_a,
            },
            WriteOp::Remove {
                key: "b".into(),
                cas: stale,
            },
        ]);
        assert!(matches!(result, Err(StoreError::CasMismatch { .. })));
        assert_eq!(store.get("a").unwrap().value, value("a1"));
        assert!(store.contains("b").unwrap());
    }

    #[test]
    fn batch_applies_every_write() {
        let store = InMemoryStore::new();
        let cas_a = store.upsert("a", value("a1")).unwrap();
        let cas_b = store.upsert("b", value("b1")).unwrap();

        store
            .apply_batch(vec![
                WriteOp::Replace {
                    key: "a".into(),
                    value: value("a2"),
                    cas: cas_a,
                },
                WriteOp::Remove {
                    key: "b".into(),
                    cas: cas_b,
                },
                WriteOp::Insert {
                    key: "c".into(),
                    value: value("c1"),
                },
            ])
            .unwrap();

        assert_eq!(store.keys(), vec!["a".to_string(), "c".to_string()]);
        assert_eq!(store.get("a").unwrap().value, value("a2"));
        assert!(store.get("a").unwrap().cas > cas_b);
    }

    #[test]
    fn batch_rejects_duplicate_keys() {
        let store = InMemoryStore::new();
        let result = store.apply_batch(vec![
            WriteOp::Insert {
                key: "a".into(),
                value: value("1"),
            },
            WriteOp::Insert {
                key: "a".into(),
                value: value("2"),
            },
        ]);
        assert!(matches!(result, Err(StoreError::InvalidOperation { .. })));
        assert!(store.is_empty());
    }

    #[test]
    fn clear_keeps_cas_monotonic() {
        let store = InMemoryStore::new();
        let before = store.upsert("a", value("1")).unwrap();
        store.clear();
        let after = store.upsert("a", value("1")).unwrap();
        assert!(after > before);
    }
}
