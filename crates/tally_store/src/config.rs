//! Store configuration.

use std::fmt;

/// Default bucket name.
pub const DEFAULT_BUCKET: &str = "default";
/// Name of the default scope and collection.
pub const DEFAULT_NAME: &str = "_default";

/// Location of a collection: bucket, scope and collection names.
///
/// Document ids are turned into store keys by prefixing the keyspace, so
/// the same id in two collections names two different documents.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Keyspace {
    /// Bucket name.
    pub bucket: String,
    /// Scope name.
    pub scope: String,
    /// Collection name.
    pub collection: String,
}

impl Default for Keyspace {
    fn default() -> Self {
        Self {
            bucket: DEFAULT_BUCKET.to_string(),
            scope: DEFAULT_NAME.to_string(),
            collection: DEFAULT_NAME.to_string(),
        }
    }
}

impl Keyspace {
    /// Creates the default keyspace.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the bucket name.
    #[must_use]
    pub fn bucket(mut self, name: impl Into<String>) -> Self {
        self.bucket = name.into();
        self
    }

    /// Sets the scope name.
    #[must_use]
    pub fn scope(mut self, name: impl Into<String>) -> Self {
        self.scope = name.into();
        self
    }

    /// Sets the collection name.
    #[must_use]
    pub fn collection(mut self, name: impl Into<String>) -> Self {
        self.collection = name.into();
        self
    }

    /// Returns the store key for a document id.
    #[must_use]
    pub fn document_key(&self, id: &str) -> String {
        format!("{self}/{id}")
    }
}

impl fmt::Display for Keyspace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.bucket, self.scope, self.collection)
    }
}

/// Configuration for running transactions.
#[derive(Debug, Clone)]
pub struct TransactionConfig {
    /// Maximum number of attempts before giving up on conflicts.
    pub max_attempts: u32,
}

impl Default for TransactionConfig {
    fn default() -> Self {
        Self { max_attempts: 10 }
    }
}

impl TransactionConfig {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum number of attempts. Zero is treated as one.
    #[must_use]
    pub const fn max_attempts(mut self, value: u32) -> Self {
        self.max_attempts = value;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_keyspace() {
        let keyspace = Keyspace::default();
        assert_eq!(keyspace.to_string(), "default/_default/_default");
        assert_eq!(keyspace.document_key("the_ledger"), "default/_default/_default/the_ledger");
    }

    #[test]
    fn builder_pattern() {
        let keyspace = Keyspace::new().bucket("books").scope("2024").collection("ledgers");
        assert_eq!(keyspace.document_key("q3"), "books/2024/ledgers/q3");

        let config = TransactionConfig::new().max_attempts(3);
        assert_eq!(config.max_attempts, 3);
        assert_eq!(TransactionConfig::default().max_attempts, 10);
    }
}
