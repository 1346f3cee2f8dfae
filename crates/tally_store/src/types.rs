//! Core type definitions.

use crate::error::StoreResult;
use std::fmt;
use tally_codec::{EncodedValue, Transcoder};

/// Compare-and-swap token identifying one revision of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Cas(u64);

impl Cas {
    /// Wildcard: matches any stored revision.
    pub const ANY: Cas = Cas(0);

    /// Creates a CAS from its raw value.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw value.
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }

    /// Returns true for the wildcard.
    #[must_use]
    pub const fn is_any(self) -> bool {
        self.0 == 0
    }

    /// Returns true if a write carrying `self` may replace a document at `stored`.
    #[must_use]
    pub fn permits(self, stored: Cas) -> bool {
        self.is_any() || self == stored
    }
}

impl fmt::Display for Cas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A document as read from a store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredDocument {
    /// Full store key.
    pub key: String,
    /// Encoded payload and format flags.
    pub value: EncodedValue,
    /// Revision of this document.
    pub cas: Cas,
}

impl StoredDocument {
    /// Decodes the content with the given transcoder.
    pub fn content_as<C: Transcoder>(&self) -> StoreResult<C::Document> {
        Ok(C::decode(&self.value)?)
    }
}
