//! Error types for store operations.

use crate::types::Cas;
use tally_codec::CodecError;
use thiserror::Error;
use uuid::Uuid;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur in store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Transcoding error.
    #[error("codec error: {0}")]
    Codec(#[from] CodecError),

    /// No document under the key.
    #[error("document not found: {key}")]
    DocumentNotFound {
        /// The key looked up.
        key: String,
    },

    /// A document already exists under the key.
    #[error("document already exists: {key}")]
    DocumentExists {
        /// The key written.
        key: String,
    },

    /// The document changed since it was read.
    #[error("CAS mismatch on {key}: expected {expected}, found {actual}")]
    CasMismatch {
        /// The key written.
        key: String,
        /// CAS supplied by the caller.
        expected: Cas,
        /// CAS currently stored.
        actual: Cas,
    },

    /// Transaction logic failed; nothing was committed.
    #[error("transaction {id} failed after {attempts} attempt(s): {cause}")]
    TransactionFailed {
        /// Transaction identifier.
        id: Uuid,
        /// Number of attempts made.
        attempts: u32,
        /// The error that stopped the transaction.
        #[source]
        cause: Box<StoreError>,
    },

    /// Transaction kept conflicting until it ran out of attempts.
    #[error("transaction {id} expired after {attempts} conflicting attempt(s)")]
    TransactionExpired {
        /// Transaction identifier.
        id: Uuid,
        /// Number of attempts made.
        attempts: u32,
    },

    /// Transaction logic chose to roll back.
    #[error("aborted: {reason}")]
    Aborted {
        /// Reason given by the application.
        reason: String,
    },

    /// Operation not permitted in current state.
    #[error("invalid operation: {message}")]
    InvalidOperation {
        /// Description of why operation is invalid.
        message: String,
    },
}

impl StoreError {
    /// Creates a document not found error.
    pub fn not_found(key: impl Into<String>) -> Self {
        Self::DocumentNotFound { key: key.into() }
    }

    /// Creates a document exists error.
    pub fn exists(key: impl Into<String>) -> Self {
        Self::DocumentExists { key: key.into() }
    }

    /// Creates an aborted error.
    pub fn aborted(reason: impl Into<String>) -> Self {
        Self::Aborted {
            reason: reason.into(),
        }
    }

    /// Creates an invalid operation error.
    pub fn invalid_operation(message: impl Into<String>) -> Self {
        Self::InvalidOperation {
            message: message.into(),
        }
    }

    /// Returns true if the error means a concurrent writer got there first.
    ///
    /// Transactions retry on these when committing.
    #[must_use]
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::CasMismatch { .. } | Self::DocumentExists { .. } | Self::DocumentNotFound { .. }
        )
    }
}
