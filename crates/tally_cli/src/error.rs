//! Error types for CLI commands.

use std::path::PathBuf;
use thiserror::Error;

/// Errors reported by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// A text argument would break the CSV layout.
    #[error("{name} must not contain ',' or line breaks: {value:?}")]
    UnsafeField {
        /// Argument name.
        name: &'static str,
        /// Rejected value.
        value: String,
    },

    /// Requested output format is not supported.
    #[error("unknown format {0:?} (expected text, json or csv)")]
    UnknownFormat(String),

    /// Debits and credits differ.
    #[error("ledger {path:?} is unbalanced: debits {debit}, credits {credit}")]
    Unbalanced {
        /// Ledger file.
        path: PathBuf,
        /// Sum of debits.
        debit: u128,
        /// Sum of credits.
        credit: u128,
    },
}
