//! # Tally Testkit
//!
//! Test utilities for Tally.
//!
//! This crate provides:
//! - Property-based test generators using proptest
//! - Ledger and store fixtures
//!
//! ## Usage
//!
//! ```rust,ignore
//! use tally_testkit::prelude::*;
//!
//! proptest! {
//!     #[test]
//!     fn csv_roundtrip(ledger in ledger_strategy(16)) {
//!         // ...
//!     }
//! }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod fixtures;
pub mod generators;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::fixtures::*;
    pub use crate::generators::*;
}

pub use fixtures::*;
pub use generators::*;
