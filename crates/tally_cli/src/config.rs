//! Demo configuration.

use std::env;
use tally_store::Keyspace;

const TRUTHY_VALUES: [&str; 5] = ["yes", "y", "on", "true", "1"];

/// Returns true if `value` is one of the accepted spellings of "on".
pub fn is_truthy(value: &str) -> bool {
    TRUTHY_VALUES.contains(&value)
}

/// Reads the `VERBOSE` environment variable.
pub fn verbose_from_env() -> bool {
    env::var("VERBOSE").map(|v| is_truthy(&v)).unwrap_or(false)
}

/// Resolved settings for the `demo` command.
#[derive(Debug, Clone)]
pub struct DemoConfig {
    /// Where demo documents are stored.
    pub keyspace: Keyspace,
    /// Maximum attempts per transaction.
    pub max_attempts: u32,
    /// Whether debug logging is on.
    pub verbose: bool,
}

impl DemoConfig {
    /// Renders the settings, one aligned `NAME: value` line each.
    pub fn describe(&self) -> String {
        let mut out = String::new();
        let rows = [
            ("BUCKET_NAME", quote(&self.keyspace.bucket)),
            ("SCOPE_NAME", quote(&self.keyspace.scope)),
            ("COLLECTION_NAME", quote(&self.keyspace.collection)),
            ("MAX_ATTEMPTS", self.max_attempts.to_string()),
            ("VERBOSE", self.verbose.to_string()),
        ];
        for (name, value) in rows {
            out.push_str(&format!("{name:>19}: {value}\n"));
        }
        out
    }
}

fn quote(value: &str) -> String {
    format!("\"{value}\"")
}
