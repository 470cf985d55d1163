//! Query pipeline: rank the store, then generate codes for each match.

use tracing::{debug, warn};

use crate::core::domain::SecretRecord;
use crate::core::otp::CodePair;
use crate::core::search;
use crate::core::store::SecretStore;
use crate::core::types::UnixSeconds;
use crate::error::OtpError;

/// A matched record together with its codes.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry<'a> {
    pub record: &'a SecretRecord,
    pub score: f64,
    pub codes: CodePair,
}

/// Result of one lookup.
#[derive(Debug, Default)]
pub struct Lookup<'a> {
    /// Matches with codes, best first.
    pub entries: Vec<Entry<'a>>,
    /// Matches dropped because their code could not be generated.
    pub failures: Vec<OtpError>,
}

/// Look up `query` in `store` and generate codes at `now`.
///
/// A blank query lists every record in store order. Records whose secret
/// cannot be decoded are reported in `failures`; the others are still
/// returned.
pub fn lookup<'a>(store: &'a SecretStore, query: &str, now: UnixSeconds) -> Lookup<'a> {
    let matches = if query.trim().is_empty() {
        search::all(store)
    } else {
        search::rank(query, store)
    };

    let mut result = Lookup::default();
    for m in matches {
        match CodePair::at(m.record, now) {
            Ok(codes) => result.entries.push(Entry {
                record: m.record,
                score: m.score,
                codes,
            }),
            Err(e) => {
                warn!(record = %m.record, error = %e, "skipping record");
                result.failures.push(e);
            }
        }
    }

    debug!(
        entries = result.entries.len(),
        failures = result.failures.len(),
        "lookup finished"
    );
    result
}
