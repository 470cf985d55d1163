//! Fuzzy lookup over stored secrets.
//!
//! Each record gets an additive relevance score from token containment in
//! its label and account:
//!
//! | check                              | score |
//! |------------------------------------|-------|
//! | every token is in the label        | 3     |
//! | every token is in the account      | 2     |
//! | at least one token is in the label | 1     |
//! | at least one token in the account  | 0.5   |
//!
//! Zero-score records are dropped. Ties keep store order.

use std::cmp::Ordering;

use tracing::debug;

use crate::core::domain::SecretRecord;
use crate::core::store::SecretStore;

const ALL_IN_LABEL: f64 = 3.0;
const ALL_IN_ACCOUNT: f64 = 2.0;
const ANY_IN_LABEL: f64 = 1.0;
const ANY_IN_ACCOUNT: f64 = 0.5;

/// A ranked record.
#[derive(Debug, Clone, PartialEq)]
pub struct Match<'a> {
    pub record: &'a SecretRecord,
    pub score: f64,
}

/// Rank every record in `store` against `query`, best first.
///
/// A blank query matches nothing.
pub fn rank<'a>(query: &str, store: &'a SecretStore) -> Vec<Match<'a>> {
    let tokens = tokenize(query);
    if tokens.is_empty() {
        return Vec::new();
    }

    let mut matches: Vec<Match<'a>> = store
        .records()
        .filter_map(|record| {
            let score = score(&tokens, record);
            (score > 0.0).then_some(Match { record, score })
        })
        .collect();

    // sort_by is stable, so equal scores stay in store order
    matches.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

    debug!(query = %query, matches = matches.len(), "ranked store");
    matches
}

/// Every record in store order, unscored.
pub fn all(store: &SecretStore) -> Vec<Match<'_>> {
    store
        .records()
        .map(|record| Match { record, score: 0.0 })
        .collect()
}

/// Relevance of one record for already-tokenized query.
pub fn score(tokens: &[String], record: &SecretRecord) -> f64 {
    if tokens.is_empty() {
        return 0.0;
    }

    let label = record.label().to_lowercase();
    let account = record.account().to_lowercase();
    let in_label = |t: &String| label.contains(t.as_str());
    let in_account = |t: &String| account.contains(t.as_str());

    let mut score = 0.0;
    if tokens.iter().all(in_label) {
        score += ALL_IN_LABEL;
    }
    if tokens.iter().all(in_account) {
        score += ALL_IN_ACCOUNT;
    }
    if tokens.iter().any(in_label) {
        score += ANY_IN_LABEL;
    }
    if tokens.iter().any(in_account) {
        score += ANY_IN_ACCOUNT;
    }
    score
}

/// Lower-cased whitespace-separated query tokens.
pub fn tokenize(query: &str) -> Vec<String> {
    query.split_whitespace().map(str::to_lowercase).collect()
}
