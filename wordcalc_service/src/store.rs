//! Process-lifetime record of failing questions.
//!
//! Every failing evaluate/validate call lands here, keyed by the original
//! expression text and the endpoint that observed it. Entries are created on
//! first failure, bumped on repeats, and never evicted. The store is owned
//! by the service instance and handed around explicitly; the per-key update
//! happens under a write lock so concurrent failures of the same question
//! are never lost.

use std::collections::HashMap;
use std::sync::RwLock;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use wordcalc_core::Reason;

/// Logical operation that observed a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Endpoint {
    Evaluate,
    Validate,
}

impl Endpoint {
    /// Identifier used in failure records.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Evaluate => "evaluate",
            Self::Validate => "validate",
        }
    }
}

/// Composite store key with derived equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct FailureKey {
    expression: String,
    endpoint: Endpoint,
}

#[derive(Debug, Clone)]
struct FailureEntry {
    frequency: u64,
    reason: Reason,
    last_seen: DateTime<Utc>,
}

/// One record of the errors query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FailureRecord {
    pub expression: String,
    pub endpoint: Endpoint,
    pub frequency: u64,
    #[serde(rename = "type")]
    pub reason: Reason,
    pub last_seen: DateTime<Utc>,
}

/// In-memory failure store, scoped to one service instance.
#[derive(Debug, Default)]
pub struct FailureStore {
    entries: RwLock<HashMap<FailureKey, FailureEntry>>,
}

impl FailureStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one failure, creating or bumping the (expression, endpoint)
    /// entry. The most recent reason wins.
    pub fn record(&self, expression: &str, endpoint: Endpoint, reason: Reason) {
        let key = FailureKey {
            expression: expression.to_string(),
            endpoint,
        };
        let now = Utc::now();

        let mut entries = self.entries.write().expect("failure store lock poisoned");
        let entry = entries.entry(key).or_insert(FailureEntry {
            frequency: 0,
            reason,
            last_seen: now,
        });
        entry.frequency += 1;
        entry.reason = reason;
        entry.last_seen = now;
    }

    /// Number of distinct failing (expression, endpoint) pairs.
    pub fn len(&self) -> usize {
        self.entries
            .read()
            .expect("failure store lock poisoned")
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Occurrence count for one pair, if it ever failed.
    pub fn frequency(&self, expression: &str, endpoint: Endpoint) -> Option<u64> {
        let key = FailureKey {
            expression: expression.to_string(),
            endpoint,
        };
        self.entries
            .read()
            .expect("failure store lock poisoned")
            .get(&key)
            .map(|entry| entry.frequency)
    }

    /// Snapshot every record, in unspecified order.
    pub fn records(&self) -> Vec<FailureRecord> {
        self.entries
            .read()
            .expect("failure store lock poisoned")
            .iter()
            .map(|(key, entry)| FailureRecord {
                expression: key.expression.clone(),
                endpoint: key.endpoint,
                frequency: entry.frequency,
                reason: entry.reason,
                last_seen: entry.last_seen,
            })
            .collect()
    }
}
