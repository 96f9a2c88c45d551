//! Transition history for a habitat session.
//!
//! `record` is pure: it returns a new history and leaves the original
//! untouched. Sessions that own their history append with `push`.

use super::snapshot::ResourceSnapshot;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of one applied action.
///
/// # Example
///
/// ```rust
/// use habitat::core::{ResourceSnapshot, TransitionRecord};
/// use chrono::Utc;
///
/// let record = TransitionRecord {
///     sequence: 1,
///     action: "CONSUME_WATER".to_string(),
///     from: ResourceSnapshot::FULL,
///     to: ResourceSnapshot::new(90, 100, 100),
///     timestamp: Utc::now(),
/// };
/// assert!(record.changed());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransitionRecord {
    /// Position of this record in its session, starting at 1
    pub sequence: u64,
    /// Wire tag of the applied action
    pub action: String,
    /// Snapshot before the action
    pub from: ResourceSnapshot,
    /// Snapshot after the action
    pub to: ResourceSnapshot,
    /// When the action was applied
    pub timestamp: DateTime<Utc>,
}

impl TransitionRecord {
    /// Whether the action altered any resource level.
    pub fn changed(&self) -> bool {
        self.from != self.to
    }
}

/// Ordered history of applied actions.
///
/// # Example
///
/// ```rust
/// use habitat::core::{ResourceSnapshot, TransitionHistory, TransitionRecord};
/// use chrono::Utc;
///
/// let history = TransitionHistory::new();
/// let history = history.record(TransitionRecord {
///     sequence: 1,
///     action: "CONSUME_ENERGY".to_string(),
///     from: ResourceSnapshot::FULL,
///     to: ResourceSnapshot::new(100, 100, 85),
///     timestamp: Utc::now(),
/// });
///
/// let path = history.get_path();
/// assert_eq!(path.len(), 2);
/// assert_eq!(path[1].energy, 85);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TransitionHistory {
    transitions: Vec<TransitionRecord>,
}

impl TransitionHistory {
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    pub fn record(&self, record: TransitionRecord) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(record);
        Self { transitions }
    }

    /// Append a transition in place.
    pub fn push(&mut self, record: TransitionRecord) {
        self.transitions.push(record);
    }

    /// Snapshots traversed: the first `from`, then every `to`.
    pub fn get_path(&self) -> Vec<&ResourceSnapshot> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for record in &self.transitions {
            path.push(&record.to);
        }
        path
    }

    /// Time between the first and last recorded transitions.
    ///
    /// Returns `None` for an empty history.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.first(), self.transitions.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    pub fn transitions(&self) -> &[TransitionRecord] {
        &self.transitions
    }

    pub fn last(&self) -> Option<&TransitionRecord> {
        self.transitions.last()
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}
