//! Guard predicates over resource snapshots.
//!
//! Guards are pure boolean functions. A session uses them to decide
//! whether a repeated action should keep running.

use super::snapshot::{Resource, ResourceSnapshot};

/// Pure predicate over a snapshot.
///
/// # Example
///
/// ```rust
/// use habitat::core::{Guard, Resource, ResourceSnapshot};
///
/// let has_power = Guard::above(Resource::Energy, 20);
///
/// assert!(has_power.check(&ResourceSnapshot::FULL));
/// assert!(!has_power.check(&ResourceSnapshot::new(100, 100, 20)));
/// ```
pub struct Guard {
    predicate: Box<dyn Fn(&ResourceSnapshot) -> bool + Send + Sync>,
}

impl Guard {
    /// Create a guard from a pure predicate.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&ResourceSnapshot) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Box::new(predicate),
        }
    }

    /// Passes while `resource` is strictly greater than `level`.
    pub fn above(resource: Resource, level: i64) -> Self {
        Self::new(move |s| s.level(resource) > level)
    }

    pub fn check(&self, snapshot: &ResourceSnapshot) -> bool {
        (self.predicate)(snapshot)
    }
}
