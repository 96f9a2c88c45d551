//! Resource snapshot: the immutable triple of habitat resource levels.
//!
//! A snapshot is a plain value. Transitions never mutate one in place;
//! they build a new snapshot from the old.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lowest level a computed resource field may hold.
pub const LEVEL_MIN: i64 = 0;

/// Highest level a computed resource field may hold.
pub const LEVEL_MAX: i64 = 100;

/// Restrict a computed level to `[LEVEL_MIN, LEVEL_MAX]`.
///
/// # Example
///
/// ```rust
/// use habitat::core::clamp_level;
///
/// assert_eq!(clamp_level(-45), 0);
/// assert_eq!(clamp_level(105), 100);
/// assert_eq!(clamp_level(42), 42);
/// ```
pub fn clamp_level(value: i64) -> i64 {
    value.clamp(LEVEL_MIN, LEVEL_MAX)
}

/// One of the three depletable habitat resources.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Resource {
    Water,
    Oxygen,
    Energy,
}

impl Resource {
    /// All resources, in snapshot field order.
    pub const ALL: [Resource; 3] = [Resource::Water, Resource::Oxygen, Resource::Energy];

    /// Field name of this resource within a snapshot.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Water => "water",
            Self::Oxygen => "oxygen",
            Self::Energy => "energy",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Levels of water, oxygen and energy at one point in a habitat session.
///
/// Fields are wide signed integers so that a caller-supplied snapshot
/// which is already out of range can be represented faithfully. Every
/// field a transition computes is clamped back into range; fields it
/// does not touch are carried over as-is.
///
/// # Example
///
/// ```rust
/// use habitat::core::{Resource, ResourceSnapshot};
///
/// let full = ResourceSnapshot::default();
/// assert_eq!(full, ResourceSnapshot::FULL);
/// assert_eq!(full.level(Resource::Oxygen), 100);
///
/// let drained = full.with_level(Resource::Water, 0);
/// assert!(drained.is_depleted(Resource::Water));
/// assert_eq!(full.level(Resource::Water), 100); // original unchanged
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct ResourceSnapshot {
    pub water: i64,
    pub oxygen: i64,
    pub energy: i64,
}

impl ResourceSnapshot {
    /// Canonical initial and reset snapshot: every resource at 100.
    pub const FULL: ResourceSnapshot = ResourceSnapshot {
        water: LEVEL_MAX,
        oxygen: LEVEL_MAX,
        energy: LEVEL_MAX,
    };

    /// Build a snapshot from raw levels. No clamping is applied.
    pub const fn new(water: i64, oxygen: i64, energy: i64) -> Self {
        Self {
            water,
            oxygen,
            energy,
        }
    }

    /// Current level of one resource.
    pub fn level(&self, resource: Resource) -> i64 {
        match resource {
            Resource::Water => self.water,
            Resource::Oxygen => self.oxygen,
            Resource::Energy => self.energy,
        }
    }

    /// Return a copy with one resource replaced. No clamping is applied.
    pub fn with_level(&self, resource: Resource, value: i64) -> Self {
        let mut next = *self;
        match resource {
            Resource::Water => next.water = value,
            Resource::Oxygen => next.oxygen = value,
            Resource::Energy => next.energy = value,
        }
        next
    }

    /// Iterate `(resource, level)` pairs in field order.
    pub fn levels(&self) -> impl Iterator<Item = (Resource, i64)> + '_ {
        Resource::ALL.into_iter().map(|r| (r, self.level(r)))
    }

    /// Whether every field lies in `[LEVEL_MIN, LEVEL_MAX]`.
    pub fn is_within_bounds(&self) -> bool {
        self.levels()
            .all(|(_, v)| (LEVEL_MIN..=LEVEL_MAX).contains(&v))
    }

    /// Whether a resource has run out.
    pub fn is_depleted(&self, resource: Resource) -> bool {
        self.level(resource) <= LEVEL_MIN
    }
}

impl Default for ResourceSnapshot {
    fn default() -> Self {
        Self::FULL
    }
}

impl fmt::Display for ResourceSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "water={} oxygen={} energy={}",
            self.water, self.oxygen, self.energy
        )
    }
}
