//! Actions: tagged requests that describe one resource transition.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind tag of a recognized action.
///
/// Tags are the stable names a dispatch origin uses on the wire.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionKind {
    ConsumeWater,
    ConsumeOxygen,
    ConsumeEnergy,
    ConsumeWaterAndOxygen,
    GenerateOxygenAndConsumeEnergy,
    ResetResources,
}

impl ActionKind {
    pub const ALL: [ActionKind; 6] = [
        ActionKind::ConsumeWater,
        ActionKind::ConsumeOxygen,
        ActionKind::ConsumeEnergy,
        ActionKind::ConsumeWaterAndOxygen,
        ActionKind::GenerateOxygenAndConsumeEnergy,
        ActionKind::ResetResources,
    ];

    /// Wire tag for this kind.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::ConsumeWater => "CONSUME_WATER",
            Self::ConsumeOxygen => "CONSUME_OXYGEN",
            Self::ConsumeEnergy => "CONSUME_ENERGY",
            Self::ConsumeWaterAndOxygen => "CONSUME_WATER_AND_OXYGEN",
            Self::GenerateOxygenAndConsumeEnergy => "GENERATE_OXYGEN_AND_CONSUME_ENERGY",
            Self::ResetResources => "RESET_RESOURCES",
        }
    }

    /// Look up a kind by wire tag. Returns `None` for tags this crate
    /// does not know.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.tag() == tag)
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// A request to transform a snapshot.
///
/// Each variant carries only the magnitudes relevant to it. A `None`
/// magnitude falls back to the kind's default (see
/// [`ActionDefaults`](crate::core::ActionDefaults)).
///
/// `Unrecognized` stands for a kind the dispatch origin named but this
/// crate does not know; applying it leaves the snapshot unchanged.
///
/// # Example
///
/// ```rust
/// use habitat::core::{ActionKind, ResourceAction};
///
/// let action = ResourceAction::consume_water_by(20);
/// assert_eq!(action.kind(), Some(ActionKind::ConsumeWater));
/// assert_eq!(action.tag(), "CONSUME_WATER");
///
/// let unknown = ResourceAction::unrecognized("VENT_AIRLOCK");
/// assert_eq!(unknown.kind(), None);
/// assert_eq!(unknown.tag(), "VENT_AIRLOCK");
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum ResourceAction {
    ConsumeWater {
        amount: Option<i64>,
    },
    ConsumeOxygen {
        amount: Option<i64>,
    },
    ConsumeEnergy {
        amount: Option<i64>,
    },
    ConsumeWaterAndOxygen {
        water_amount: Option<i64>,
        oxygen_amount: Option<i64>,
    },
    GenerateOxygenAndConsumeEnergy {
        oxygen_amount: Option<i64>,
        energy_cost: Option<i64>,
    },
    ResetResources,
    Unrecognized {
        tag: String,
    },
}

impl ResourceAction {
    pub fn consume_water() -> Self {
        Self::ConsumeWater { amount: None }
    }

    pub fn consume_water_by(amount: i64) -> Self {
        Self::ConsumeWater {
            amount: Some(amount),
        }
    }

    pub fn consume_oxygen() -> Self {
        Self::ConsumeOxygen { amount: None }
    }

    pub fn consume_oxygen_by(amount: i64) -> Self {
        Self::ConsumeOxygen {
            amount: Some(amount),
        }
    }

    pub fn consume_energy() -> Self {
        Self::ConsumeEnergy { amount: None }
    }

    pub fn consume_energy_by(amount: i64) -> Self {
        Self::ConsumeEnergy {
            amount: Some(amount),
        }
    }

    pub fn consume_water_and_oxygen() -> Self {
        Self::ConsumeWaterAndOxygen {
            water_amount: None,
            oxygen_amount: None,
        }
    }

    pub fn consume_water_and_oxygen_by(water_amount: i64, oxygen_amount: i64) -> Self {
        Self::ConsumeWaterAndOxygen {
            water_amount: Some(water_amount),
            oxygen_amount: Some(oxygen_amount),
        }
    }

    pub fn generate_oxygen() -> Self {
        Self::GenerateOxygenAndConsumeEnergy {
            oxygen_amount: None,
            energy_cost: None,
        }
    }

    pub fn generate_oxygen_by(oxygen_amount: i64, energy_cost: i64) -> Self {
        Self::GenerateOxygenAndConsumeEnergy {
            oxygen_amount: Some(oxygen_amount),
            energy_cost: Some(energy_cost),
        }
    }

    pub fn reset() -> Self {
        Self::ResetResources
    }

    pub fn unrecognized(tag: impl Into<String>) -> Self {
        Self::Unrecognized { tag: tag.into() }
    }

    /// Kind of this action, or `None` when unrecognized.
    pub fn kind(&self) -> Option<ActionKind> {
        match self {
            Self::ConsumeWater { .. } => Some(ActionKind::ConsumeWater),
            Self::ConsumeOxygen { .. } => Some(ActionKind::ConsumeOxygen),
            Self::ConsumeEnergy { .. } => Some(ActionKind::ConsumeEnergy),
            Self::ConsumeWaterAndOxygen { .. } => Some(ActionKind::ConsumeWaterAndOxygen),
            Self::GenerateOxygenAndConsumeEnergy { .. } => {
                Some(ActionKind::GenerateOxygenAndConsumeEnergy)
            }
            Self::ResetResources => Some(ActionKind::ResetResources),
            Self::Unrecognized { .. } => None,
        }
    }

    /// Wire tag of this action, including the original tag of an
    /// unrecognized one.
    pub fn tag(&self) -> &str {
        match self {
            Self::Unrecognized { tag } => tag.as_str(),
            other => other.kind().map(|k| k.tag()).unwrap_or_default(),
        }
    }
}
