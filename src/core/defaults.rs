//! Default magnitudes applied when an action omits its payload.

use serde::{Deserialize, Serialize};

/// Default magnitude for every action kind.
///
/// `ActionDefaults::STANDARD` is the canonical table. A habitat may load
/// a partial override from JSON; missing keys keep their standard value.
///
/// # Example
///
/// ```rust
/// use habitat::core::ActionDefaults;
///
/// let defaults: ActionDefaults = serde_json::from_str(r#"{"energy": 20}"#).unwrap();
/// assert_eq!(defaults.energy, 20);
/// assert_eq!(defaults.water, ActionDefaults::STANDARD.water);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ActionDefaults {
    /// Consume Water amount
    pub water: i64,
    /// Consume Oxygen amount
    pub oxygen: i64,
    /// Consume Energy amount
    pub energy: i64,
    /// Water taken by Consume Water and Oxygen
    pub paired_water: i64,
    /// Oxygen taken by Consume Water and Oxygen
    pub paired_oxygen: i64,
    /// Oxygen produced by Generate Oxygen and Consume Energy
    pub oxygen_generated: i64,
    /// Energy spent by Generate Oxygen and Consume Energy
    pub generation_cost: i64,
}

impl ActionDefaults {
    pub const STANDARD: ActionDefaults = ActionDefaults {
        water: 10,
        oxygen: 5,
        energy: 15,
        paired_water: 5,
        paired_oxygen: 5,
        oxygen_generated: 10,
        generation_cost: 10,
    };

    pub fn with_water(mut self, amount: i64) -> Self {
        self.water = amount;
        self
    }

    pub fn with_oxygen(mut self, amount: i64) -> Self {
        self.oxygen = amount;
        self
    }

    pub fn with_energy(mut self, amount: i64) -> Self {
        self.energy = amount;
        self
    }

    /// Set both magnitudes of Consume Water and Oxygen.
    pub fn with_paired(mut self, water: i64, oxygen: i64) -> Self {
        self.paired_water = water;
        self.paired_oxygen = oxygen;
        self
    }

    /// Set both magnitudes of Generate Oxygen and Consume Energy.
    pub fn with_generation(mut self, oxygen: i64, energy_cost: i64) -> Self {
        self.oxygen_generated = oxygen;
        self.generation_cost = energy_cost;
        self
    }
}

impl Default for ActionDefaults {
    fn default() -> Self {
        Self::STANDARD
    }
}
