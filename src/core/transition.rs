//! The resource transition engine.
//!
//! `transition` is a pure function: the same snapshot and action always
//! produce the same result, and the input snapshot is never modified.

use super::action::ResourceAction;
use super::defaults::ActionDefaults;
use super::snapshot::{clamp_level, ResourceSnapshot};

/// Apply `action` to `snapshot` using the standard default magnitudes.
///
/// Every field the action computes is clamped to `[0, 100]`. Fields the
/// action does not touch are copied unchanged, even if the caller handed
/// in an out-of-range value for them. Unrecognized actions return the
/// input unchanged.
///
/// # Example
///
/// ```rust
/// use habitat::core::{transition, ResourceAction, ResourceSnapshot};
///
/// let next = transition(&ResourceSnapshot::FULL, &ResourceAction::consume_water());
/// assert_eq!(next, ResourceSnapshot::new(90, 100, 100));
///
/// let low = ResourceSnapshot::new(5, 100, 100);
/// let next = transition(&low, &ResourceAction::consume_water_by(50));
/// assert_eq!(next.water, 0);
/// ```
pub fn transition(snapshot: &ResourceSnapshot, action: &ResourceAction) -> ResourceSnapshot {
    transition_with(&ActionDefaults::STANDARD, snapshot, action)
}

/// Apply `action` to `snapshot`, taking missing magnitudes from `defaults`.
pub fn transition_with(
    defaults: &ActionDefaults,
    snapshot: &ResourceSnapshot,
    action: &ResourceAction,
) -> ResourceSnapshot {
    let current = *snapshot;

    match action {
        ResourceAction::ConsumeWater { amount } => ResourceSnapshot {
            water: consume(current.water, amount.unwrap_or(defaults.water)),
            ..current
        },
        ResourceAction::ConsumeOxygen { amount } => ResourceSnapshot {
            oxygen: consume(current.oxygen, amount.unwrap_or(defaults.oxygen)),
            ..current
        },
        ResourceAction::ConsumeEnergy { amount } => ResourceSnapshot {
            energy: consume(current.energy, amount.unwrap_or(defaults.energy)),
            ..current
        },
        ResourceAction::ConsumeWaterAndOxygen {
            water_amount,
            oxygen_amount,
        } => ResourceSnapshot {
            water: consume(current.water, water_amount.unwrap_or(defaults.paired_water)),
            oxygen: consume(
                current.oxygen,
                oxygen_amount.unwrap_or(defaults.paired_oxygen),
            ),
            ..current
        },
        ResourceAction::GenerateOxygenAndConsumeEnergy {
            oxygen_amount,
            energy_cost,
        } => ResourceSnapshot {
            oxygen: produce(
                current.oxygen,
                oxygen_amount.unwrap_or(defaults.oxygen_generated),
            ),
            energy: consume(
                current.energy,
                energy_cost.unwrap_or(defaults.generation_cost),
            ),
            ..current
        },
        ResourceAction::ResetResources => ResourceSnapshot::FULL,
        ResourceAction::Unrecognized { .. } => current,
    }
}

fn consume(level: i64, amount: i64) -> i64 {
    clamp_level(level.saturating_sub(amount))
}

fn produce(level: i64, amount: i64) -> i64 {
    clamp_level(level.saturating_add(amount))
}
