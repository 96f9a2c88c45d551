//! Property-based tests for the transition engine.
//!
//! These tests use proptest to verify clamping, defaulting and isolation
//! properties across many randomly generated snapshots and magnitudes.

use habitat::bounds::check_bounds;
use habitat::core::{transition, ActionDefaults, Resource, ResourceAction, ResourceSnapshot};
use habitat::session::ResourceSession;
use proptest::prelude::*;

prop_compose! {
    fn in_range_snapshot()(water in 0..=100i64, oxygen in 0..=100i64, energy in 0..=100i64)
        -> ResourceSnapshot {
        ResourceSnapshot::new(water, oxygen, energy)
    }
}

prop_compose! {
    fn any_snapshot()(water in -500..=500i64, oxygen in -500..=500i64, energy in -500..=500i64)
        -> ResourceSnapshot {
        ResourceSnapshot::new(water, oxygen, energy)
    }
}

fn magnitude() -> impl Strategy<Value = Option<i64>> {
    prop::option::of(-200..=200i64)
}

fn arbitrary_action() -> impl Strategy<Value = ResourceAction> {
    prop_oneof![
        magnitude().prop_map(|amount| ResourceAction::ConsumeWater { amount }),
        magnitude().prop_map(|amount| ResourceAction::ConsumeOxygen { amount }),
        magnitude().prop_map(|amount| ResourceAction::ConsumeEnergy { amount }),
        (magnitude(), magnitude()).prop_map(|(water_amount, oxygen_amount)| {
            ResourceAction::ConsumeWaterAndOxygen {
                water_amount,
                oxygen_amount,
            }
        }),
        (magnitude(), magnitude()).prop_map(|(oxygen_amount, energy_cost)| {
            ResourceAction::GenerateOxygenAndConsumeEnergy {
                oxygen_amount,
                energy_cost,
            }
        }),
        Just(ResourceAction::ResetResources),
        "[A-Z_]{1,24}".prop_filter_map("recognized tag", |tag| {
            habitat::ActionKind::from_tag(&tag)
                .is_none()
                .then(|| ResourceAction::unrecognized(tag))
        }),
    ]
}

proptest! {
    #[test]
    fn consumption_floors_at_zero(state in in_range_snapshot(), amount in 0..=300i64) {
        let water = transition(&state, &ResourceAction::consume_water_by(amount));
        prop_assert_eq!(water.water, (state.water - amount).max(0));

        let oxygen = transition(&state, &ResourceAction::consume_oxygen_by(amount));
        prop_assert_eq!(oxygen.oxygen, (state.oxygen - amount).max(0));

        let energy = transition(&state, &ResourceAction::consume_energy_by(amount));
        prop_assert_eq!(energy.energy, (state.energy - amount).max(0));
    }

    #[test]
    fn paired_consumption_floors_each_field(
        state in in_range_snapshot(),
        water in 0..=300i64,
        oxygen in 0..=300i64,
    ) {
        let next = transition(&state, &ResourceAction::consume_water_and_oxygen_by(water, oxygen));
        prop_assert_eq!(next.water, (state.water - water).max(0));
        prop_assert_eq!(next.oxygen, (state.oxygen - oxygen).max(0));
        prop_assert_eq!(next.energy, state.energy);
    }

    #[test]
    fn generation_caps_oxygen_at_hundred(
        state in in_range_snapshot(),
        amount in 0..=300i64,
        cost in 0..=300i64,
    ) {
        let next = transition(&state, &ResourceAction::generate_oxygen_by(amount, cost));
        prop_assert_eq!(next.oxygen, (state.oxygen + amount).min(100));
        prop_assert_eq!(next.energy, (state.energy - cost).max(0));
        prop_assert_eq!(next.water, state.water);
    }

    #[test]
    fn missing_payload_uses_standard_defaults(state in in_range_snapshot()) {
        let d = ActionDefaults::STANDARD;
        prop_assert_eq!(
            transition(&state, &ResourceAction::consume_water()),
            transition(&state, &ResourceAction::consume_water_by(d.water))
        );
        prop_assert_eq!(
            transition(&state, &ResourceAction::consume_oxygen()),
            transition(&state, &ResourceAction::consume_oxygen_by(d.oxygen))
        );
        prop_assert_eq!(
            transition(&state, &ResourceAction::consume_energy()),
            transition(&state, &ResourceAction::consume_energy_by(d.energy))
        );
        prop_assert_eq!(
            transition(&state, &ResourceAction::consume_water_and_oxygen()),
            transition(&state, &ResourceAction::consume_water_and_oxygen_by(5, 5))
        );
        prop_assert_eq!(
            transition(&state, &ResourceAction::generate_oxygen()),
            transition(&state, &ResourceAction::generate_oxygen_by(10, 10))
        );
    }

    #[test]
    fn reset_always_yields_full(state in any_snapshot()) {
        prop_assert_eq!(transition(&state, &ResourceAction::reset()), ResourceSnapshot::FULL);
    }

    #[test]
    fn unrecognized_action_is_identity(state in any_snapshot(), tag in "[A-Z_]{1,24}") {
        let action = ResourceAction::unrecognized(tag);
        prop_assert_eq!(transition(&state, &action), state);
    }

    #[test]
    fn single_resource_actions_isolate_fields(state in any_snapshot(), amount in magnitude()) {
        let water = transition(&state, &ResourceAction::ConsumeWater { amount });
        prop_assert_eq!((water.oxygen, water.energy), (state.oxygen, state.energy));

        let oxygen = transition(&state, &ResourceAction::ConsumeOxygen { amount });
        prop_assert_eq!((oxygen.water, oxygen.energy), (state.water, state.energy));

        let energy = transition(&state, &ResourceAction::ConsumeEnergy { amount });
        prop_assert_eq!((energy.water, energy.oxygen), (state.water, state.oxygen));
    }

    #[test]
    fn in_range_input_stays_in_range(state in in_range_snapshot(), action in arbitrary_action()) {
        let next = transition(&state, &action);
        prop_assert!(check_bounds(&next).is_success());
    }

    #[test]
    fn computed_fields_are_always_clamped(state in any_snapshot(), action in arbitrary_action()) {
        let next = transition(&state, &action);
        for resource in Resource::ALL {
            if next.level(resource) != state.level(resource) {
                prop_assert!((0..=100).contains(&next.level(resource)));
            }
        }
    }

    #[test]
    fn transition_is_deterministic(state in any_snapshot(), action in arbitrary_action()) {
        prop_assert_eq!(transition(&state, &action), transition(&state, &action));
    }

    #[test]
    fn session_matches_folded_transitions(
        actions in prop::collection::vec(arbitrary_action(), 0..20)
    ) {
        let mut session = ResourceSession::new();
        let last = session.run(&actions);

        let expected = actions
            .iter()
            .fold(ResourceSnapshot::FULL, |state, action| transition(&state, action));

        prop_assert_eq!(last, expected);
        prop_assert_eq!(session.history().len(), actions.len());
    }
}

#[test]
fn reference_scenarios() {
    let cases = [
        (
            ResourceSnapshot::FULL,
            ResourceAction::consume_water(),
            ResourceSnapshot::new(90, 100, 100),
        ),
        (
            ResourceSnapshot::new(5, 100, 100),
            ResourceAction::consume_water_by(50),
            ResourceSnapshot::new(0, 100, 100),
        ),
        (
            ResourceSnapshot::FULL,
            ResourceAction::consume_water_and_oxygen_by(20, 15),
            ResourceSnapshot::new(80, 85, 100),
        ),
        (
            ResourceSnapshot::new(100, 95, 20),
            ResourceAction::generate_oxygen_by(10, 50),
            ResourceSnapshot::new(100, 100, 0),
        ),
        (
            ResourceSnapshot::new(50, 20, 0),
            ResourceAction::reset(),
            ResourceSnapshot::FULL,
        ),
        (
            ResourceSnapshot::new(50, 50, 50),
            ResourceAction::unrecognized("UNKNOWN_ACTION"),
            ResourceSnapshot::new(50, 50, 50),
        ),
    ];

    for (start, action, expected) in cases {
        assert_eq!(transition(&start, &action), expected, "action {}", action.tag());
    }
}
