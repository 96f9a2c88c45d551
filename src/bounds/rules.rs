//! Range checks for snapshots using Validation.

use crate::bounds::violations::BoundsViolation;
use crate::core::{ResourceSnapshot, LEVEL_MAX, LEVEL_MIN};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Check every field of `snapshot`, accumulating ALL violations.
///
/// Returns `Validation::Success(())` when each level lies in
/// `[LEVEL_MIN, LEVEL_MAX]`, otherwise `Validation::Failure` listing
/// every offending field in snapshot order.
pub fn check_bounds(snapshot: &ResourceSnapshot) -> Validation<(), NonEmptyVec<BoundsViolation>> {
    let checks: Vec<Validation<(), NonEmptyVec<BoundsViolation>>> = snapshot
        .levels()
        .map(|(resource, value)| -> Validation<(), NonEmptyVec<BoundsViolation>> {
            if (LEVEL_MIN..=LEVEL_MAX).contains(&value) {
                Validation::success(())
            } else {
                Validation::fail(BoundsViolation::OutOfRange {
                    resource,
                    value,
                    min: LEVEL_MIN,
                    max: LEVEL_MAX,
                })
            }
        })
        .collect();

    Validation::all_vec(checks).map(|_| ())
}

/// Collect the violations of `snapshot` into a plain list.
///
/// Empty when the snapshot is within bounds.
pub fn list_violations(snapshot: &ResourceSnapshot) -> Vec<BoundsViolation> {
    match check_bounds(snapshot) {
        Validation::Success(_) => Vec::new(),
        Validation::Failure(errors) => errors.iter().cloned().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Resource;

    #[test]
    fn full_snapshot_passes() {
        assert!(check_bounds(&ResourceSnapshot::FULL).is_success());
    }

    #[test]
    fn boundary_values_pass() {
        assert!(check_bounds(&ResourceSnapshot::new(0, 100, 0)).is_success());
    }

    #[test]
    fn accumulates_all_violations() {
        let result = check_bounds(&ResourceSnapshot::new(-5, 50, 130));

        match result {
            Validation::Failure(errors) => {
                assert_eq!(errors.len(), 2);

                let has_water = errors.iter().any(|e| e.resource() == Resource::Water);
                let has_energy = errors.iter().any(|e| e.resource() == Resource::Energy);
                let has_oxygen = errors.iter().any(|e| e.resource() == Resource::Oxygen);

                assert!(has_water);
                assert!(has_energy);
                assert!(!has_oxygen);
            }
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }

    #[test]
    fn violations_lists_offenders_in_field_order() {
        let found = list_violations(&ResourceSnapshot::new(101, -1, 50));
        assert_eq!(
            found,
            vec![
                BoundsViolation::OutOfRange {
                    resource: Resource::Water,
                    value: 101,
                    min: 0,
                    max: 100,
                },
                BoundsViolation::OutOfRange {
                    resource: Resource::Oxygen,
                    value: -1,
                    min: 0,
                    max: 100,
                },
            ]
        );
    }

    #[test]
    fn violations_empty_for_valid_snapshot() {
        assert!(list_violations(&ResourceSnapshot::new(1, 2, 3)).is_empty());
    }

    #[test]
    fn violation_message_names_field() {
        let found = list_violations(&ResourceSnapshot::new(100, 100, 250));
        assert_eq!(found[0].to_string(), "energy level 250 is outside [0, 100]");
    }
}
