//! Range validation for snapshots handed in by callers.
//!
//! The transition engine accepts any snapshot and only restores the range
//! of the fields it computes. Callers that want to reject bad input up
//! front use this module, which reports every offending field at once
//! through Stillwater's `Validation` instead of stopping at the first.
//!
//! # Example
//!
//! ```rust
//! use habitat::bounds::{check_bounds, list_violations};
//! use habitat::core::ResourceSnapshot;
//!
//! assert!(check_bounds(&ResourceSnapshot::FULL).is_success());
//!
//! let found = list_violations(&ResourceSnapshot::new(-1, 100, 101));
//! assert_eq!(found.len(), 2);
//! ```

pub mod rules;
pub mod violations;

pub use rules::{check_bounds, list_violations};
pub use violations::BoundsViolation;
