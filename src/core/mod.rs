//! Pure resource model and transition engine.
//!
//! This module contains the pure functional core of the habitat:
//! - The resource snapshot and its canonical full value
//! - The closed set of resource actions and their default magnitudes
//! - The transition engine that maps snapshot + action to a new snapshot
//! - Immutable history and guard predicates used by sessions
//!
//! Nothing in this module performs I/O, logs, or reads the clock except
//! when a caller builds a `TransitionRecord`.

mod action;
mod defaults;
mod guard;
mod history;
mod snapshot;
mod transition;

pub use action::{ActionKind, ResourceAction};
pub use defaults::ActionDefaults;
pub use guard::Guard;
pub use history::{TransitionHistory, TransitionRecord};
pub use snapshot::{clamp_level, Resource, ResourceSnapshot, LEVEL_MAX, LEVEL_MIN};
pub use transition::{transition, transition_with};
