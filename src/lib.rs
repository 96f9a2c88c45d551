//! Habitat: a pure functional resource economy for off-world habitats
//!
//! Habitat follows a "pure core, imperative shell" layout. The core is a
//! deterministic transition engine that maps a resource snapshot and an
//! action to a new snapshot, clamping every computed level to `[0, 100]`.
//! Sessions, wire decoding and input validation sit around it.
//!
//! # Core Concepts
//!
//! - **Snapshot**: Immutable water/oxygen/energy levels via `ResourceSnapshot`
//! - **Action**: A closed set of typed requests via `ResourceAction`
//! - **Transition**: The pure function `transition(snapshot, action)`
//! - **Session**: A caller-owned loop holding one authoritative snapshot
//!
//! # Example
//!
//! ```rust
//! use habitat::core::{transition, ResourceAction, ResourceSnapshot};
//!
//! let start = ResourceSnapshot::default();
//! let next = transition(&start, &ResourceAction::consume_water_and_oxygen_by(20, 15));
//! assert_eq!(next, ResourceSnapshot::new(80, 85, 100));
//!
//! let next = transition(&next, &ResourceAction::reset());
//! assert_eq!(next, ResourceSnapshot::FULL);
//! ```

pub mod bounds;
pub mod codec;
pub mod core;
pub mod session;

// Re-export commonly used types
pub use core::{transition, ActionKind, Resource, ResourceAction, ResourceSnapshot};
pub use session::{ResourceSession, SessionError};
