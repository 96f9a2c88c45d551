//! Imperative shell around the pure transition engine.
//!
//! A [`ResourceSession`] is the caller-held context that owns the single
//! authoritative snapshot of a habitat and feeds it through
//! [`transition_with`](crate::core::transition_with) one action at a time.
//! There is no global state: each session is an ordinary value.
//!
//! # Example
//!
//! ```rust
//! use habitat::core::{Guard, Resource, ResourceAction, ResourceSnapshot};
//! use habitat::session::ResourceSession;
//!
//! let mut session = ResourceSession::new();
//! session.dispatch(&ResourceAction::consume_water());
//! assert_eq!(session.current(), &ResourceSnapshot::new(90, 100, 100));
//!
//! // Drain energy until it would drop to the reserve line.
//! let keep_reserve = Guard::above(Resource::Energy, 25);
//! session.run_while(&keep_reserve, &ResourceAction::consume_energy(), 10);
//! assert_eq!(session.current().energy, 25);
//! ```

mod error;
mod machine;

pub use error::SessionError;
pub use machine::ResourceSession;
