//! Session error types.

use crate::bounds::BoundsViolation;
use crate::codec::CodecError;
use thiserror::Error;

/// Errors that can occur when starting or driving a session
#[derive(Debug, Error)]
pub enum SessionError {
    /// Starting snapshot had one or more fields out of range
    #[error("Snapshot rejected with {} violation(s): {}", .0.len(), join(.0))]
    InvalidSnapshot(Vec<BoundsViolation>),

    /// Wire input could not be decoded
    #[error(transparent)]
    Codec(#[from] CodecError),
}

fn join(violations: &[BoundsViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
