//! Bounds violation errors.

use crate::core::Resource;
use thiserror::Error;

/// A snapshot field outside the permitted range
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoundsViolation {
    #[error("{resource} level {value} is outside [{min}, {max}]")]
    OutOfRange {
        resource: Resource,
        value: i64,
        min: i64,
        max: i64,
    },
}

impl BoundsViolation {
    pub fn resource(&self) -> Resource {
        match self {
            Self::OutOfRange { resource, .. } => *resource,
        }
    }
}
