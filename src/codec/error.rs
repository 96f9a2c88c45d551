//! Codec error types.

use thiserror::Error;

/// Errors that can occur while decoding or encoding wire values
#[derive(Debug, Error)]
pub enum CodecError {
    /// Action envelope was not valid JSON or lacked its tag
    #[error("Invalid action envelope: {0}")]
    InvalidAction(#[source] serde_json::Error),

    /// Payload of a recognized kind was neither an object nor null
    #[error("Payload of '{tag}' must be an object, found {found}")]
    InvalidPayload { tag: String, found: String },

    /// A magnitude the tagged kind uses was not a number
    #[error("Magnitude '{key}' must be a number, found {found}")]
    InvalidMagnitude { key: &'static str, found: String },

    /// Snapshot was not valid JSON or lacked a resource field
    #[error("Invalid snapshot: {0}")]
    InvalidSnapshot(#[source] serde_json::Error),

    /// Snapshot could not be written as JSON
    #[error("Snapshot encoding failed: {0}")]
    EncodingFailed(#[source] serde_json::Error),
}
