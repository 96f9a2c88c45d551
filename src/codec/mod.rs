//! JSON wire format used by dispatch origins and presentation layers.
//!
//! An action arrives as an envelope with a string tag and an optional
//! payload of named magnitudes:
//!
//! ```json
//! {"type": "CONSUME_WATER_AND_OXYGEN", "payload": {"waterAmount": 20, "oxygenAmount": 15}}
//! ```
//!
//! Payload keys that do not belong to the tagged kind are ignored, and a
//! tag this crate does not know decodes to [`ResourceAction::Unrecognized`]
//! without its payload being looked at. A kind's own magnitude must be a
//! JSON number (or null/absent for the default); out-of-range numbers
//! saturate into `i64` and fractions truncate toward zero.
//!
//! Snapshots must carry all three resource fields. A snapshot missing
//! `water`, `oxygen` or `energy` is rejected; no field is defaulted.

use crate::core::{ActionKind, ResourceAction, ResourceSnapshot};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub mod error;

pub use error::CodecError;

/// Tagged action as it travels on the wire.
///
/// The payload is kept as raw JSON until the tag is resolved, so an
/// unknown tag or a key another kind owns never fails decoding.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ActionEnvelope {
    #[serde(rename = "type")]
    pub tag: String,
    #[serde(default)]
    pub payload: Option<Value>,
}

impl ActionEnvelope {
    /// Convert to a typed action, reading only the magnitudes the tagged
    /// kind uses.
    pub fn into_action(self) -> Result<ResourceAction, CodecError> {
        let Some(kind) = ActionKind::from_tag(&self.tag) else {
            return Ok(ResourceAction::Unrecognized { tag: self.tag });
        };
        if kind == ActionKind::ResetResources {
            return Ok(ResourceAction::ResetResources);
        }

        let empty = Map::new();
        let payload = match &self.payload {
            None | Some(Value::Null) => &empty,
            Some(Value::Object(map)) => map,
            Some(other) => {
                return Err(CodecError::InvalidPayload {
                    tag: self.tag.clone(),
                    found: other.to_string(),
                })
            }
        };

        let action = match kind {
            ActionKind::ConsumeWater => ResourceAction::ConsumeWater {
                amount: magnitude(payload, "amount")?,
            },
            ActionKind::ConsumeOxygen => ResourceAction::ConsumeOxygen {
                amount: magnitude(payload, "amount")?,
            },
            ActionKind::ConsumeEnergy => ResourceAction::ConsumeEnergy {
                amount: magnitude(payload, "amount")?,
            },
            ActionKind::ConsumeWaterAndOxygen => ResourceAction::ConsumeWaterAndOxygen {
                water_amount: magnitude(payload, "waterAmount")?,
                oxygen_amount: magnitude(payload, "oxygenAmount")?,
            },
            ActionKind::GenerateOxygenAndConsumeEnergy => {
                ResourceAction::GenerateOxygenAndConsumeEnergy {
                    oxygen_amount: magnitude(payload, "oxygenAmount")?,
                    energy_cost: magnitude(payload, "energyCost")?,
                }
            }
            ActionKind::ResetResources => ResourceAction::ResetResources,
        };
        Ok(action)
    }
}

/// Read one magnitude from a payload.
///
/// Absent or null keys yield `None`. Numbers outside `i64` saturate to
/// `i64::MIN`/`i64::MAX` and fractional numbers truncate toward zero, so
/// oversized amounts reach the engine and are absorbed by clamping.
fn magnitude(payload: &Map<String, Value>, key: &'static str) -> Result<Option<i64>, CodecError> {
    match payload.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => {
            if let Some(v) = n.as_i64() {
                Ok(Some(v))
            } else if n.as_u64().is_some() {
                Ok(Some(i64::MAX))
            } else {
                // float-to-int `as` saturates
                Ok(n.as_f64().map(|f| f as i64))
            }
        }
        Some(other) => Err(CodecError::InvalidMagnitude {
            key,
            found: other.to_string(),
        }),
    }
}

impl From<&ResourceAction> for ActionEnvelope {
    fn from(action: &ResourceAction) -> Self {
        let mut payload = Map::new();
        let mut put = |key: &str, value: &Option<i64>| {
            if let Some(v) = value {
                payload.insert(key.to_string(), Value::from(*v));
            }
        };

        match action {
            ResourceAction::ConsumeWater { amount }
            | ResourceAction::ConsumeOxygen { amount }
            | ResourceAction::ConsumeEnergy { amount } => put("amount", amount),
            ResourceAction::ConsumeWaterAndOxygen {
                water_amount,
                oxygen_amount,
            } => {
                put("waterAmount", water_amount);
                put("oxygenAmount", oxygen_amount);
            }
            ResourceAction::GenerateOxygenAndConsumeEnergy {
                oxygen_amount,
                energy_cost,
            } => {
                put("oxygenAmount", oxygen_amount);
                put("energyCost", energy_cost);
            }
            ResourceAction::ResetResources | ResourceAction::Unrecognized { .. } => {}
        }

        Self {
            tag: action.tag().to_string(),
            payload: (!payload.is_empty()).then_some(Value::Object(payload)),
        }
    }
}

/// Decode an action envelope.
///
/// # Example
///
/// ```rust
/// use habitat::codec::decode_action;
/// use habitat::core::ResourceAction;
///
/// let action = decode_action(r#"{"type": "CONSUME_WATER", "payload": {"amount": 20}}"#).unwrap();
/// assert_eq!(action, ResourceAction::consume_water_by(20));
///
/// let unknown = decode_action(r#"{"type": "UNKNOWN_ACTION"}"#).unwrap();
/// assert_eq!(unknown, ResourceAction::unrecognized("UNKNOWN_ACTION"));
/// ```
pub fn decode_action(json: &str) -> Result<ResourceAction, CodecError> {
    let envelope: ActionEnvelope = serde_json::from_str(json).map_err(CodecError::InvalidAction)?;
    envelope.into_action()
}

/// Encode an action as an envelope.
pub fn encode_action(action: &ResourceAction) -> Result<String, CodecError> {
    serde_json::to_string(&ActionEnvelope::from(action)).map_err(CodecError::EncodingFailed)
}

/// Decode a snapshot, failing if any resource field is missing.
///
/// Values are not range-checked here; see [`crate::bounds`].
pub fn decode_snapshot(json: &str) -> Result<ResourceSnapshot, CodecError> {
    serde_json::from_str(json).map_err(CodecError::InvalidSnapshot)
}

pub fn encode_snapshot(snapshot: &ResourceSnapshot) -> Result<String, CodecError> {
    serde_json::to_string(snapshot).map_err(CodecError::EncodingFailed)
}
