//! Proof envelope normalization
//!
//! The proof SDK hands back its result in several shapes: a JSON string, an
//! array of proofs (cascading providers), or a single proof object. The
//! attested `publicData` usually sits at the top of the proof, but some
//! providers only embed it inside `claimData.context` as a JSON string.
//!
//! [`extract_public_data`] reduces any of these to the `publicData` value,
//! which then goes through the normal request boundary.

use serde_json::{Map, Value};
use thiserror::Error;

use crate::request::has_address_array;

/// Why a proof envelope yielded no usable `publicData`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProofError {
    /// Not an object after normalization (or an empty proof array)
    #[error("Invalid proof format received.")]
    InvalidFormat,

    /// `publicData` present, but neither it nor `claimData.context` has an address array
    #[error("Proof received but publicData format is invalid.")]
    InvalidPublicData,

    /// Object or array proof without any `publicData`
    #[error("Proof received but could not extract address data.")]
    MissingAddressData,
}

/// Reduce the SDK payload to a single proof value.
///
/// Strings are parsed as JSON, falling back to `{"message": <string>}`;
/// arrays yield their first element.
pub fn normalize_proof(payload: Value) -> Result<Value, ProofError> {
    match payload {
        Value::String(s) => Ok(serde_json::from_str(&s).unwrap_or_else(|_| {
            let mut message = Map::new();
            message.insert("message".to_string(), Value::String(s));
            Value::Object(message)
        })),
        Value::Array(mut proofs) => {
            if proofs.is_empty() {
                Err(ProofError::InvalidFormat)
            } else {
                Ok(proofs.swap_remove(0))
            }
        }
        other => Ok(other),
    }
}

/// Locate the `publicData` value inside a raw SDK payload.
pub fn extract_public_data(payload: Value) -> Result<Value, ProofError> {
    let proof = normalize_proof(payload)?;

    match proof.get("publicData") {
        Some(public_data) if is_truthy(public_data) => {
            if has_address_array(public_data) {
                return Ok(public_data.clone());
            }
            public_data_from_context(&proof).ok_or(ProofError::InvalidPublicData)
        }
        _ if proof.is_object() || proof.is_array() => Err(ProofError::MissingAddressData),
        _ => Err(ProofError::InvalidFormat),
    }
}

/// `claimData.context` is a JSON-encoded string that may carry `publicData`.
fn public_data_from_context(proof: &Value) -> Option<Value> {
    let context = proof.get("claimData")?.get("context")?.as_str()?;
    let mut parsed: Value = serde_json::from_str(context).ok()?;
    parsed
        .as_object_mut()?
        .remove("publicData")
        .filter(is_truthy)
}

/// JSON truthiness: everything except null, false, 0 and "".
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
