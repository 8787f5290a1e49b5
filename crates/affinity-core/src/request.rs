//! Verification request boundary
//!
//! Turns a raw request body into an [`AddressList`], rejecting anything the
//! classifier must never see. The three rejection classes are kept distinct
//! so callers can report them separately.

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::classify::{Address, AddressList};

/// Why a verification request was rejected before classification.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    /// Body is not JSON at all
    #[error("Invalid JSON in request body")]
    InvalidJson,

    /// JSON, but not `{ "publicData": { "address": [...] } }`
    #[error("Invalid request: publicData with address array is required")]
    Malformed,

    /// Well-formed, but the address array is empty
    #[error("No addresses found in the provided data")]
    EmptyAddressList,
}

/// The attested public data carried by a proof.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PublicData {
    pub address: Vec<Address>,
}

/// Parse a request body of the form `{ "publicData": { "address": [...] } }`.
pub fn parse_verify_request(body: &[u8]) -> Result<AddressList, RequestError> {
    let value: Value = serde_json::from_slice(body).map_err(|_| RequestError::InvalidJson)?;
    let public_data = value.get("publicData").ok_or(RequestError::Malformed)?;
    address_list_from_public_data(public_data)
}

/// Validate a `publicData` value and extract its non-empty address list.
pub fn address_list_from_public_data(public_data: &Value) -> Result<AddressList, RequestError> {
    if !has_address_array(public_data) {
        return Err(RequestError::Malformed);
    }

    let data = PublicData::deserialize(public_data).map_err(|_| RequestError::Malformed)?;
    AddressList::new(data.address).ok_or(RequestError::EmptyAddressList)
}

/// Structural check: an object whose `address` field is an array.
pub fn has_address_array(public_data: &Value) -> bool {
    public_data
        .get("address")
        .is_some_and(|addresses| addresses.is_array())
}
