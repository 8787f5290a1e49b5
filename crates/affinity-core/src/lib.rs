//! Regional Affinity Core
//!
//! Classifies a delivery-address history into a regional affinity tier.
//! Everything here is pure: no I/O, no shared state, no clocks.
//!
//! - `classify` - data model and the tier classifier
//! - `region` - region profiles (keyword list, tier labels, placeholder name)
//! - `request` - request boundary: raw body to a validated address list
//! - `proof` - proof envelope normalization for SDK callback payloads
//! - `card` - per-tier card styling and the tier table
//!
//! # Example
//!
//! ```rust
//! use affinity_core::{classify, parse_verify_request, Tier};
//!
//! let body = br#"{"publicData":{"address":[{"id":"1","city":"Mumbai","addressCategory":1}]}}"#;
//! let addresses = parse_verify_request(body).unwrap();
//! let result = classify(&addresses);
//! assert_eq!(result.tier_code, Tier::NonRegional);
//! ```

pub mod card;
pub mod classify;
pub mod proof;
pub mod region;
pub mod request;

// Re-export main types at crate root
pub use card::{CardStyle, TierDescriptor};
pub use classify::{classify, Address, AddressList, ClassificationResult, Tier};
pub use proof::{extract_public_data, normalize_proof, ProofError};
pub use region::{RegionProfile, TierLabels, KERALA};
pub use request::{
    address_list_from_public_data, parse_verify_request, PublicData, RequestError,
};
