//! Address classification
//!
//! Decides how strongly an address history belongs to a region:
//!
//! - **Fully regional**: the primary address and every other address match
//! - **Regional with exceptions**: the primary address matches, others don't
//! - **Occasional regional**: no matching primary, but some addresses match
//! - **Non regional**: nothing matches
//!
//! # Example
//!
//! ```rust
//! use affinity_core::classify::{classify, Address, AddressList, Tier};
//!
//! let addresses = AddressList::new(vec![
//!     Address::new("1", "MG Road").with_city("Kochi").with_category(1),
//! ])
//! .unwrap();
//!
//! let result = classify(&addresses);
//! assert_eq!(result.tier_code, Tier::FullyRegional);
//! assert_eq!(result.score, 100);
//! ```

pub mod classifier;
mod types;

pub use classifier::classify;
pub use types::{Address, AddressList, ClassificationResult, Tier, PRIMARY_CATEGORY};
