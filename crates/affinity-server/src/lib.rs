//! Regional Affinity Server
//!
//! HTTP front for the affinity classifier. Accepts attested address data,
//! validates it at the boundary, and returns the tier assignment as JSON.
//!
//! ## Module Structure
//!
//! - `config` - Server configuration resolved from the CLI
//! - `error` - HTTP error mapping and startup errors
//! - `handlers` - HTTP endpoint handlers
//! - `service` - Router, listener binding and graceful shutdown

pub mod config;
pub mod error;
pub mod handlers;
pub mod service;

pub use config::ServerConfig;
pub use error::{ApiError, Error, Result};
pub use service::{router, run};
