//! HTTP endpoint handlers.
//!
//! Endpoints:
//! - POST /api/verify-proof   - Classify `{"publicData": {"address": [...]}}`
//! - POST /api/verify-reclaim - Classify a raw proof SDK payload
//! - GET  /api/tiers          - Tier table of the active region
//! - GET  /health             - Liveness plus request counters

use std::collections::HashMap;
use std::sync::Arc;

use affinity_core::{
    address_list_from_public_data, extract_public_data, parse_verify_request, AddressList,
    ClassificationResult, RegionProfile, RequestError, TierDescriptor,
};
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{Method, Uri};
use axum::Json;
use parking_lot::RwLock;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error, info, warn};

use crate::error::ApiError;

/// Request counters reported by /health.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct RequestStats {
    pub classified: u64,
    pub rejected: u64,
}

/// Handler context shared by every request.
pub struct HandlerContext {
    region: RegionProfile,
    stats: RwLock<RequestStats>,
}

impl HandlerContext {
    pub fn new(region: RegionProfile) -> Self {
        Self {
            region,
            stats: RwLock::new(RequestStats::default()),
        }
    }

    /// Classify and record the outcome. Shared by both verify endpoints.
    fn classify(
        &self,
        endpoint: &'static str,
        parsed: Result<AddressList, ApiError>,
    ) -> Result<Json<Value>, ApiError> {
        let addresses = match parsed {
            Ok(addresses) => addresses,
            Err(err) => {
                self.stats.write().rejected += 1;
                warn!(endpoint = endpoint, error = %err, "Rejected verification request");
                return Err(err);
            }
        };

        let result = self.region.classify(&addresses);
        info!(
            endpoint = endpoint,
            tier = %result.tier_code,
            score = result.score,
            regional = result.regional_address_count,
            total = result.total_address_count,
            "Classified address list"
        );

        let body = json_body(&result).inspect_err(|err| {
            error!(endpoint = endpoint, error = %err, "Failed to encode classification");
        })?;
        self.stats.write().classified += 1;
        Ok(body)
    }

    fn stats(&self) -> RequestStats {
        *self.stats.read()
    }
}

/// POST /api/verify-proof
pub async fn verify_proof(
    State(ctx): State<Arc<HandlerContext>>,
    body: Bytes,
) -> Result<Json<Value>, ApiError> {
    debug!(bytes = body.len(), "verify-proof request received");
    let parsed = parse_verify_request(&body).map_err(ApiError::from);
    ctx.classify("verify-proof", parsed)
}

/// POST /api/verify-reclaim
pub async fn verify_reclaim(
    State(ctx): State<Arc<HandlerContext>>,
    body: Bytes,
) -> Result<Json<Value>, ApiError> {
    debug!(bytes = body.len(), "verify-reclaim request received");
    ctx.classify("verify-reclaim", addresses_from_proof(&body))
}

fn addresses_from_proof(body: &[u8]) -> Result<AddressList, ApiError> {
    let payload: Value = serde_json::from_slice(body).map_err(|_| RequestError::InvalidJson)?;
    let public_data = extract_public_data(payload)?;
    Ok(address_list_from_public_data(&public_data)?)
}

/// GET /api/tiers
pub async fn tiers(State(ctx): State<Arc<HandlerContext>>) -> Json<Vec<TierDescriptor>> {
    Json(ctx.region.tier_table())
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub healthy: bool,
    pub message: String,
    pub details: HashMap<String, String>,
}

/// GET /health
pub async fn health(State(ctx): State<Arc<HandlerContext>>) -> Json<HealthResponse> {
    let stats = ctx.stats();

    let mut details = HashMap::new();
    details.insert("version".to_string(), env!("CARGO_PKG_VERSION").to_string());
    details.insert("region".to_string(), ctx.region.name.to_string());
    details.insert("classified".to_string(), stats.classified.to_string());
    details.insert("rejected".to_string(), stats.rejected.to_string());

    Json(HealthResponse {
        healthy: true,
        message: "OK".to_string(),
        details,
    })
}

/// Fallback for unknown routes.
pub async fn not_found(method: Method, uri: Uri) -> ApiError {
    debug!(%method, path = uri.path(), "Unknown endpoint");
    ApiError::NotFound {
        method: method.to_string(),
        path: uri.path().to_string(),
    }
}

fn json_body(result: &ClassificationResult) -> Result<Json<Value>, ApiError> {
    serde_json::to_value(result)
        .map(Json)
        .map_err(|e| ApiError::Internal(format!("failed to serialize response: {}", e)))
}
