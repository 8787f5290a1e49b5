//! Router assembly, listener binding and graceful shutdown.

use std::net::SocketAddr;
use std::sync::Arc;

use affinity_core::RegionProfile;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{info, warn};

use crate::config::{BindTarget, ServerConfig, MAX_PORT_RETRIES};
use crate::error::{Error, Result};
use crate::handlers::{self, HandlerContext};

/// Build the application router for a region.
pub fn router(region: RegionProfile, max_body_bytes: usize) -> Router {
    let ctx = Arc::new(HandlerContext::new(region));

    Router::new()
        .route("/api/verify-proof", post(handlers::verify_proof))
        .route("/api/verify-reclaim", post(handlers::verify_reclaim))
        .route("/api/tiers", get(handlers::tiers))
        .route("/health", get(handlers::health))
        .fallback(handlers::not_found)
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .with_state(ctx)
}

/// Bind the listener. A plain port is retried upwards while it is in use.
pub async fn bind(target: BindTarget) -> Result<TcpListener> {
    let mut port = match target {
        BindTarget::Address(addr) => return Ok(TcpListener::bind(addr).await?),
        BindTarget::Port(port) => port,
    };

    let mut attempts = 0;
    loop {
        attempts += 1;
        let addr = SocketAddr::from(([0, 0, 0, 0], port));
        match TcpListener::bind(addr).await {
            Ok(listener) => return Ok(listener),
            Err(e) if e.kind() == std::io::ErrorKind::AddrInUse && attempts < MAX_PORT_RETRIES => {
                let next = port.checked_add(1).ok_or_else(|| Error::Bind {
                    attempts,
                    port,
                    source: e,
                })?;
                warn!("Port {} in use, trying {}", port, next);
                port = next;
            }
            Err(e) if e.kind() == std::io::ErrorKind::AddrInUse => {
                return Err(Error::Bind {
                    attempts,
                    port,
                    source: e,
                });
            }
            Err(e) => return Err(e.into()),
        }
    }
}

/// Bind, serve until Ctrl+C / SIGTERM, then drain.
pub async fn run(config: ServerConfig, region: RegionProfile) -> Result<()> {
    let listener = bind(config.bind).await?;
    let local_addr = listener.local_addr()?;

    info!(
        region = region.name,
        max_body_bytes = config.max_body_bytes,
        "Starting HTTP server on {}",
        local_addr
    );

    let app = router(region, config.max_body_bytes);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                warn!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        }
        _ = terminate => {
            info!("Received terminate signal, shutting down");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn bind_explicit_address() {
        let listener = bind(BindTarget::Address("127.0.0.1:0".parse().unwrap()))
            .await
            .unwrap();
        assert!(listener.local_addr().unwrap().port() > 0);
    }

    #[tokio::test]
    async fn bind_skips_occupied_port() {
        let taken = TcpListener::bind("0.0.0.0:0").await.unwrap();
        let port = taken.local_addr().unwrap().port();

        // the next port may itself be taken on a busy host; only require a move
        let listener = bind(BindTarget::Port(port)).await.unwrap();
        assert_ne!(listener.local_addr().unwrap().port(), port);
    }
}
