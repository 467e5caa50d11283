//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tracing::{info, warn};
use voicebox_common::{AppConfig, AppError, ServerConfig, StoreBackend};
use voicebox_core::KvStore;
use voicebox_service::ServiceContext;
use voicebox_store::{MemoryKvStore, RedisKvStore, RedisPool, RedisPoolConfig};

use crate::middleware::{apply_middleware, apply_middleware_with_config};
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the Axum application with the base middleware stack
///
/// No rate limiting; used directly by in-process test servers.
pub fn create_app(state: AppState) -> Router {
    let router = create_router().merge(health_routes());
    let router = apply_middleware(router);
    router.with_state(state)
}

/// Build the Axum application with rate limiting and configured CORS
///
/// Health routes sit outside the rate limiter so probes are never throttled.
pub fn create_app_with_config(state: AppState, config: &AppConfig) -> Router {
    let api = apply_middleware_with_config(
        create_router(),
        &config.rate_limit,
        &config.cors,
        config.app.env.is_production(),
    );
    let health = apply_middleware(health_routes());
    api.merge(health).with_state(state)
}

/// Initialize the configured store backend and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    let store: Arc<dyn KvStore> = match config.store.backend {
        StoreBackend::Memory => {
            info!("Using in-memory store");
            Arc::new(MemoryKvStore::new())
        }
        StoreBackend::Redis => {
            info!("Connecting to Redis...");
            let redis_config = RedisPoolConfig::from(&config.store.redis);
            let pool = RedisPool::new(redis_config)
                .map_err(|e| AppError::Storage(e.to_string()))?;
            pool.health_check()
                .await
                .map_err(|e| AppError::Storage(e.to_string()))?;
            info!("Redis connection established");
            Arc::new(RedisKvStore::new(pool))
        }
    };

    let service_context = ServiceContext::new(store);

    Ok(AppState::new(service_context, config))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {}: {}", addr, e)))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {}", e)))?;

    Ok(())
}

/// Resolve the socket address to bind from the server configuration
///
/// An unparseable host falls back to loopback rather than failing startup.
fn bind_address(config: &ServerConfig) -> SocketAddr {
    let host = config.host.parse::<IpAddr>().unwrap_or_else(|_| {
        warn!(
            host = %config.host,
            "Invalid API_HOST, falling back to 127.0.0.1"
        );
        IpAddr::V4(Ipv4Addr::LOCALHOST)
    });
    SocketAddr::new(host, config.port)
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = bind_address(&config.api);

    // Create app state
    let state = create_app_state(config.clone()).await?;

    // Build application
    let app = create_app_with_config(state, &config);

    // Run server
    run_server(app, addr).await
}
