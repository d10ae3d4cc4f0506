//! FitSync backend
//!
//! Serves plan lookups, signup profiles and daily progress tracking.
//!
//! ## Architecture
//!
//! - Routes: HTTP request handling and routing
//! - Services: validation, locking, event publication
//! - Repositories: key-value persistence and the seeded plan catalog
//! - Engine: plan derivation in `fitsync-shared`

use anyhow::Result;
use fitsync_backend::{
    config,
    repositories::{KeyValueStore, MemoryStore, RedisStore},
    routes,
    services::spawn_event_logger,
    state::AppState,
};
use metrics_exporter_prometheus::PrometheusBuilder;
use redis::aio::ConnectionManager;
use std::sync::Arc;
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    init_tracing();

    let config = config::AppConfig::load()?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        env = if config::AppConfig::is_production() { "production" } else { "development" },
        derive_on_miss = config.plans.derive_on_miss,
        "Starting FitSync backend"
    );

    let store = open_store(&config.redis).await;
    info!(store = store.name(), "Profile store ready");

    let mut state = AppState::new(store, config.clone());
    match PrometheusBuilder::new().install_recorder() {
        Ok(handle) => state = state.with_metrics(handle),
        Err(e) => warn!("Failed to install metrics recorder: {}. /metrics disabled.", e),
    }

    let event_logger = spawn_event_logger(state.events());

    let app = routes::create_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    info!(address = %addr, "Server listening");

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    event_logger.abort();
    info!("Server shutdown complete");
    Ok(())
}

/// Pick the profile store. Redis when enabled and reachable, memory otherwise.
async fn open_store(redis: &config::RedisConfig) -> Arc<dyn KeyValueStore> {
    if redis.enabled {
        if let Some(conn) = connect_redis(&redis.url).await {
            return Arc::new(RedisStore::new(conn));
        }
        warn!("Falling back to in-memory store; profiles will not survive a restart");
    }
    Arc::new(MemoryStore::new())
}

/// Connect to Redis with graceful fallback
async fn connect_redis(url: &str) -> Option<ConnectionManager> {
    info!("Connecting to Redis...");

    match redis::Client::open(url) {
        Ok(client) => match ConnectionManager::new(client).await {
            Ok(conn) => {
                info!("Redis connection established");
                Some(conn)
            }
            Err(e) => {
                warn!("Failed to connect to Redis: {}", e);
                None
            }
        },
        Err(e) => {
            warn!("Invalid Redis URL: {}", e);
            None
        }
    }
}

/// Initialize tracing/logging
fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if config::AppConfig::is_production() {
            "fitsync_backend=info,tower_http=info".into()
        } else {
            "fitsync_backend=debug,tower_http=debug".into()
        }
    });

    let subscriber = tracing_subscriber::registry().with(env_filter);

    if config::AppConfig::is_production() {
        subscriber.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        subscriber.with(tracing_subscriber::fmt::layer().pretty()).init();
    }
}

/// Resolves on Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, starting graceful shutdown");
        }
        _ = terminate => {
            info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
