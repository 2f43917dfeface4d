//! Shopping List HTTP service.
//!
//! Configuration comes from `SHOPPING_LIST__*` environment variables. Without
//! a database section the service runs on the in-memory store.

use std::sync::Arc;

use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use shopping_list::adapters::http::{app_router, ShoppingHandlers};
use shopping_list::adapters::memory::InMemoryShoppingStore;
use shopping_list::adapters::postgres::PostgresShoppingStore;
use shopping_list::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // ── Configuration ──────────────────────────────────────────
    let config = AppConfig::load()?;
    init_tracing(&config);
    config.validate()?;

    // ── Storage ────────────────────────────────────────────────
    let handlers = match &config.database {
        Some(database) => {
            let pool = PostgresShoppingStore::connect(database).await.map_err(|e| {
                error!("Failed to connect to database: {}", e);
                e
            })?;
            if database.run_migrations {
                info!("Running database migrations...");
                PostgresShoppingStore::migrate(&pool).await?;
            }
            info!("Using PostgreSQL store");
            ShoppingHandlers::for_store(Arc::new(PostgresShoppingStore::new(pool)))
        }
        None => {
            warn!("No database configured, using in-memory store");
            ShoppingHandlers::for_store(Arc::new(InMemoryShoppingStore::new()))
        }
    };

    // ── HTTP ───────────────────────────────────────────────────
    let app = app_router(handlers, &config.server);
    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "Shopping list service listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Shutdown complete");
    Ok(())
}

/// `RUST_LOG` wins over the configured level. Production logs are JSON.
fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    if config.is_production() {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        return;
    }
    info!("Shutdown signal received");
}
