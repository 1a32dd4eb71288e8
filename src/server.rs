//! HTTP server initialization and runtime setup.
//!
//! Handles store selection, database connection and migrations, and the Axum
//! server lifecycle including graceful shutdown.

use crate::config::{Config, StoreBackend};
use crate::domain::store::LinkStore;
use crate::infrastructure::persistence::{InMemoryLinkStore, PgLinkStore};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::Router;
use axum::http::StatusCode;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::signal;
use tokio::sync::oneshot;
use tower_http::timeout::TimeoutLayer;
use tracing::{error, info, warn};

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - The configured link store (PostgreSQL pool + migrations, or in-memory)
/// - Axum HTTP server with a per-request timeout
///
/// Returns after a shutdown signal once in-flight requests have drained, or
/// after the grace period has elapsed.
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let store = build_store(&config).await?;
    let state = AppState::with_store(store);

    let app = app_router(state).layer(request_timeout_layer(config.request_timeout()));

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = TcpListener::bind(addr).await?;
    info!("Listening on http://{addr}");

    serve(listener, app, config.shutdown_grace()).await
}

/// Bounds each request to `timeout`; an overrun is answered with
/// `503 Service Unavailable`.
fn request_timeout_layer(timeout: Duration) -> TimeoutLayer {
    TimeoutLayer::with_status_code(StatusCode::SERVICE_UNAVAILABLE, timeout)
}

async fn build_store(config: &Config) -> Result<Arc<dyn LinkStore>> {
    match config.store_backend {
        StoreBackend::Postgres => {
            let pool = PgPoolOptions::new()
                .max_connections(config.db_max_connections)
                .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
                .connect(&config.database_url)
                .await
                .context("Failed to connect to database")?;
            info!("Connected to database");

            sqlx::migrate!("./migrations")
                .run(&pool)
                .await
                .context("Failed to migrate")?;

            Ok(Arc::new(PgLinkStore::new(
                Arc::new(pool),
                config.store_timeouts(),
            )))
        }
        StoreBackend::Memory => {
            warn!("Using in-memory link store, links are lost on restart");
            Ok(Arc::new(InMemoryLinkStore::new()))
        }
    }
}

/// Serves `app` until a shutdown signal, then drains for at most `grace`.
async fn serve(listener: TcpListener, app: Router, grace: Duration) -> Result<()> {
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    let server = axum::serve(listener, app).with_graceful_shutdown(async move {
        let _ = shutdown_rx.await;
    });
    let mut server_task = tokio::spawn(async move { server.await });

    tokio::select! {
        result = &mut server_task => {
            result??;
            return Ok(());
        }
        () = shutdown_signal() => {}
    }

    info!(
        grace_secs = grace.as_secs(),
        "Shutdown signal received, draining in-flight requests"
    );
    let _ = shutdown_tx.send(());

    match tokio::time::timeout(grace, &mut server_task).await {
        Ok(result) => {
            result??;
            info!("Server stopped");
        }
        Err(_) => {
            warn!("Graceful shutdown timed out, aborting remaining connections");
            server_task.abort();
        }
    }

    Ok(())
}

/// Completes on Ctrl-C, or on SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to listen for Ctrl-C: {}", e);
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
                error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
}
