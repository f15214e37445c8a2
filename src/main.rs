//! News site server.
//!
//! ## Environment variables:
//! all of them are optional, see `config` for the defaults:
//! * DB_HOST, DB_USER, DB_PASSWORD, DB_NAME or DATABASE_URL
//! * DB_MAX_CONNECTIONS
//! * PORT
//! * STATIC_DIR - directory, where the browser bundle lives
//! * RUST_LOG

use anyhow::Context;
use axum::{extract::Request, ServiceExt};
use tower::Layer;
use tower_http::normalize_path::NormalizePathLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use uc_news::config::Config;
use uc_news::store::ArticleStore;
use uc_news::{app, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "uc_news=debug,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().context("invalid configuration")?;
    tracing::debug!(
        "Connecting to {} (max {} connections)",
        config.redacted_database_url(),
        config.max_connections
    );

    // no store, no server
    let store = ArticleStore::connect(&config.database_url, config.max_connections)
        .await
        .context("failed to open the news store")?;

    let state = AppState {
        store: store.clone(),
    };
    let app = NormalizePathLayer::trim_trailing_slash().layer(app(state, &config.static_dir));

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port))
        .await
        .with_context(|| format!("failed to bind port {}", config.port))?;
    tracing::info!("Server is running on {}", listener.local_addr()?);

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    store.close().await;
    tracing::info!("Database connection closed");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for ctrl-c: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("Shutting down");
}
