//! # ent-server
//!
//! Startup plumbing shared by the `racing` and `sports` binaries: command
//! line, configuration, logging, router assembly and graceful shutdown.

use std::sync::Arc;

use anyhow::Context;
use axum::Router;
use clap::Parser;
use ent_core::config::{AppConfig, ServiceKind};
use ent_db::Database;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub mod health;

use health::HealthChecker;

/// Command line of both service binaries
#[derive(Debug, Parser)]
pub struct ServerArgs {
    /// `host:port` to listen on, overriding the environment
    #[arg(long)]
    pub listen_address: Option<String>,
}

/// Initialize tracing/logging
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "info,ent_server=debug,ent_api=debug,ent_db=debug,tower_http=debug".into()
            }),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true),
        )
        .init();
}

/// Resolve configuration: defaults, then `.env` and the environment, then flags
pub fn load_config(service: ServiceKind, args: &ServerArgs) -> anyhow::Result<AppConfig> {
    dotenvy::dotenv().ok();

    let mut config = AppConfig::from_env(service)
        .with_context(|| format!("invalid {} configuration", service.as_str()))?;

    if let Some(addr) = &args.listen_address {
        config
            .set_listen_address(addr.clone())
            .context("invalid --listen-address")?;
    }

    Ok(config)
}

/// Open the service database
pub async fn connect(config: &AppConfig) -> anyhow::Result<Database> {
    let db = Database::connect(&config.database)
        .await
        .with_context(|| format!("failed to open database {}", config.database.url))?;

    info!(url = %config.database.url, "Connected to database");
    Ok(db)
}

/// Merge the service routes with the health routes and wrap them in tracing
pub fn build_app(api: Router, health: Arc<HealthChecker>) -> Router {
    Router::new()
        .merge(api)
        .merge(health::router(health))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
}

/// Serve `app` on the configured address until a shutdown signal arrives
pub async fn serve(config: &AppConfig, app: Router, db: Database) -> anyhow::Result<()> {
    let addr = &config.server.listen_address;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to listen on {}", addr))?;

    info!(
        service = config.service.as_str(),
        version = env!("CARGO_PKG_VERSION"),
        "Listening on {}",
        addr
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    db.close().await;
    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
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
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
