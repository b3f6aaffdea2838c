//! Racing service
//!
//! Serves the race listing and get-by-id RPCs over a seeded SQLite database.

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use ent_api::racing_router;
use ent_core::config::ServiceKind;
use ent_db::{RacesRepo, RacesRepository};
use ent_server::health::HealthChecker;
use ent_server::{build_app, connect, init_tracing, load_config, serve, ServerArgs};
use ent_services::RacingService;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = ServerArgs::parse();
    init_tracing();

    let config = load_config(ServiceKind::Racing, &args)?;
    let db = connect(&config).await?;

    let repo = RacesRepository::new(db.pool().clone());
    repo.init().await.context("failed to seed races")?;

    let service = Arc::new(RacingService::new(repo));
    let health = Arc::new(HealthChecker::new(ServiceKind::Racing.as_str(), db.clone()));
    let app = build_app(racing_router(service), health);

    serve(&config, app, db).await
}
