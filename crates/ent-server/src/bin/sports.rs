//! Sports service
//!
//! Serves the event listing RPC over a seeded SQLite database.

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use ent_api::sports_router;
use ent_core::config::ServiceKind;
use ent_db::{EventsRepository, SportsRepo};
use ent_server::health::HealthChecker;
use ent_server::{build_app, connect, init_tracing, load_config, serve, ServerArgs};
use ent_services::SportsService;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = ServerArgs::parse();
    init_tracing();

    let config = load_config(ServiceKind::Sports, &args)?;
    let db = connect(&config).await?;

    let repo = EventsRepository::new(db.pool().clone());
    repo.init().await.context("failed to seed events")?;

    let service = Arc::new(SportsService::new(repo));
    let health = Arc::new(HealthChecker::new(ServiceKind::Sports.as_str(), db.clone()));
    let app = build_app(sports_router(service), health);

    serve(&config, app, db).await
}
