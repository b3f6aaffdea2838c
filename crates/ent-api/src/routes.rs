//! API routes

use std::sync::Arc;

use axum::{routing::post, Router};
use ent_services::{Racing, Sports};

use crate::handlers::{racing, sports};

/// Routes of the racing service
pub fn racing_router(service: Arc<dyn Racing>) -> Router {
    Router::new()
        .route("/v1/list-races", post(racing::list_races))
        .route("/v1/list-visible-races", post(racing::list_visible_races))
        .route(
            "/v1/list-races-by-advertised-start-time",
            post(racing::list_races_by_advertised_start_time),
        )
        .route("/v1/get-race-by-id", post(racing::get_race_by_id))
        .with_state(service)
}

/// Routes of the sports service
pub fn sports_router(service: Arc<dyn Sports>) -> Router {
    Router::new()
        .route("/v1/list-events", post(sports::list_events))
        .with_state(service)
}
