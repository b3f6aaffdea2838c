//! Sports RPC handlers

use std::sync::Arc;

use axum::{extract::State, Json};
use ent_models::{ListEventsRequest, ListEventsResponse};
use ent_services::Sports;

use crate::error::ApiResult;
use crate::extractors::RpcJson;

/// Shared sports service handle
pub type SportsState = Arc<dyn Sports>;

/// POST /v1/list-events
pub async fn list_events(
    State(service): State<SportsState>,
    RpcJson(request): RpcJson<ListEventsRequest>,
) -> ApiResult<Json<ListEventsResponse>> {
    Ok(Json(service.list_events(request).await?))
}
