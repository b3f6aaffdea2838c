//! Racing RPC handlers

use std::sync::Arc;

use axum::{extract::State, Json};
use ent_models::{GetRaceByIdRequest, ListRacesRequest, ListRacesResponse};
use ent_services::Racing;

use crate::error::ApiResult;
use crate::extractors::RpcJson;

/// Shared racing service handle
pub type RacingState = Arc<dyn Racing>;

/// POST /v1/list-races
pub async fn list_races(
    State(service): State<RacingState>,
    RpcJson(request): RpcJson<ListRacesRequest>,
) -> ApiResult<Json<ListRacesResponse>> {
    Ok(Json(service.list_races(request).await?))
}

/// POST /v1/list-visible-races
pub async fn list_visible_races(
    State(service): State<RacingState>,
    RpcJson(request): RpcJson<ListRacesRequest>,
) -> ApiResult<Json<ListRacesResponse>> {
    Ok(Json(service.list_visible_races(request).await?))
}

/// POST /v1/list-races-by-advertised-start-time
pub async fn list_races_by_advertised_start_time(
    State(service): State<RacingState>,
    RpcJson(request): RpcJson<ListRacesRequest>,
) -> ApiResult<Json<ListRacesResponse>> {
    Ok(Json(service.list_races_by_advertised_start_time(request).await?))
}

/// POST /v1/get-race-by-id
pub async fn get_race_by_id(
    State(service): State<RacingState>,
    RpcJson(request): RpcJson<GetRaceByIdRequest>,
) -> ApiResult<Json<ListRacesResponse>> {
    Ok(Json(service.get_race_by_id(request).await?))
}
