//! Axum extractors for RPC handlers

use axum::{
    async_trait,
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// JSON request message
///
/// Like [`Json`], but a missing content type or an unreadable body is
/// answered with an `invalid_argument` status.
#[derive(Debug, Clone, Copy, Default)]
pub struct RpcJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for RpcJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(message) = Json::<T>::from_request(req, state).await?;
        Ok(RpcJson(message))
    }
}
