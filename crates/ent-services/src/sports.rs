//! Sports service

use async_trait::async_trait;
use ent_db::{RepositoryResult, SportsRepo};
use ent_models::{ListEventsRequest, ListEventsResponse};

#[async_trait]
pub trait Sports: Send + Sync {
    /// Events matching the request filter
    async fn list_events(&self, request: ListEventsRequest) -> RepositoryResult<ListEventsResponse>;
}

pub struct SportsService<R> {
    repo: R,
}

impl<R: SportsRepo> SportsService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R: SportsRepo> Sports for SportsService<R> {
    async fn list_events(&self, request: ListEventsRequest) -> RepositoryResult<ListEventsResponse> {
        let events = self.repo.list(request.filter).await?;
        tracing::debug!(count = events.len(), "Listed events");

        Ok(ListEventsResponse { events })
    }
}
