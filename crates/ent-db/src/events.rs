//! Event repository
//!
//! Database operations for sporting events.

use async_trait::async_trait;
use ent_models::{Event, ListEventsRequestFilter};
use ent_queries::{apply_event_filter, base_query, QueryKey};
use sqlx::SqlitePool;

use crate::repository::{bind_compiled, RepositoryResult};
use crate::scan::scan_events;
use crate::seed::{seed_events, SeedGate};

/// Read access to sporting events
#[async_trait]
pub trait SportsRepo: Send + Sync {
    /// Create and seed the events table, once
    async fn init(&self) -> RepositoryResult<()>;

    /// Events matching `filter`, all events when it is absent
    async fn list(&self, filter: Option<ListEventsRequestFilter>) -> RepositoryResult<Vec<Event>>;
}

/// SQLite-backed event repository
pub struct EventsRepository {
    pool: SqlitePool,
    seed: SeedGate,
}

impl EventsRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            seed: SeedGate::new(),
        }
    }
}

#[async_trait]
impl SportsRepo for EventsRepository {
    async fn init(&self) -> RepositoryResult<()> {
        self.seed.run(|| seed_events(&self.pool)).await
    }

    async fn list(&self, filter: Option<ListEventsRequestFilter>) -> RepositoryResult<Vec<Event>> {
        self.init().await?;

        let compiled = apply_event_filter(base_query(QueryKey::EventsList), filter.as_ref());
        tracing::debug!(sql = %compiled.sql, args = compiled.args.len(), "Querying events");

        let rows = bind_compiled(&compiled).fetch(&self.pool);
        scan_events(rows).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::Database;
    use crate::seed::EVENT_SAMPLES;

    async fn repo() -> EventsRepository {
        let db = Database::in_memory().await.unwrap();
        EventsRepository::new(db.pool().clone())
    }

    fn ids(events: &[Event]) -> Vec<i64> {
        let mut ids: Vec<i64> = events.iter().map(|e| e.id).collect();
        ids.sort();
        ids
    }

    #[tokio::test]
    async fn test_list_without_filter_returns_every_event() {
        let repo = repo().await;

        let events = repo.list(None).await.unwrap();
        assert_eq!(events.len(), EVENT_SAMPLES.len());

        let events = repo.list(Some(ListEventsRequestFilter::default())).await.unwrap();
        assert_eq!(events.len(), EVENT_SAMPLES.len());
    }

    #[tokio::test]
    async fn test_list_by_event_ids() {
        let repo = repo().await;
        let filter = ListEventsRequestFilter {
            event_ids: vec![5, 2],
            visible_events: false,
        };

        let events = repo.list(Some(filter)).await.unwrap();
        assert_eq!(ids(&events), vec![2, 5]);
    }

    #[tokio::test]
    async fn test_list_visible_events() {
        let repo = repo().await;
        let filter = ListEventsRequestFilter {
            event_ids: vec![],
            visible_events: true,
        };

        let events = repo.list(Some(filter)).await.unwrap();
        assert_eq!(ids(&events), vec![1, 2, 4, 6]);
        assert!(events.iter().all(|e| e.visible));
    }

    #[tokio::test]
    async fn test_list_visible_among_ids() {
        let repo = repo().await;
        let filter = ListEventsRequestFilter {
            event_ids: vec![3, 4, 5],
            visible_events: true,
        };

        let events = repo.list(Some(filter)).await.unwrap();
        assert_eq!(ids(&events), vec![4]);
    }

    #[tokio::test]
    async fn test_init_is_idempotent() {
        let repo = repo().await;

        repo.init().await.unwrap();
        repo.init().await.unwrap();

        assert_eq!(repo.list(None).await.unwrap().len(), EVENT_SAMPLES.len());
    }
}
