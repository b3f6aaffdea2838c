//! Race repository
//!
//! Database operations for races. The table is created and seeded on first
//! use; every query goes through the seed gate first.

use async_trait::async_trait;
use chrono::Utc;
use ent_models::{GetRaceByIdRequestFilter, ListRacesRequestFilter, Race};
use ent_queries::{apply_race_by_id_filter, apply_race_filter, base_query, CompiledQuery, QueryKey};
use sqlx::SqlitePool;

use crate::repository::{bind_compiled, RepositoryResult};
use crate::scan::scan_races;
use crate::seed::{seed_races, SeedGate};

/// Read access to races
#[async_trait]
pub trait RacesRepo: Send + Sync {
    /// Create and seed the races table, once
    async fn init(&self) -> RepositoryResult<()>;

    /// Races matching `filter`, all races when it is absent
    async fn list(&self, filter: Option<ListRacesRequestFilter>) -> RepositoryResult<Vec<Race>>;

    /// The race selected by `filter`
    ///
    /// Yields an empty list for an unknown id and every race when the filter
    /// is absent.
    async fn get_race(&self, filter: Option<GetRaceByIdRequestFilter>) -> RepositoryResult<Vec<Race>>;
}

/// SQLite-backed race repository
pub struct RacesRepository {
    pool: SqlitePool,
    seed: SeedGate,
}

impl RacesRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            seed: SeedGate::new(),
        }
    }

    async fn fetch(&self, compiled: CompiledQuery) -> RepositoryResult<Vec<Race>> {
        tracing::debug!(sql = %compiled.sql, args = compiled.args.len(), "Querying races");

        let rows = bind_compiled(&compiled).fetch(&self.pool);
        scan_races(rows, Utc::now).await
    }
}

#[async_trait]
impl RacesRepo for RacesRepository {
    async fn init(&self) -> RepositoryResult<()> {
        self.seed.run(|| seed_races(&self.pool)).await
    }

    async fn list(&self, filter: Option<ListRacesRequestFilter>) -> RepositoryResult<Vec<Race>> {
        self.init().await?;

        let compiled = apply_race_filter(base_query(QueryKey::RacesList), filter.as_ref());
        self.fetch(compiled).await
    }

    async fn get_race(&self, filter: Option<GetRaceByIdRequestFilter>) -> RepositoryResult<Vec<Race>> {
        self.init().await?;

        let compiled = apply_race_by_id_filter(base_query(QueryKey::RacesList), filter.as_ref());
        self.fetch(compiled).await
    }
}
