//! Sample data seeding
//!
//! Each repository creates its table and inserts a fixed sample set the first
//! time it is used. [`SeedGate`] makes that happen at most once per
//! repository: concurrent callers wait for the seeding in progress, and a
//! failed attempt leaves the gate closed so the next caller retries.
//! Inserts use `INSERT OR IGNORE`, so seeding a database that already holds
//! the samples is a no-op.

use std::future::Future;

use sqlx::SqlitePool;
use tokio::sync::OnceCell;

use crate::repository::RepositoryResult;

/// Run-once gate: uninitialized -> initializing -> ready
#[derive(Debug, Default)]
pub struct SeedGate {
    ready: OnceCell<()>,
}

impl SeedGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `seed` unless a previous call already completed it
    pub async fn run<F, Fut>(&self, seed: F) -> RepositoryResult<()>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = RepositoryResult<()>>,
    {
        self.ready.get_or_try_init(seed).await?;
        Ok(())
    }

    pub fn is_ready(&self) -> bool {
        self.ready.initialized()
    }
}

/// Sample race: id, meeting id, name, number, visible, advertised start
pub type RaceSample = (i64, i64, &'static str, i64, bool, &'static str);

/// Sample event: id, name, team one, team two, visible, advertised start
pub type EventSample = (i64, &'static str, &'static str, &'static str, bool, &'static str);

pub const RACE_SAMPLES: &[RaceSample] = &[
    (1, 1, "North Dakota Foxes", 1, true, "2021-03-02T01:00:00Z"),
    (2, 1, "Connecticut Griffins", 2, false, "2021-03-02T01:30:00Z"),
    (3, 2, "Rhode Island Ghosts", 1, true, "2021-03-03T04:15:00Z"),
    (4, 2, "Kansas Dwarves", 2, true, "2099-06-15T14:00:00Z"),
    (5, 3, "Delaware Cats", 1, false, "2099-06-15T14:30:00Z"),
    (6, 3, "Arkansas Zombies", 2, true, "2099-06-16T09:45:00Z"),
    (7, 3, "Oregon Jackals", 3, false, "2022-11-20T22:10:00Z"),
    (8, 4, "Vermont Dragons", 1, true, "2099-01-01T00:00:00Z"),
    (9, 4, "Utah Sorcerers", 2, true, "2020-07-04T18:20:00Z"),
    (10, 5, "Maine Banshees", 1, false, "2099-12-31T23:59:00Z"),
];

pub const EVENT_SAMPLES: &[EventSample] = &[
    (1, "Preliminary Final", "Storm", "Panthers", true, "2021-09-24T09:50:00Z"),
    (2, "Grand Final", "Rabbitohs", "Eels", true, "2099-10-03T08:30:00Z"),
    (3, "Round 1", "Broncos", "Titans", false, "2022-03-10T09:00:00Z"),
    (4, "Round 1", "Sharks", "Roosters", true, "2099-03-11T08:05:00Z"),
    (5, "Round 2", "Knights", "Dragons", false, "2099-03-18T07:55:00Z"),
    (6, "Qualifying Final", "Warriors", "Raiders", true, "2020-09-26T09:40:00Z"),
];

/// Create the races table and insert the sample races
pub async fn seed_races(pool: &SqlitePool) -> RepositoryResult<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS races (
            id INTEGER PRIMARY KEY,
            meeting_id INTEGER,
            name TEXT,
            number INTEGER,
            visible INTEGER,
            advertised_start_time DATETIME
        )
        "#,
    )
    .execute(pool)
    .await?;

    let mut inserted = 0;
    for (id, meeting_id, name, number, visible, start) in RACE_SAMPLES {
        let result = sqlx::query(
            r#"
            INSERT OR IGNORE INTO races (id, meeting_id, name, number, visible, advertised_start_time)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(*id)
        .bind(*meeting_id)
        .bind(*name)
        .bind(*number)
        .bind(*visible)
        .bind(*start)
        .execute(pool)
        .await?;

        inserted += result.rows_affected();
    }

    tracing::info!(inserted, samples = RACE_SAMPLES.len(), "Seeded races table");
    Ok(())
}

/// Create the events table and insert the sample events
pub async fn seed_events(pool: &SqlitePool) -> RepositoryResult<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS events (
            id INTEGER PRIMARY KEY,
            name TEXT,
            team_one TEXT,
            team_two TEXT,
            visible INTEGER,
            advertised_start_time DATETIME
        )
        "#,
    )
    .execute(pool)
    .await?;

    let mut inserted = 0;
    for (id, name, team_one, team_two, visible, start) in EVENT_SAMPLES {
        let result = sqlx::query(
            r#"
            INSERT OR IGNORE INTO events (id, name, team_one, team_two, visible, advertised_start_time)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(*id)
        .bind(*name)
        .bind(*team_one)
        .bind(*team_two)
        .bind(*visible)
        .bind(*start)
        .execute(pool)
        .await?;

        inserted += result.rows_affected();
    }

    tracing::info!(inserted, samples = EVENT_SAMPLES.len(), "Seeded events table");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::Database;
    use crate::repository::RepositoryError;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    async fn count(pool: &SqlitePool, table: &str) -> i64 {
        sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {}", table))
            .fetch_one(pool)
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_seeding_twice_does_not_duplicate() {
        let db = Database::in_memory().await.unwrap();

        seed_races(db.pool()).await.unwrap();
        seed_races(db.pool()).await.unwrap();
        seed_events(db.pool()).await.unwrap();
        seed_events(db.pool()).await.unwrap();

        assert_eq!(count(db.pool(), "races").await, RACE_SAMPLES.len() as i64);
        assert_eq!(count(db.pool(), "events").await, EVENT_SAMPLES.len() as i64);
    }

    #[tokio::test]
    async fn test_gate_runs_once() {
        let gate = SeedGate::new();
        let runs = AtomicUsize::new(0);

        for _ in 0..3 {
            gate.run(|| async {
                runs.fetch_add(1, Ordering::SeqCst);
                Ok(())
            })
            .await
            .unwrap();
        }

        assert!(gate.is_ready());
        assert_eq!(runs.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_gate_runs_once_under_concurrency() {
        let gate = Arc::new(SeedGate::new());
        let runs = Arc::new(AtomicUsize::new(0));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let gate = gate.clone();
                let runs = runs.clone();
                tokio::spawn(async move {
                    gate.run(|| async move {
                        tokio::task::yield_now().await;
                        runs.fetch_add(1, Ordering::SeqCst);
                        Ok(())
                    })
                    .await
                })
            })
            .collect();

        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        assert_eq!(runs.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_failed_seed_is_retried() {
        let gate = SeedGate::new();

        let err = gate
            .run(|| async { Err(RepositoryError::Database(sqlx::Error::PoolClosed)) })
            .await;
        assert!(err.is_err());
        assert!(!gate.is_ready());

        gate.run(|| async { Ok(()) }).await.unwrap();
        assert!(gate.is_ready());
    }
}
