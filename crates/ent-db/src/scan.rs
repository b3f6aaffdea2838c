//! Row materialization
//!
//! Drains a result-row stream into entities. A `RowNotFound` from the cursor
//! or from a decoder means "no further rows": the scan stops and keeps what it
//! has. Any other failure aborts the scan and the rows decoded so far are
//! dropped.

use chrono::{DateTime, Utc};
use ent_models::{Event, Race, RaceStatus, Timestamp};
use futures::{Stream, TryStreamExt};
use sqlx::sqlite::SqliteRow;
use sqlx::Row;

use crate::repository::{RepositoryError, RepositoryResult};

/// Decode every row of `rows` with `decode`
pub async fn scan_rows<T, S, F>(mut rows: S, mut decode: F) -> RepositoryResult<Vec<T>>
where
    S: Stream<Item = Result<SqliteRow, sqlx::Error>> + Unpin,
    F: FnMut(&SqliteRow) -> RepositoryResult<T>,
{
    let mut items = Vec::new();

    loop {
        let row = match rows.try_next().await {
            Ok(Some(row)) => row,
            Ok(None) | Err(sqlx::Error::RowNotFound) => break,
            Err(e) => return Err(e.into()),
        };

        match decode(&row) {
            Ok(item) => items.push(item),
            Err(RepositoryError::Database(sqlx::Error::RowNotFound)) => break,
            Err(e) => return Err(e),
        }
    }

    Ok(items)
}

/// Materialize race rows, deriving each status against `now()` as the row is decoded
pub async fn scan_races<S, C>(rows: S, now: C) -> RepositoryResult<Vec<Race>>
where
    S: Stream<Item = Result<SqliteRow, sqlx::Error>> + Unpin,
    C: Fn() -> DateTime<Utc>,
{
    scan_rows(rows, |row| decode_race(row, now())).await
}

/// Materialize event rows
pub async fn scan_events<S>(rows: S) -> RepositoryResult<Vec<Event>>
where
    S: Stream<Item = Result<SqliteRow, sqlx::Error>> + Unpin,
{
    scan_rows(rows, decode_event).await
}

fn decode_race(row: &SqliteRow, now: DateTime<Utc>) -> RepositoryResult<Race> {
    let advertised_start: DateTime<Utc> = row.try_get("advertised_start_time")?;

    Ok(Race {
        id: row.try_get("id")?,
        meeting_id: row.try_get("meeting_id")?,
        name: row.try_get("name")?,
        number: row.try_get("number")?,
        visible: row.try_get("visible")?,
        advertised_start_time: Timestamp::try_from(advertised_start)?,
        status: RaceStatus::at(advertised_start, now),
    })
}

fn decode_event(row: &SqliteRow) -> RepositoryResult<Event> {
    let advertised_start: DateTime<Utc> = row.try_get("advertised_start_time")?;

    Ok(Event {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        team_one: row.try_get("team_one")?,
        team_two: row.try_get("team_two")?,
        visible: row.try_get("visible")?,
        advertised_start_time: Timestamp::try_from(advertised_start)?,
    })
}
