//! Repository errors and shared query execution helpers

use ent_queries::CompiledQuery;
use ent_models::TimestampError;
use sqlx::sqlite::{Sqlite, SqliteArguments};
use sqlx::query::Query;

/// Error type for repository operations
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// Connectivity, statement execution or column decoding
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Timestamp error: {0}")]
    Timestamp(#[from] TimestampError),
}

/// Result type for repository operations
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Prepare a compiled query with its positional arguments bound in order
pub(crate) fn bind_compiled(compiled: &CompiledQuery) -> Query<'_, Sqlite, SqliteArguments<'_>> {
    compiled
        .args
        .iter()
        .fold(sqlx::query(&compiled.sql), |query, arg| query.bind(*arg))
}
