//! # ent-db
//!
//! Database layer for the racing and sports services.
//!
//! This crate provides SQLite access using SQLx, including:
//!
//! - Connection pool management
//! - One-time seeding of the sample tables behind a run-once gate
//! - Race and event repositories that execute compiled queries
//! - Row scanners that materialize result rows into wire entities
//!
//! ## Example
//!
//! ```ignore
//! use ent_core::DatabaseConfig;
//! use ent_db::{Database, RacesRepo, RacesRepository};
//!
//! let db = Database::connect(&DatabaseConfig::with_url("sqlite://db/racing.db?mode=rwc")).await?;
//!
//! let repo = RacesRepository::new(db.pool().clone());
//! repo.init().await?;
//! let races = repo.list(None).await?;
//! ```

pub mod events;
pub mod pool;
pub mod races;
pub mod repository;
pub mod scan;
pub mod seed;

// Re-exports
pub use events::{EventsRepository, SportsRepo};
pub use pool::Database;
pub use races::{RacesRepo, RacesRepository};
pub use repository::{RepositoryError, RepositoryResult};
pub use seed::SeedGate;
