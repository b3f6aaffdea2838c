//! # ent-queries
//!
//! Query construction for the racing and sports services.
//!
//! This crate turns request filters into SQL text plus positional arguments.
//! It never touches the database: execution and row decoding live in `ent-db`.
//!
//! ## Structure
//!
//! - `catalog` - Base `SELECT` statements, one per entity type
//! - `sorts` - Ordering directives for race listings
//! - `filters` - Filter compilation for races and events
//! - `builder` - The compiled query (SQL + arguments)
//!
//! ## Example
//!
//! ```
//! use ent_models::ListRacesRequestFilter;
//! use ent_queries::catalog::{base_query, QueryKey};
//! use ent_queries::filters::apply_race_filter;
//!
//! let filter = ListRacesRequestFilter {
//!     meeting_ids: vec![1, 2],
//!     ..Default::default()
//! };
//!
//! let compiled = apply_race_filter(base_query(QueryKey::RacesList), Some(&filter));
//! assert!(compiled.sql.ends_with("WHERE meeting_id IN (?,?)"));
//! assert_eq!(compiled.args, vec![1, 2]);
//! ```

pub mod builder;
pub mod catalog;
pub mod filters;
pub mod sorts;

// Re-exports for convenience
pub use builder::CompiledQuery;
pub use catalog::{base_query, QueryKey};
pub use filters::{apply_event_filter, apply_race_by_id_filter, apply_race_filter};
pub use sorts::OrderDirection;
