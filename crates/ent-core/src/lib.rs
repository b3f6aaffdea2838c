//! # ent-core
//!
//! Core types shared by the racing and sports services.
//!
//! This crate provides the foundational building blocks used across the other crates:
//! - Identifier type alias
//! - Service configuration (per-service defaults and environment overrides)
//! - Configuration errors

pub mod config;
pub mod error;
pub mod traits;

pub use config::{AppConfig, DatabaseConfig, ServerConfig, ServiceKind};
pub use error::ConfigError;
pub use traits::Id;
