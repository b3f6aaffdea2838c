//! Core identifier types

/// Primary key type for races, meetings and events
pub type Id = i64;
