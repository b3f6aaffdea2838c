//! # ent-models
//!
//! Wire models for the racing and sports services.
//!
//! These are the request filters, entities and response envelopes exchanged
//! over the RPC interface. Field names follow the JSON mapping of the service
//! messages (camelCase, timestamps as RFC 3339 strings).

pub use ent_core::traits::Id;

pub mod event;
pub mod race;
pub mod timestamp;

// Re-exports for convenience
pub use event::{Event, ListEventsRequest, ListEventsRequestFilter, ListEventsResponse};
pub use race::{
    GetRaceByIdRequest, GetRaceByIdRequestFilter, ListRacesRequest, ListRacesRequestFilter,
    ListRacesResponse, Race, RaceStatus,
};
pub use timestamp::{Timestamp, TimestampError};
