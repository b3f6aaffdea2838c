//! # ent-services
//!
//! Query services for races and sporting events.
//!
//! Each service sits on a per-domain repository trait from `ent-db`, runs the
//! request filter through it and wraps the materialized entities in the
//! response envelope. Repository errors are passed through unchanged.

pub mod racing;
pub mod sports;

pub use racing::{Racing, RacingService};
pub use sports::{Sports, SportsService};
