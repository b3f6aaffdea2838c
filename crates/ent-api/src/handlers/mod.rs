//! RPC handlers, one module per service

pub mod racing;
pub mod sports;
