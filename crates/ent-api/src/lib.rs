//! # ent-api
//!
//! JSON RPC surface for the racing and sports services.
//!
//! Every service method is a `POST /v1/<method>` route taking the request
//! message as a JSON body and answering with the response message. Failures
//! are answered with an RPC status code and message, see [`error::ApiError`].

pub mod error;
pub mod extractors;
pub mod handlers;
pub mod routes;

pub use error::{ApiError, ApiResult};
pub use routes::{racing_router, sports_router};
