//! # accounthub-api
//!
//! HTTP API layer for AccountHub built on Axum.
//!
//! Provides the REST endpoints, the bearer-token extractor, DTOs, error
//! mapping, request logging, and application bootstrap. The core never
//! sees HTTP: handlers translate parsed inputs into service calls and map
//! each discriminated outcome to a status code.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_state, run_server};
pub use state::AppState;
