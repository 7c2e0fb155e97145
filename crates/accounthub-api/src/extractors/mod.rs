//! Custom Axum extractors.

pub mod auth;
pub mod pagination;

pub use auth::BearerToken;
pub use pagination::ListParams;
