//! # accounthub-service
//!
//! Business logic service layer for AccountHub. Each service orchestrates
//! repositories and the auth primitives to implement application-level use
//! cases.
//!
//! Services follow constructor injection — all dependencies are provided
//! at construction time via `Arc` references. Persistence access always
//! goes through the connection of the caller's unit of work.

pub mod auth;
pub mod user;

pub use auth::{AuthService, PasswordRecoveryService};
pub use user::{AdminUserService, UserService};
