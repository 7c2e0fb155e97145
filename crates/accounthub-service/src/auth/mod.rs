//! Registration, login, and password recovery services.

pub mod recovery;
pub mod service;

pub use recovery::PasswordRecoveryService;
pub use service::AuthService;
