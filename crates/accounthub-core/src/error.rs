//! Unified application error types for AccountHub.
//!
//! All crates map their internal errors into [`AppError`] for consistent
//! propagation through the ? operator. Business-rule failures are always
//! expressed as an `AppError` with a matching [`ErrorKind`]; only truly
//! exceptional conditions (database unavailable, misconfiguration) use the
//! infrastructure kinds.

use std::fmt;
use thiserror::Error;

/// Top-level error kind categorization used across the entire application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ErrorKind {
    /// No token, an invalid/expired token, or an unresolvable subject.
    Unauthenticated,
    /// A valid identity whose account has been deactivated.
    ForbiddenInactive,
    /// A valid, active identity without superuser privileges.
    ForbiddenPrivilege,
    /// An administrator attempted an operation on their own account that
    /// must target someone else.
    SelfOperationForbidden,
    /// The requested resource was not found.
    NotFound,
    /// A conflict occurred (duplicate email).
    Conflict,
    /// Input validation failed.
    Validation,
    /// A database error occurred.
    Database,
    /// A configuration error occurred.
    Configuration,
    /// A serialization/deserialization error occurred.
    Serialization,
    /// An internal server error occurred.
    Internal,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unauthenticated => write!(f, "UNAUTHENTICATED"),
            Self::ForbiddenInactive => write!(f, "FORBIDDEN_INACTIVE"),
            Self::ForbiddenPrivilege => write!(f, "FORBIDDEN_PRIVILEGE"),
            Self::SelfOperationForbidden => write!(f, "SELF_OPERATION_FORBIDDEN"),
            Self::NotFound => write!(f, "NOT_FOUND"),
            Self::Conflict => write!(f, "CONFLICT"),
            Self::Validation => write!(f, "VALIDATION"),
            Self::Database => write!(f, "DATABASE"),
            Self::Configuration => write!(f, "CONFIGURATION"),
            Self::Serialization => write!(f, "SERIALIZATION"),
            Self::Internal => write!(f, "INTERNAL"),
        }
    }
}

/// The unified application error used throughout AccountHub.
///
/// All crate-specific errors are mapped into `AppError` using `From` impls
/// or explicit `.map_err()` calls. This provides a single error type for
/// the entire application boundary.
#[derive(Debug, Error)]
#[error("{kind}: {message}")]
pub struct AppError {
    /// The category of error.
    pub kind: ErrorKind,
    /// A human-readable error message.
    pub message: String,
    /// Optional underlying cause.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new application error.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Create a new application error with an underlying cause.
    pub fn with_source(
        kind: ErrorKind,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an unauthenticated error.
    pub fn unauthenticated(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unauthenticated, message)
    }

    /// Create a forbidden error for a deactivated account.
    pub fn forbidden_inactive(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ForbiddenInactive, message)
    }

    /// Create a forbidden error for insufficient privileges.
    pub fn forbidden_privilege(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ForbiddenPrivilege, message)
    }

    /// Create an error for a self-targeted admin operation.
    pub fn self_operation_forbidden(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::SelfOperationForbidden, message)
    }

    /// Create a not-found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    /// Create a conflict error.
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Conflict, message)
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, message)
    }

    /// Create a database error.
    pub fn database(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Database, message)
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Configuration, message)
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }
}

impl Clone for AppError {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            message: self.message.clone(),
            source: None,
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::with_source(
            ErrorKind::Serialization,
            format!("JSON serialization error: {err}"),
            err,
        )
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::with_source(
            ErrorKind::Configuration,
            format!("Configuration error: {err}"),
            err,
        )
    }
}
