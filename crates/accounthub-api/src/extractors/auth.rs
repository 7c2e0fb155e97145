//! `BearerToken` extractor — stage one of the access-control chain.

use axum::extract::FromRequestParts;
use axum::http::header;
use axum::http::request::Parts;

use accounthub_core::error::AppError;

use crate::error::ApiError;

/// The raw bearer credential from the Authorization header.
///
/// Extraction is pure: the token is not decoded here. Handlers pass it
/// into the access chain together with their unit of work. A missing or
/// malformed header is the chain's first failure, `Unauthenticated`.
#[derive(Debug, Clone)]
pub struct BearerToken(String);

impl BearerToken {
    /// The raw token string.
    pub fn token(&self) -> &str {
        &self.0
    }
}

impl<S: Send + Sync> FromRequestParts<S> for BearerToken {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| AppError::unauthenticated("Not authenticated"))?;

        let token = header
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::unauthenticated("Not authenticated"))?;

        Ok(BearerToken(token.to_string()))
    }
}
