//! Stateless token encoding, decoding, and claims management.

pub mod claims;
pub mod decoder;
pub mod encoder;

pub use claims::Claims;
pub use decoder::JwtDecoder;
pub use encoder::JwtEncoder;

use jsonwebtoken::Algorithm;

use accounthub_core::error::AppError;

/// Resolve a configured algorithm name to a signing algorithm.
///
/// Only HMAC-class algorithms are accepted; both token classes are signed
/// with symmetric secrets.
pub(crate) fn parse_algorithm(name: &str) -> Result<Algorithm, AppError> {
    match name {
        "HS256" => Ok(Algorithm::HS256),
        "HS384" => Ok(Algorithm::HS384),
        "HS512" => Ok(Algorithm::HS512),
        other => Err(AppError::configuration(format!(
            "Unsupported signing algorithm '{other}'. Expected one of: HS256, HS384, HS512"
        ))),
    }
}
