//! Offset/limit query parameters for list endpoints.

use serde::{Deserialize, Serialize};

/// Default number of records returned by a listing.
const DEFAULT_LIMIT: i64 = 100;
/// Upper bound on a single listing.
const MAX_LIMIT: i64 = 200;

/// Query parameters for paginated listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListParams {
    /// Number of records to skip.
    #[serde(default)]
    pub skip: i64,
    /// Maximum number of records to return.
    #[serde(default = "default_limit")]
    pub limit: i64,
}

impl ListParams {
    /// The offset, never negative.
    pub fn offset(&self) -> i64 {
        self.skip.max(0)
    }

    /// The limit, clamped to `1..=200`.
    pub fn limit(&self) -> i64 {
        self.limit.clamp(1, MAX_LIMIT)
    }
}

impl Default for ListParams {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: DEFAULT_LIMIT,
        }
    }
}

fn default_limit() -> i64 {
    DEFAULT_LIMIT
}
