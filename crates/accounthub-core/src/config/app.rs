//! HTTP server configuration.

use serde::{Deserialize, Serialize};

/// HTTP server bind and CORS configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// TCP port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
    /// CORS settings.
    #[serde(default)]
    pub cors: CorsConfig,
}

/// Cross-origin resource sharing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Allowed origins. `"*"` allows any origin.
    #[serde(default = "default_origins")]
    pub allowed_origins: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: default_origins(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_origins() -> Vec<String> {
    vec![
        "http://localhost".to_string(),
        "http://localhost:5173".to_string(),
    ]
}
