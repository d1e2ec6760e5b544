//! Gateway configuration.
//!
//! Listen address comes from the CLI (`--host`/`--port`, or
//! `GATEWAY_HOST`/`GATEWAY_PORT`).

use std::env;

/// Gateway configuration.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Voter service gRPC endpoint
    pub voter_service_url: String,
}

impl GatewayConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            voter_service_url: env::var("VOTER_SERVICE_URL")
                .unwrap_or_else(|_| Self::default().voter_service_url),
        }
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            voter_service_url: "http://localhost:50052".to_string(),
        }
    }
}
