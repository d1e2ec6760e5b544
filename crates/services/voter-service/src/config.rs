//! Voter service configuration.
//!
//! Listen address comes from the CLI (`--host`/`--port`, or
//! `VOTER_SERVICE_HOST`/`VOTER_SERVICE_PORT`).

use std::env;

use common::{env_or, DatabaseConfig, HttpClientConfig};

/// Voter service configuration.
#[derive(Debug, Clone, Default)]
pub struct VoterServiceConfig {
    /// Voter store connection settings
    pub database: DatabaseConfig,
    /// Election service HTTP endpoint and timeouts
    pub election: HttpClientConfig,
}

impl VoterServiceConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let election_defaults = HttpClientConfig::default();
        Self {
            database: DatabaseConfig::from_env("VOTER_SERVICE"),
            election: HttpClientConfig {
                endpoint: env::var("ELECTION_SERVICE_URL")
                    .unwrap_or(election_defaults.endpoint),
                connect_timeout_ms: env_or(
                    "ELECTION_SERVICE_CONNECT_TIMEOUT_MS",
                    election_defaults.connect_timeout_ms,
                ),
                request_timeout_ms: env_or(
                    "ELECTION_SERVICE_TIMEOUT_MS",
                    election_defaults.request_timeout_ms,
                ),
            },
        }
    }
}

