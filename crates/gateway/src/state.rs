//! Application state for dependency injection.

use std::sync::Arc;

use crate::clients::VoterServiceClient;
use crate::config::GatewayConfig;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub voter_client: Arc<dyn VoterServiceClient>,
    pub config: GatewayConfig,
}

impl AppState {
    /// Create new app state.
    pub fn new(voter_client: Arc<dyn VoterServiceClient>, config: GatewayConfig) -> Self {
        Self {
            voter_client,
            config,
        }
    }
}
