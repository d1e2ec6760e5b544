//! API Gateway Library
//!
//! This crate provides the HTTP REST API that translates voter requests to
//! gRPC calls on the voter service.

pub mod clients;
pub mod config;
pub mod extractors;
pub mod handlers;
pub mod openapi;
pub mod routes;
pub mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use crate::clients::VoterClient;
use crate::config::GatewayConfig;
use crate::routes::create_router;
use crate::state::AppState;

/// Run the gateway as an embedded component (for combined binary).
pub async fn run_embedded(
    host: &str,
    port: u16,
    voter_port: u16,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = GatewayConfig::from_env();
    config.voter_service_url = format!("http://{}:{}", connect_host(host), voter_port);

    run_server_with_config(host, port, config).await
}

/// Run the gateway against the voter service configured in the environment.
pub async fn run_standalone(host: &str, port: u16) -> Result<(), Box<dyn std::error::Error>> {
    run_server_with_config(host, port, GatewayConfig::from_env()).await
}

/// A wildcard listen address is not a connectable one.
fn connect_host(host: &str) -> &str {
    match host {
        "0.0.0.0" | "::" => "127.0.0.1",
        other => other,
    }
}

/// Run the HTTP server with the given configuration.
async fn run_server_with_config(
    host: &str,
    port: u16,
    config: GatewayConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    // Create gRPC client
    let voter_client = Arc::new(VoterClient::connect(&config.voter_service_url).await?);
    info!("Forwarding voter calls to {}", config.voter_service_url);

    // Create app state
    let state = AppState::new(voter_client, config);

    // Build router
    let app = create_router(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive()),
    );

    // Build address
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    info!("Gateway listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connect_host_replaces_wildcards() {
        assert_eq!(connect_host("0.0.0.0"), "127.0.0.1");
        assert_eq!(connect_host("::"), "127.0.0.1");
        assert_eq!(connect_host("10.0.0.5"), "10.0.0.5");
    }
}
