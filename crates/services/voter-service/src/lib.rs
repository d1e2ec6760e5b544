//! Voter Service Library
//!
//! This crate provides voter management via gRPC. It owns the voter store and
//! asks the election service for vote counts before deleting a voter.
//! It can be run as a standalone service or embedded in the combined binary.

pub mod client;
pub mod config;
pub mod grpc;
pub mod infra;
pub mod repository;
pub mod service;

use std::net::SocketAddr;
use std::sync::Arc;

use tonic::transport::Server;
use tracing::info;

use crate::client::HttpElectionClient;
use crate::config::VoterServiceConfig;
use crate::grpc::VoterGrpcService;
use crate::infra::Database;
use crate::repository::VoterStore;
use crate::service::VoterManager;

/// Run the voter service as an embedded component (for combined binary).
pub async fn run_embedded(host: &str, port: u16) -> Result<(), Box<dyn std::error::Error>> {
    let config = VoterServiceConfig::from_env();
    run_server_with_config(host, port, config).await
}

/// Run migrations (for CLI commands).
pub async fn run_migrations(action: MigrateAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = VoterServiceConfig::from_env();
    let db = Database::connect_without_migrations(&config.database).await?;

    match action {
        MigrateAction::Up => {
            db.run_migrations().await?;
            info!("Migrations applied successfully");
        }
        MigrateAction::Down => {
            db.rollback_migration().await?;
            info!("Rolled back last migration");
        }
        MigrateAction::Status => {
            let status = db.migration_status().await?;
            for (name, applied) in status {
                let marker = if applied { "[x]" } else { "[ ]" };
                info!("{} {}", marker, name);
            }
        }
        MigrateAction::Fresh => {
            db.fresh_migrations().await?;
            info!("Database reset and migrations applied");
        }
    }

    Ok(())
}

/// Migration action type.
#[derive(Debug, Clone, Copy)]
pub enum MigrateAction {
    Up,
    Down,
    Status,
    Fresh,
}

/// Run the gRPC server with the given configuration.
async fn run_server_with_config(
    host: &str,
    port: u16,
    config: VoterServiceConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    // Initialize database
    let db = Database::connect(&config.database).await?;

    // Create repository, election client and service
    let voter_repo = Arc::new(VoterStore::new(db.into_connection()));
    let election_client = Arc::new(HttpElectionClient::new(&config.election)?);
    info!("Election service at {}", config.election.endpoint);
    let voter_service = Arc::new(VoterManager::new(voter_repo, election_client));

    // Create gRPC service
    let grpc_service = VoterGrpcService::new(voter_service);

    // Build address
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    info!("Voter service listening on {}", addr);

    // Run server
    Server::builder()
        .add_service(proto::VoterServiceServer::new(grpc_service))
        .serve(addr)
        .await?;

    Ok(())
}
