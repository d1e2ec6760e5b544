//! Combined binary for development - runs the voter service and the gateway
//! in one process.

use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "voter-api")]
#[command(about = "Voter service and REST gateway in one process, for development")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the voter service and the gateway (development mode)
    Serve {
        #[arg(long, default_value = "0.0.0.0")]
        host: String,
        #[arg(long, default_value = "3000")]
        gateway_port: u16,
        #[arg(long, default_value = "50052")]
        voter_port: u16,
    },
    /// Run voter database migrations
    Migrate {
        #[command(subcommand)]
        action: MigrateAction,
    },
}

#[derive(Subcommand, Clone, Copy)]
enum MigrateAction {
    /// Run pending migrations
    Up,
    /// Rollback last migration
    Down,
    /// Show migration status
    Status,
    /// Reset database and run all migrations
    Fresh,
}

impl From<MigrateAction> for voter_service_lib::MigrateAction {
    fn from(action: MigrateAction) -> Self {
        match action {
            MigrateAction::Up => Self::Up,
            MigrateAction::Down => Self::Down,
            MigrateAction::Status => Self::Status,
            MigrateAction::Fresh => Self::Fresh,
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            host,
            gateway_port,
            voter_port,
        } => {
            info!("Starting combined services in development mode");
            info!("  Gateway:       http://{}:{}", host, gateway_port);
            info!("  Voter service: http://{}:{}", host, voter_port);

            // Spawn voter-service first (it owns the database)
            let voter_host = host.clone();
            let voter_handle = tokio::spawn(async move {
                if let Err(e) = voter_service_lib::run_embedded(&voter_host, voter_port).await {
                    error!("Voter service failed: {}", e);
                }
            });

            // Wait a moment for voter-service to start
            tokio::time::sleep(std::time::Duration::from_millis(500)).await;

            // Spawn gateway (depends on voter-service)
            let gateway_host = host.clone();
            let gateway_handle = tokio::spawn(async move {
                if let Err(e) =
                    gateway_lib::run_embedded(&gateway_host, gateway_port, voter_port).await
                {
                    error!("Gateway failed: {}", e);
                }
            });

            // Wait for either to exit (which would indicate an error)
            tokio::select! {
                _ = voter_handle => {
                    error!("Voter service exited unexpectedly");
                }
                _ = gateway_handle => {
                    error!("Gateway exited unexpectedly");
                }
            }
        }
        Commands::Migrate { action } => {
            voter_service_lib::run_migrations(action.into()).await?;
        }
    }

    Ok(())
}
