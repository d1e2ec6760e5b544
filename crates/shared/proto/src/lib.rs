//! gRPC protocol buffer definitions.
//!
//! This crate contains the generated gRPC service definitions for:
//! - VoterService: voter management (list, get, create, update, delete)

/// Voter service definitions.
pub mod voter {
    tonic::include_proto!("voter");
}

// Re-export commonly used items
pub use voter::voter_service_client::VoterServiceClient;
pub use voter::voter_service_server::{VoterService, VoterServiceServer};
