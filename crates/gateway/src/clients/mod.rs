//! gRPC clients for calling microservices.

mod voter_client;

#[cfg(any(test, feature = "test-utils"))]
pub use voter_client::MockVoterServiceClient;
pub use voter_client::{VoterClient, VoterServiceClient};
