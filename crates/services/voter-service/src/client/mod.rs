//! Clients for services the voter service depends on.

mod election_client;

#[cfg(any(test, feature = "test-utils"))]
pub use election_client::MockElectionClient;
pub use election_client::{ElectionClient, ElectionClientError, HttpElectionClient};
