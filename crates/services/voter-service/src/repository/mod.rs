//! Repository layer for data access.

pub mod entities;
mod voter_repository;

#[cfg(any(test, feature = "test-utils"))]
pub use voter_repository::MockVoterRepository;
pub use voter_repository::{VoterRepository, VoterStore};
