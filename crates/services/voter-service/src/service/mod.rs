//! Voter service business logic.

mod voter_service;

pub use voter_service::{VoterManager, VoterService};
