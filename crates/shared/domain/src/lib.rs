//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! The voter service and the gateway both build on these types.

pub mod constants;
pub mod error;
pub mod password;
pub mod validation;
pub mod voter;

pub use constants::*;
pub use error::{DomainError, DomainResult};
pub use password::Password;
pub use voter::{GenericOutput, NewVoter, Voter, VoterInput, VoterOutput};
