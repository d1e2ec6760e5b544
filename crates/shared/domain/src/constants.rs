//! Domain-level constants.
//!
//! These constants define business rules and validation requirements.

// =============================================================================
// Validation
// =============================================================================

/// Minimum number of whitespace-separated parts in a voter name
pub const MIN_NAME_PARTS: usize = 2;

/// Minimum voter name length (after trimming)
pub const MIN_NAME_LENGTH: usize = 5;

// =============================================================================
// Messages
// =============================================================================

/// Confirmation returned after a voter is removed
pub const MESSAGE_VOTER_DELETED: &str = "Voter deleted";

// =============================================================================
// Transport
// =============================================================================

/// gRPC metadata key carrying the [`DomainError`](crate::DomainError) code
pub const ERROR_CODE_METADATA_KEY: &str = "x-error-code";
