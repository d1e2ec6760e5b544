//! Domain-level errors.
//!
//! Every voter failure is one variant of [`DomainError`]. The `Display` text is
//! the user-facing message, and [`DomainError::code`] is a stable identifier
//! that survives transport boundaries.

use thiserror::Error;

/// Domain-specific errors for voter business rule violations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Voter id missing from the request
    #[error("Invalid id")]
    InvalidId,

    /// No voter stored under the requested id
    #[error("Voter not found")]
    VoterNotFound,

    /// Email missing or blank
    #[error("Invalid email")]
    InvalidEmail,

    /// Email already registered (create only)
    #[error("Existent email")]
    ExistentEmail,

    /// Email registered by a different voter
    #[error("Duplicate email")]
    DuplicateEmail,

    /// Name missing or blank
    #[error("Invalid name")]
    InvalidName,

    /// Name has a single part
    #[error("Invalid name, name must contain a last name")]
    MissingLastName,

    /// Trimmed name below the minimum length
    #[error("Invalid name, too short")]
    NameTooShort,

    /// Password and confirmation differ
    #[error("Passwords don't match")]
    PasswordMismatch,

    /// Password missing on create
    #[error("Password required")]
    PasswordRequired,

    /// Election service could not be reached
    #[error("Election not found")]
    ElectionUnavailable,

    /// Election service failed to answer with a vote count
    #[error("Invalid value")]
    ElectionFailure,

    /// Voter has votes recorded and cannot be deleted
    #[error("Voter already voted")]
    AlreadyVoted,

    /// Internal domain error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl DomainError {
    /// Stable error code for clients and transport metadata.
    pub fn code(&self) -> &'static str {
        match self {
            DomainError::InvalidId => "INVALID_ID",
            DomainError::VoterNotFound => "VOTER_NOT_FOUND",
            DomainError::InvalidEmail => "INVALID_EMAIL",
            DomainError::ExistentEmail => "EXISTENT_EMAIL",
            DomainError::DuplicateEmail => "DUPLICATE_EMAIL",
            DomainError::InvalidName => "INVALID_NAME",
            DomainError::MissingLastName => "MISSING_LAST_NAME",
            DomainError::NameTooShort => "NAME_TOO_SHORT",
            DomainError::PasswordMismatch => "PASSWORD_MISMATCH",
            DomainError::PasswordRequired => "PASSWORD_REQUIRED",
            DomainError::ElectionUnavailable => "ELECTION_NOT_FOUND",
            DomainError::ElectionFailure => "ELECTION_FAILURE",
            DomainError::AlreadyVoted => "VOTER_ALREADY_VOTED",
            DomainError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Rebuild an error from its code.
    ///
    /// `Internal` is never rebuilt: its detail is not meant to cross a
    /// service boundary.
    pub fn from_code(code: &str) -> Option<Self> {
        let err = match code {
            "INVALID_ID" => DomainError::InvalidId,
            "VOTER_NOT_FOUND" => DomainError::VoterNotFound,
            "INVALID_EMAIL" => DomainError::InvalidEmail,
            "EXISTENT_EMAIL" => DomainError::ExistentEmail,
            "DUPLICATE_EMAIL" => DomainError::DuplicateEmail,
            "INVALID_NAME" => DomainError::InvalidName,
            "MISSING_LAST_NAME" => DomainError::MissingLastName,
            "NAME_TOO_SHORT" => DomainError::NameTooShort,
            "PASSWORD_MISMATCH" => DomainError::PasswordMismatch,
            "PASSWORD_REQUIRED" => DomainError::PasswordRequired,
            "ELECTION_NOT_FOUND" => DomainError::ElectionUnavailable,
            "ELECTION_FAILURE" => DomainError::ElectionFailure,
            "VOTER_ALREADY_VOTED" => DomainError::AlreadyVoted,
            _ => return None,
        };
        Some(err)
    }

    /// True for failures caused by the caller's input rather than the system.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, DomainError::Internal(_))
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        DomainError::Internal(msg.into())
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_match_user_facing_text() {
        assert_eq!(DomainError::InvalidId.to_string(), "Invalid id");
        assert_eq!(DomainError::VoterNotFound.to_string(), "Voter not found");
        assert_eq!(
            DomainError::MissingLastName.to_string(),
            "Invalid name, name must contain a last name"
        );
        assert_eq!(DomainError::PasswordMismatch.to_string(), "Passwords don't match");
        assert_eq!(DomainError::ElectionUnavailable.to_string(), "Election not found");
        assert_eq!(DomainError::ElectionFailure.to_string(), "Invalid value");
        assert_eq!(DomainError::AlreadyVoted.to_string(), "Voter already voted");
    }

    #[test]
    fn test_code_round_trip() {
        let errors = [
            DomainError::InvalidId,
            DomainError::VoterNotFound,
            DomainError::InvalidEmail,
            DomainError::ExistentEmail,
            DomainError::DuplicateEmail,
            DomainError::InvalidName,
            DomainError::MissingLastName,
            DomainError::NameTooShort,
            DomainError::PasswordMismatch,
            DomainError::PasswordRequired,
            DomainError::ElectionUnavailable,
            DomainError::ElectionFailure,
            DomainError::AlreadyVoted,
        ];

        for err in errors {
            assert_eq!(DomainError::from_code(err.code()), Some(err));
        }
    }

    #[test]
    fn test_internal_not_rebuilt_from_code() {
        let err = DomainError::internal("hash failed");
        assert_eq!(err.code(), "INTERNAL_ERROR");
        assert_eq!(DomainError::from_code(err.code()), None);
        assert!(!err.is_client_error());
    }
}
