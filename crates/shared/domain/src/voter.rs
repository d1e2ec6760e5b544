//! Voter domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::MESSAGE_VOTER_DELETED;
use crate::password::Password;

/// Voter domain entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Voter {
    pub id: i64,
    pub email: String,
    pub name: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Voter {
    /// Replace the email and name, and the password when a new hash is given.
    pub fn apply_update(&mut self, email: String, name: String, password: Option<Password>) {
        self.email = email;
        self.name = name;
        if let Some(password) = password {
            self.password_hash = password.into_string();
        }
        self.updated_at = Utc::now();
    }

    /// Stored password hash as a value object.
    pub fn password(&self) -> Password {
        Password::from_hash(self.password_hash.clone())
    }
}

/// Voter that has not been stored yet (no id assigned).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewVoter {
    pub email: String,
    pub name: String,
    pub password_hash: String,
}

/// Voter input as sent by clients.
///
/// Every field is optional on the wire; validation decides what is required.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct VoterInput {
    /// Voter email address (unique)
    #[serde(default)]
    #[cfg_attr(feature = "openapi", schema(example = "maria.silva@example.com"))]
    pub email: Option<String>,
    /// Full name, first and last
    #[serde(default)]
    #[cfg_attr(feature = "openapi", schema(example = "Maria Silva"))]
    pub name: Option<String>,
    /// Plain-text password (required on create, optional on update)
    #[serde(default)]
    pub password: Option<String>,
    /// Must repeat `password`
    #[serde(default, rename = "passwordConfirm", alias = "password_confirm")]
    pub password_confirm: Option<String>,
}

/// Voter representation returned to clients (never carries the password)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct VoterOutput {
    /// Voter identifier
    pub id: i64,
    /// Full name
    pub name: String,
    /// Email address
    pub email: String,
}

impl From<Voter> for VoterOutput {
    fn from(voter: Voter) -> Self {
        Self {
            id: voter.id,
            name: voter.name,
            email: voter.email,
        }
    }
}

impl From<&Voter> for VoterOutput {
    fn from(voter: &Voter) -> Self {
        Self {
            id: voter.id,
            name: voter.name.clone(),
            email: voter.email.clone(),
        }
    }
}

/// Generic message response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct GenericOutput {
    /// Human-readable message
    #[cfg_attr(feature = "openapi", schema(example = "Voter deleted"))]
    pub message: String,
}

impl GenericOutput {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Confirmation for a completed delete.
    pub fn voter_deleted() -> Self {
        Self::new(MESSAGE_VOTER_DELETED)
    }
}
