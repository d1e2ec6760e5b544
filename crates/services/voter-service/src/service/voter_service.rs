//! Voter service - Handles voter-related business logic.
//!
//! Every check runs before the first mutating store call, so a failed
//! operation never leaves a partial write behind.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

use common::AppResult;
use domain::validation::{check_password_confirmation, non_blank, validate_name};
use domain::{DomainError, GenericOutput, NewVoter, Password, VoterInput, VoterOutput};

use crate::client::{ElectionClient, ElectionClientError};
use crate::repository::VoterRepository;

/// Voter service trait for dependency injection.
#[async_trait]
pub trait VoterService: Send + Sync {
    /// List all voters
    async fn list(&self) -> AppResult<Vec<VoterOutput>>;

    /// Validate and store a new voter
    async fn create(&self, input: VoterInput) -> AppResult<VoterOutput>;

    /// Get voter by ID
    async fn get_by_id(&self, id: Option<i64>) -> AppResult<VoterOutput>;

    /// Replace email and name, and the password when a new one is given
    async fn update(&self, id: Option<i64>, input: VoterInput) -> AppResult<VoterOutput>;

    /// Delete a voter who has not voted yet
    async fn delete(&self, id: Option<i64>) -> AppResult<GenericOutput>;
}

/// Whether input is validated for a new voter or an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InputMode {
    Create,
    Update,
}

/// Input that passed validation, with the password already hashed.
#[derive(Debug)]
struct ValidatedInput {
    email: String,
    name: String,
    password: Option<Password>,
}

/// Concrete implementation of VoterService.
pub struct VoterManager {
    repo: Arc<dyn VoterRepository>,
    election: Arc<dyn ElectionClient>,
}

impl VoterManager {
    /// Create new voter service instance
    pub fn new(repo: Arc<dyn VoterRepository>, election: Arc<dyn ElectionClient>) -> Self {
        Self { repo, election }
    }

    /// Apply the field rules in order: email, name, password.
    async fn validate_input(&self, input: VoterInput, mode: InputMode) -> AppResult<ValidatedInput> {
        let email = non_blank(input.email).ok_or(DomainError::InvalidEmail)?;

        if mode == InputMode::Create && self.repo.find_first_by_email(&email).await?.is_some() {
            return Err(DomainError::ExistentEmail.into());
        }

        let name = non_blank(input.name).ok_or(DomainError::InvalidName)?;
        validate_name(&name)?;

        let password = match non_blank(input.password) {
            Some(password) => {
                check_password_confirmation(&password, input.password_confirm.as_deref())?;
                Some(Password::new(&password)?)
            }
            None if mode == InputMode::Create => return Err(DomainError::PasswordRequired.into()),
            None => None,
        };

        Ok(ValidatedInput {
            email,
            name,
            password,
        })
    }

    /// Fail if the email belongs to a voter other than `current`.
    async fn check_email_duplicate(&self, email: &str, current: Option<i64>) -> AppResult<()> {
        match self.repo.find_first_by_email(email).await? {
            Some(existing) if Some(existing.id) != current => Err(DomainError::DuplicateEmail.into()),
            _ => Ok(()),
        }
    }

    /// Refuse deletion unless the election service confirms zero votes.
    async fn ensure_has_not_voted(&self, voter_id: i64) -> AppResult<()> {
        match self.election.count_votes_by_voter_id(voter_id).await {
            Ok(count) if count > 0 => {
                info!(voter_id, count, "Refusing to delete voter with votes");
                Err(DomainError::AlreadyVoted.into())
            }
            Ok(_) => Ok(()),
            Err(ElectionClientError::Unreachable(reason)) => {
                warn!(voter_id, %reason, "Election service unreachable");
                Err(DomainError::ElectionUnavailable.into())
            }
            Err(e) => {
                warn!(
                    voter_id,
                    error = %e,
                    remote_internal = e.is_internal_remote_error(),
                    "Election service failed to count votes"
                );
                Err(DomainError::ElectionFailure.into())
            }
        }
    }
}

#[async_trait]
impl VoterService for VoterManager {
    async fn list(&self) -> AppResult<Vec<VoterOutput>> {
        let voters = self.repo.find_all().await?;
        Ok(voters.into_iter().map(VoterOutput::from).collect())
    }

    async fn create(&self, input: VoterInput) -> AppResult<VoterOutput> {
        let input = self.validate_input(input, InputMode::Create).await?;
        self.check_email_duplicate(&input.email, None).await?;

        let password = input.password.ok_or(DomainError::PasswordRequired)?;
        let voter = self
            .repo
            .create(NewVoter {
                email: input.email,
                name: input.name,
                password_hash: password.into_string(),
            })
            .await?;

        info!(voter_id = voter.id, "Voter created");
        Ok(VoterOutput::from(voter))
    }

    async fn get_by_id(&self, id: Option<i64>) -> AppResult<VoterOutput> {
        let id = id.ok_or(DomainError::InvalidId)?;

        let voter = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(DomainError::VoterNotFound)?;

        Ok(VoterOutput::from(voter))
    }

    async fn update(&self, id: Option<i64>, input: VoterInput) -> AppResult<VoterOutput> {
        let id = id.ok_or(DomainError::InvalidId)?;
        let input = self.validate_input(input, InputMode::Update).await?;
        self.check_email_duplicate(&input.email, Some(id)).await?;

        let mut voter = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(DomainError::VoterNotFound)?;

        let password_changed = input.password.is_some();
        voter.apply_update(input.email, input.name, input.password);
        let voter = self.repo.save(voter).await?;

        info!(voter_id = voter.id, password_changed, "Voter updated");
        Ok(VoterOutput::from(voter))
    }

    async fn delete(&self, id: Option<i64>) -> AppResult<GenericOutput> {
        let id = id.ok_or(DomainError::InvalidId)?;

        let voter = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(DomainError::VoterNotFound)?;

        self.ensure_has_not_voted(id).await?;
        self.repo.delete(&voter).await?;

        info!(voter_id = id, "Voter deleted");
        Ok(GenericOutput::voter_deleted())
    }
}
