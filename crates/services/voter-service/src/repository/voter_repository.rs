//! Voter repository implementation.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use super::entities::voter::{self, ActiveModel, Entity as VoterEntity};
use common::{AppError, AppResult};
use domain::{NewVoter, Voter};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Voter repository trait for dependency injection.
///
/// The store enforces no email uniqueness of its own; callers check with
/// [`find_first_by_email`](VoterRepository::find_first_by_email) before writing.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait VoterRepository: Send + Sync {
    /// List every voter, ordered by id
    async fn find_all(&self) -> AppResult<Vec<Voter>>;

    /// Find voter by ID
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Voter>>;

    /// Find the lowest-id voter registered with this email
    async fn find_first_by_email(&self, email: &str) -> AppResult<Option<Voter>>;

    /// Store a new voter and assign its id
    async fn create(&self, voter: NewVoter) -> AppResult<Voter>;

    /// Persist changes to an existing voter
    async fn save(&self, voter: Voter) -> AppResult<Voter>;

    /// Remove a voter
    async fn delete(&self, voter: &Voter) -> AppResult<()>;
}

/// Concrete implementation of VoterRepository backed by SeaORM
pub struct VoterStore {
    db: DatabaseConnection,
}

impl VoterStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl VoterRepository for VoterStore {
    async fn find_all(&self) -> AppResult<Vec<Voter>> {
        let models = VoterEntity::find()
            .order_by_asc(voter::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Voter::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Voter>> {
        let result = VoterEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Voter::from))
    }

    async fn find_first_by_email(&self, email: &str) -> AppResult<Option<Voter>> {
        let result = VoterEntity::find()
            .filter(voter::Column::Email.eq(email))
            .order_by_asc(voter::Column::Id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Voter::from))
    }

    async fn create(&self, voter: NewVoter) -> AppResult<Voter> {
        let now = chrono::Utc::now();
        let active_model = ActiveModel {
            email: Set(voter.email),
            name: Set(voter.name),
            password_hash: Set(voter.password_hash),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(Voter::from(model))
    }

    async fn save(&self, voter: Voter) -> AppResult<Voter> {
        let active_model = ActiveModel {
            id: Set(voter.id),
            email: Set(voter.email),
            name: Set(voter.name),
            password_hash: Set(voter.password_hash),
            created_at: Set(voter.created_at),
            updated_at: Set(voter.updated_at),
        };

        let model = active_model.update(&self.db).await.map_err(AppError::from)?;
        Ok(Voter::from(model))
    }

    async fn delete(&self, voter: &Voter) -> AppResult<()> {
        VoterEntity::delete_by_id(voter.id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(())
    }
}
