use async_trait::async_trait;
use sea_orm::{prelude::DateTimeWithTimeZone, DatabaseConnection};

use models::{clue::{self, ClueWithCategory}, game_definition};

use crate::errors::ServiceError;

#[async_trait]
pub trait CustomGameRepository: Send + Sync {
    /// Up to `limit` distinct canonical clues chosen uniformly at random.
    async fn sample_canon_clues(&self, limit: u64) -> Result<Vec<ClueWithCategory>, ServiceError>;
    /// Atomically persist a definition together with all of its clue links.
    async fn create_definition(&self, created_on: DateTimeWithTimeZone, clue_ids: &[i32]) -> Result<game_definition::Model, ServiceError>;
    async fn find_definition(&self, id: i32) -> Result<Option<game_definition::Model>, ServiceError>;
    async fn definition_clues(&self, id: i32) -> Result<Vec<ClueWithCategory>, ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmCustomGameRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl CustomGameRepository for SeaOrmCustomGameRepository {
    async fn sample_canon_clues(&self, limit: u64) -> Result<Vec<ClueWithCategory>, ServiceError> {
        Ok(clue::sample_canon(&self.db, limit).await?)
    }

    async fn create_definition(&self, created_on: DateTimeWithTimeZone, clue_ids: &[i32]) -> Result<game_definition::Model, ServiceError> {
        Ok(game_definition::create_with_clues(&self.db, created_on, clue_ids).await?)
    }

    async fn find_definition(&self, id: i32) -> Result<Option<game_definition::Model>, ServiceError> {
        Ok(game_definition::find(&self.db, id).await?)
    }

    async fn definition_clues(&self, id: i32) -> Result<Vec<ClueWithCategory>, ServiceError> {
        Ok(game_definition::find_clues(&self.db, id).await?)
    }
}
