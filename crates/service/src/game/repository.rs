use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use models::game::{self, GameWithTotal};

use crate::errors::ServiceError;

#[async_trait]
pub trait GameRepository: Send + Sync {
    /// Game row with its summed clue values, or `None` when the id is unknown.
    async fn find_with_total(&self, id: i32) -> Result<Option<GameWithTotal>, ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmGameRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl GameRepository for SeaOrmGameRepository {
    async fn find_with_total(&self, id: i32) -> Result<Option<GameWithTotal>, ServiceError> {
        Ok(game::find_with_total(&self.db, id).await?)
    }
}
