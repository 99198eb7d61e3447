use std::sync::Arc;
use chrono::Utc;
use tracing::{info, instrument, warn};

use crate::custom_game::repository::CustomGameRepository;
use crate::dto::{ClueOut, CustomGameOut};
use crate::errors::ServiceError;

/// Number of clues sampled into every custom game.
pub const CLUES_PER_GAME: usize = 30;

/// Creates custom games from randomly sampled canonical clues and serves them back.
pub struct CustomGameService {
    repo: Arc<dyn CustomGameRepository>,
}

impl CustomGameService {
    pub fn new(repo: Arc<dyn CustomGameRepository>) -> Self { Self { repo } }

    /// Sample clues, then persist the definition and its links atomically.
    /// Nothing is written when fewer than [`CLUES_PER_GAME`] canonical clues exist.
    #[instrument(skip(self))]
    pub async fn create(&self) -> Result<CustomGameOut, ServiceError> {
        let sampled = self.repo.sample_canon_clues(CLUES_PER_GAME as u64).await?;
        if sampled.len() < CLUES_PER_GAME {
            warn!(available = sampled.len(), "not enough canonical clues for a custom game");
            return Err(ServiceError::InsufficientClues { required: CLUES_PER_GAME, available: sampled.len() });
        }

        let clue_ids: Vec<i32> = sampled.iter().map(|(c, _)| c.id).collect();
        let definition = self.repo.create_definition(Utc::now().into(), &clue_ids).await?;
        info!(custom_game_id = definition.id, clue_count = clue_ids.len(), "custom game created");

        Ok(CustomGameOut {
            id: definition.id,
            created_on: definition.created_on,
            clues: sampled.into_iter().map(ClueOut::from).collect(),
        })
    }

    /// A definition without any linked clue is reported as missing.
    #[instrument(skip(self))]
    pub async fn get(&self, custom_game_id: i32) -> Result<CustomGameOut, ServiceError> {
        let definition = self
            .repo
            .find_definition(custom_game_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Custom game"))?;
        let clues = self.repo.definition_clues(custom_game_id).await?;
        if clues.is_empty() {
            return Err(ServiceError::not_found("Custom game"));
        }
        Ok(CustomGameOut {
            id: definition.id,
            created_on: definition.created_on,
            clues: clues.into_iter().map(ClueOut::from).collect(),
        })
    }
}
