use std::sync::Arc;
use tracing::{debug, instrument};

use crate::dto::GameOut;
use crate::errors::ServiceError;
use crate::game::repository::GameRepository;

/// Read access to aired games.
pub struct GameService {
    repo: Arc<dyn GameRepository>,
}

impl GameService {
    pub fn new(repo: Arc<dyn GameRepository>) -> Self { Self { repo } }

    #[instrument(skip(self))]
    pub async fn get(&self, game_id: i32) -> Result<GameOut, ServiceError> {
        let found = self
            .repo
            .find_with_total(game_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Game"))?;
        debug!(total_amount_won = found.total_amount_won, "game loaded");
        Ok(found.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::InMemoryStore;
    use chrono::NaiveDate;

    #[tokio::test]
    async fn get_returns_summed_total() {
        let store = Arc::new(InMemoryStore::new());
        let cat = store.add_category("POTENT POTABLES");
        let g = store.add_game(5012, NaiveDate::from_ymd_opt(2006, 5, 9).unwrap());
        store.add_clue(cat.id, Some(g.id), 1000, true);
        store.add_clue(cat.id, Some(g.id), 600, false);

        let svc = GameService::new(store);
        let out = svc.get(g.id).await.unwrap();
        assert_eq!(out.episode_id, 5012);
        assert_eq!(out.aired, "2006-05-09");
        assert_eq!(out.total_amount_won, 1600);
    }

    #[tokio::test]
    async fn get_game_without_clues_is_zero() {
        let store = Arc::new(InMemoryStore::new());
        let g = store.add_game(1, NaiveDate::from_ymd_opt(1984, 9, 10).unwrap());
        let out = GameService::new(store).get(g.id).await.unwrap();
        assert_eq!(out.total_amount_won, 0);
    }

    #[tokio::test]
    async fn get_unknown_game_is_not_found() {
        let svc = GameService::new(Arc::new(InMemoryStore::new()));
        match svc.get(77).await {
            Err(ServiceError::NotFound(msg)) => assert_eq!(msg, "Game not found"),
            other => panic!("expected NotFound, got {:?}", other),
        }
    }
}
