use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::{
    custom_game::{CustomGameService, SeaOrmCustomGameRepository},
    game::{GameService, SeaOrmGameRepository},
};

/// Shared handler state: services over injected repositories.
#[derive(Clone)]
pub struct AppState {
    pub games: Arc<GameService>,
    pub custom_games: Arc<CustomGameService>,
}

impl AppState {
    pub fn new(games: Arc<GameService>, custom_games: Arc<CustomGameService>) -> Self {
        Self { games, custom_games }
    }

    /// Wire the SeaORM repositories onto one connection pool.
    pub fn from_db(db: DatabaseConnection) -> Self {
        let games = GameService::new(Arc::new(SeaOrmGameRepository { db: db.clone() }));
        let custom_games = CustomGameService::new(Arc::new(SeaOrmCustomGameRepository { db }));
        Self::new(Arc::new(games), Arc::new(custom_games))
    }
}
