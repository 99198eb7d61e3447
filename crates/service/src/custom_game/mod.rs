pub mod repository;
pub mod service;

pub use repository::{CustomGameRepository, SeaOrmCustomGameRepository};
pub use service::{CustomGameService, CLUES_PER_GAME};
