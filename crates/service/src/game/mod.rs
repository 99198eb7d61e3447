pub mod repository;
pub mod service;

pub use repository::{GameRepository, SeaOrmGameRepository};
pub use service::GameService;
