//! Migrator registering the trivia schema in dependency order.
//! Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_categories;
mod m20240101_000002_create_games;
mod m20240101_000003_create_clues;
mod m20240101_000004_create_game_definitions;
mod m20240101_000005_create_game_definition_clues;
mod m20240101_000006_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_categories::Migration),
            Box::new(m20240101_000002_create_games::Migration),
            Box::new(m20240101_000003_create_clues::Migration),
            Box::new(m20240101_000004_create_game_definitions::Migration),
            Box::new(m20240101_000005_create_game_definition_clues::Migration),
            // Indexes should always be applied last
            Box::new(m20240101_000006_add_indexes::Migration),
        ]
    }
}
