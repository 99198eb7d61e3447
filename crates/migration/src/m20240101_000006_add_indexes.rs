use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Clues: lookups by category and by game
        manager
            .create_index(
                Index::create()
                    .name("idx_clues_category")
                    .table(Clues::Table)
                    .col(Clues::CategoryId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_clues_game")
                    .table(Clues::Table)
                    .col(Clues::GameId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        // Clues: canon filter used by custom game sampling
        manager
            .create_index(
                Index::create()
                    .name("idx_clues_canon")
                    .table(Clues::Table)
                    .col(Clues::Canon)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_gdc_game_definition")
                    .table(GameDefinitionClues::Table)
                    .col(GameDefinitionClues::GameDefinitionId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_gdc_game_definition").table(GameDefinitionClues::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_clues_canon").table(Clues::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_clues_game").table(Clues::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_clues_category").table(Clues::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Clues {
    Table,
    CategoryId,
    GameId,
    Canon,
}

#[derive(DeriveIden)]
enum GameDefinitionClues {
    Table,
    GameDefinitionId,
}
