//! Create `game_definition_clues` join table.
//! Rows are written once, inside the transaction that creates the owning definition.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GameDefinitionClues::Table)
                    .if_not_exists()
                    .col(pk_auto(GameDefinitionClues::Id))
                    .col(integer(GameDefinitionClues::GameDefinitionId).not_null())
                    .col(integer(GameDefinitionClues::ClueId).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_gdc_game_definition")
                            .from(GameDefinitionClues::Table, GameDefinitionClues::GameDefinitionId)
                            .to(GameDefinitions::Table, GameDefinitions::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_gdc_clue")
                            .from(GameDefinitionClues::Table, GameDefinitionClues::ClueId)
                            .to(Clues::Table, Clues::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(GameDefinitionClues::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum GameDefinitionClues {
    Table,
    Id,
    GameDefinitionId,
    ClueId,
}

#[derive(DeriveIden)]
enum GameDefinitions { Table, Id }

#[derive(DeriveIden)]
enum Clues { Table, Id }
