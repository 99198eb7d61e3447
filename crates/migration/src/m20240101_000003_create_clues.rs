//! Create `clues` table.
//! Every clue belongs to one category; the owning game is optional.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Clues::Table)
                    .if_not_exists()
                    .col(pk_auto(Clues::Id))
                    .col(text(Clues::Answer).not_null())
                    .col(text(Clues::Question).not_null())
                    .col(integer(Clues::Value).not_null())
                    .col(integer(Clues::InvalidCount).not_null().default(0))
                    .col(integer(Clues::CategoryId).not_null())
                    .col(integer_null(Clues::GameId))
                    .col(boolean(Clues::Canon).not_null().default(true))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_clues_category")
                            .from(Clues::Table, Clues::CategoryId)
                            .to(Categories::Table, Categories::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_clues_game")
                            .from(Clues::Table, Clues::GameId)
                            .to(Games::Table, Games::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Clues::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Clues {
    Table,
    Id,
    Answer,
    Question,
    Value,
    InvalidCount,
    CategoryId,
    GameId,
    Canon,
}

#[derive(DeriveIden)]
enum Categories { Table, Id }

#[derive(DeriveIden)]
enum Games { Table, Id }
