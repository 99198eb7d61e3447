use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Games::Table)
                    .if_not_exists()
                    .col(pk_auto(Games::Id))
                    .col(integer(Games::EpisodeId).not_null())
                    .col(date(Games::Aired).not_null())
                    .col(boolean(Games::Canon).not_null().default(true))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Games::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Games {
    Table,
    Id,
    EpisodeId,
    Aired,
    Canon,
}
