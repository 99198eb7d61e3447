use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GameDefinitions::Table)
                    .if_not_exists()
                    .col(pk_auto(GameDefinitions::Id))
                    .col(
                        timestamp_with_time_zone(GameDefinitions::CreatedOn)
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(GameDefinitions::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum GameDefinitions {
    Table,
    Id,
    CreatedOn,
}
