use sea_orm::{entity::prelude::*, sea_query::Expr, DatabaseConnection, FromQueryResult, QuerySelect};
use serde::{Deserialize, Serialize};

use crate::{clue, errors};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "games")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub episode_id: i32,
    pub aired: Date,
    pub canon: bool,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Clue }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Clue => Entity::has_many(clue::Entity).into(),
        }
    }
}

impl Related<clue::Entity> for Entity {
    fn to() -> RelationDef { Relation::Clue.def() }
}

impl ActiveModelBehavior for ActiveModel {}

/// A game row plus the summed value of every clue attached to it.
#[derive(Clone, Debug, PartialEq, Eq, FromQueryResult)]
pub struct GameWithTotal {
    pub id: i32,
    pub episode_id: i32,
    pub aired: Date,
    pub canon: bool,
    pub total_amount_won: i64,
}

/// `games LEFT JOIN clues` grouped by game. Games without clues total 0.
pub async fn find_with_total(db: &DatabaseConnection, id: i32) -> Result<Option<GameWithTotal>, errors::ModelError> {
    Entity::find_by_id(id)
        .select_only()
        .column(Column::Id)
        .column(Column::EpisodeId)
        .column(Column::Aired)
        .column(Column::Canon)
        .column_as(Expr::cust(r#"COALESCE(SUM("clues"."value"), 0)"#), "total_amount_won")
        .left_join(clue::Entity)
        .group_by(Column::Id)
        .into_model::<GameWithTotal>()
        .one(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))
}
