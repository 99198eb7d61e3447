use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{clue, game_definition};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "game_definition_clues")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub game_definition_id: i32,
    pub clue_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { GameDefinition, Clue }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::GameDefinition => Entity::belongs_to(game_definition::Entity)
                .from(Column::GameDefinitionId)
                .to(game_definition::Column::Id)
                .into(),
            Relation::Clue => Entity::belongs_to(clue::Entity)
                .from(Column::ClueId)
                .to(clue::Column::Id)
                .into(),
        }
    }
}

impl Related<game_definition::Entity> for Entity {
    fn to() -> RelationDef { Relation::GameDefinition.def() }
}

impl Related<clue::Entity> for Entity {
    fn to() -> RelationDef { Relation::Clue.def() }
}

impl ActiveModelBehavior for ActiveModel {}
