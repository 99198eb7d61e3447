use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::clue;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "categories")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
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
