use std::collections::HashSet;

use sea_orm::{entity::prelude::*, ActiveValue::NotSet, DatabaseConnection, QueryOrder, Set, TransactionTrait};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{category, clue, errors, game_definition_clue};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "game_definitions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub created_on: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { GameDefinitionClue }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::GameDefinitionClue => Entity::has_many(game_definition_clue::Entity).into(),
        }
    }
}

impl Related<game_definition_clue::Entity> for Entity {
    fn to() -> RelationDef { Relation::GameDefinitionClue.def() }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_clue_ids(clue_ids: &[i32]) -> Result<(), errors::ModelError> {
    if clue_ids.is_empty() {
        return Err(errors::ModelError::Validation("a game definition needs at least one clue".into()));
    }
    let mut seen = HashSet::with_capacity(clue_ids.len());
    if let Some(dup) = clue_ids.iter().find(|id| !seen.insert(**id)) {
        return Err(errors::ModelError::Validation(format!("clue {dup} listed twice")));
    }
    Ok(())
}

/// Insert a definition and its clue links in one transaction.
///
/// Either the definition row and every `game_definition_clues` row become
/// visible together, or nothing does: an error from any insert drops the
/// transaction uncommitted, which rolls it back.
pub async fn create_with_clues<C>(
    db: &C,
    created_on: DateTimeWithTimeZone,
    clue_ids: &[i32],
) -> Result<Model, errors::ModelError>
where
    C: TransactionTrait,
{
    validate_clue_ids(clue_ids)?;

    let txn = db.begin().await.map_err(|e| errors::ModelError::Db(e.to_string()))?;

    let definition = ActiveModel { id: NotSet, created_on: Set(created_on) }
        .insert(&txn)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))?;

    let links = clue_ids.iter().map(|&clue_id| game_definition_clue::ActiveModel {
        id: NotSet,
        game_definition_id: Set(definition.id),
        clue_id: Set(clue_id),
    });
    game_definition_clue::Entity::insert_many(links)
        .exec(&txn)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))?;

    txn.commit().await.map_err(|e| errors::ModelError::Db(e.to_string()))?;
    debug!(game_definition_id = definition.id, clue_count = clue_ids.len(), "game definition committed");
    Ok(definition)
}

pub async fn find(db: &DatabaseConnection, id: i32) -> Result<Option<Model>, errors::ModelError> {
    Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))
}

/// Clues linked to a definition, in link insertion order, each with its category.
pub async fn find_clues(db: &DatabaseConnection, id: i32) -> Result<Vec<clue::ClueWithCategory>, errors::ModelError> {
    let rows = clue::Entity::find()
        .inner_join(game_definition_clue::Entity)
        .filter(game_definition_clue::Column::GameDefinitionId.eq(id))
        .find_also_related(category::Entity)
        .order_by_asc(game_definition_clue::Column::Id)
        .all(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))?;
    clue::require_category(rows)
}
