use sea_orm::{
    entity::prelude::*, sea_query::Expr, DatabaseConnection, Order, QueryOrder, QuerySelect,
};
use serde::{Deserialize, Serialize};

use crate::{category, errors, game, game_definition_clue};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "clues")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "Text")]
    pub answer: String,
    #[sea_orm(column_type = "Text")]
    pub question: String,
    pub value: i32,
    pub invalid_count: i32,
    pub category_id: i32,
    pub game_id: Option<i32>,
    pub canon: bool,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Category, Game, GameDefinitionClue }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Category => Entity::belongs_to(category::Entity)
                .from(Column::CategoryId)
                .to(category::Column::Id)
                .into(),
            Relation::Game => Entity::belongs_to(game::Entity)
                .from(Column::GameId)
                .to(game::Column::Id)
                .into(),
            Relation::GameDefinitionClue => Entity::has_many(game_definition_clue::Entity).into(),
        }
    }
}

impl Related<category::Entity> for Entity {
    fn to() -> RelationDef { Relation::Category.def() }
}

impl Related<game::Entity> for Entity {
    fn to() -> RelationDef { Relation::Game.def() }
}

impl Related<game_definition_clue::Entity> for Entity {
    fn to() -> RelationDef { Relation::GameDefinitionClue.def() }
}

impl ActiveModelBehavior for ActiveModel {}

/// A clue paired with the category it belongs to.
pub type ClueWithCategory = (Model, category::Model);

/// Pairs rows from a `find_also_related(category)` query. A missing category
/// means the `category_id` foreign key was violated.
pub(crate) fn require_category(
    rows: Vec<(Model, Option<category::Model>)>,
) -> Result<Vec<ClueWithCategory>, errors::ModelError> {
    rows.into_iter()
        .map(|(clue, category)| match category {
            Some(category) => Ok((clue, category)),
            None => Err(errors::ModelError::Db(format!("clue {} has no category", clue.id))),
        })
        .collect()
}

/// Up to `limit` distinct canonical clues drawn uniformly at random by the
/// database (`ORDER BY RANDOM()`), each with its category.
pub async fn sample_canon(db: &DatabaseConnection, limit: u64) -> Result<Vec<ClueWithCategory>, errors::ModelError> {
    let rows = Entity::find()
        .filter(Column::Canon.eq(true))
        .find_also_related(category::Entity)
        .order_by(Expr::cust("RANDOM()"), Order::Asc)
        .limit(limit)
        .all(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))?;
    require_category(rows)
}
