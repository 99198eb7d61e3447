//! Response shapes returned by the HTTP layer.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use models::{category, clue, game};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOut {
    pub id: i32,
    pub episode_id: i32,
    /// `YYYY-MM-DD`
    pub aired: String,
    pub canon: bool,
    pub total_amount_won: i64,
}

impl From<game::GameWithTotal> for GameOut {
    fn from(g: game::GameWithTotal) -> Self {
        Self {
            id: g.id,
            episode_id: g.episode_id,
            aired: g.aired.format("%Y-%m-%d").to_string(),
            canon: g.canon,
            total_amount_won: g.total_amount_won,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryOut {
    pub id: i32,
    pub title: String,
}

impl From<category::Model> for CategoryOut {
    fn from(c: category::Model) -> Self {
        Self { id: c.id, title: c.title }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClueOut {
    pub id: i32,
    pub answer: String,
    pub question: String,
    pub value: i32,
    pub invalid_count: i32,
    pub category: CategoryOut,
}

impl From<clue::ClueWithCategory> for ClueOut {
    fn from((c, category): clue::ClueWithCategory) -> Self {
        Self {
            id: c.id,
            answer: c.answer,
            question: c.question,
            value: c.value,
            invalid_count: c.invalid_count,
            category: category.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomGameOut {
    pub id: i32,
    pub created_on: DateTime<FixedOffset>,
    pub clues: Vec<ClueOut>,
}
