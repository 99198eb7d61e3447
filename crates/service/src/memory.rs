//! In-memory repositories backing router and service tests.
//!
//! Mirrors the Postgres behaviour the services rely on: uniform sampling
//! without replacement, all-or-nothing definition inserts, and foreign-key
//! checks on clue links.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::NaiveDate;
use rand::seq::SliceRandom;
use sea_orm::prelude::DateTimeWithTimeZone;

use models::{category, clue::{self, ClueWithCategory}, game, game_definition};

use crate::custom_game::CustomGameRepository;
use crate::errors::ServiceError;
use crate::game::GameRepository;

#[derive(Default)]
struct State {
    next_id: i32,
    categories: HashMap<i32, category::Model>,
    games: Vec<game::Model>,
    clues: Vec<clue::Model>,
    definitions: Vec<game_definition::Model>,
    // (game_definition_id, clue_id) in insertion order
    links: Vec<(i32, i32)>,
    fail_link_inserts: bool,
}

impl State {
    fn next_id(&mut self) -> i32 {
        self.next_id += 1;
        self.next_id
    }

    fn with_category(&self, c: &clue::Model) -> Result<ClueWithCategory, ServiceError> {
        let category = self
            .categories
            .get(&c.category_id)
            .cloned()
            .ok_or_else(|| ServiceError::Db(format!("clue {} has no category", c.id)))?;
        Ok((c.clone(), category))
    }
}

/// Thread-safe store implementing every repository trait.
#[derive(Default)]
pub struct InMemoryStore {
    state: Mutex<State>,
}

impl InMemoryStore {
    pub fn new() -> Self { Self::default() }

    fn lock(&self) -> std::sync::MutexGuard<'_, State> {
        // a panicking test must not poison the store for the others
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn add_category(&self, title: &str) -> category::Model {
        let mut s = self.lock();
        let model = category::Model { id: s.next_id(), title: title.to_string(), canon: true };
        s.categories.insert(model.id, model.clone());
        model
    }

    pub fn add_game(&self, episode_id: i32, aired: NaiveDate) -> game::Model {
        let mut s = self.lock();
        let model = game::Model { id: s.next_id(), episode_id, aired, canon: true };
        s.games.push(model.clone());
        model
    }

    pub fn add_clue(&self, category_id: i32, game_id: Option<i32>, value: i32, canon: bool) -> clue::Model {
        let mut s = self.lock();
        let id = s.next_id();
        let model = clue::Model {
            id,
            answer: format!("answer #{id}"),
            question: format!("question #{id}"),
            value,
            invalid_count: 0,
            category_id,
            game_id,
            canon,
        };
        s.clues.push(model.clone());
        model
    }

    /// A definition with no clue links, which the schema allows but the service never creates.
    pub fn add_empty_definition(&self) -> game_definition::Model {
        let mut s = self.lock();
        let model = game_definition::Model { id: s.next_id(), created_on: chrono::Utc::now().into() };
        s.definitions.push(model.clone());
        model
    }

    pub fn clue(&self, id: i32) -> Option<clue::Model> {
        self.lock().clues.iter().find(|c| c.id == id).cloned()
    }

    pub fn definition_count(&self) -> usize {
        self.lock().definitions.len()
    }

    /// Make every following link insert fail after the definition insert.
    pub fn fail_link_inserts(&self, fail: bool) {
        self.lock().fail_link_inserts = fail;
    }
}

#[async_trait]
impl GameRepository for InMemoryStore {
    async fn find_with_total(&self, id: i32) -> Result<Option<game::GameWithTotal>, ServiceError> {
        let s = self.lock();
        let Some(g) = s.games.iter().find(|g| g.id == id) else { return Ok(None) };
        let total = s
            .clues
            .iter()
            .filter(|c| c.game_id == Some(id))
            .map(|c| i64::from(c.value))
            .sum();
        Ok(Some(game::GameWithTotal {
            id: g.id,
            episode_id: g.episode_id,
            aired: g.aired,
            canon: g.canon,
            total_amount_won: total,
        }))
    }
}

#[async_trait]
impl CustomGameRepository for InMemoryStore {
    async fn sample_canon_clues(&self, limit: u64) -> Result<Vec<ClueWithCategory>, ServiceError> {
        let s = self.lock();
        let canon: Vec<&clue::Model> = s.clues.iter().filter(|c| c.canon).collect();
        let picked: Vec<&clue::Model> = canon
            .choose_multiple(&mut rand::thread_rng(), limit as usize)
            .copied()
            .collect();
        picked.into_iter().map(|c| s.with_category(c)).collect()
    }

    async fn create_definition(&self, created_on: DateTimeWithTimeZone, clue_ids: &[i32]) -> Result<game_definition::Model, ServiceError> {
        game_definition::validate_clue_ids(clue_ids)?;
        let mut s = self.lock();
        // 先生成定义，再校验外键；任一失败都不写入任何数据
        let definition = game_definition::Model { id: s.next_id(), created_on };
        if s.fail_link_inserts {
            return Err(ServiceError::Db("simulated link insert failure".into()));
        }
        if let Some(missing) = clue_ids.iter().find(|id| !s.clues.iter().any(|c| c.id == **id)) {
            return Err(ServiceError::Db(format!("clue {missing} violates fk_gdc_clue")));
        }
        s.definitions.push(definition.clone());
        s.links.extend(clue_ids.iter().map(|&clue_id| (definition.id, clue_id)));
        Ok(definition)
    }

    async fn find_definition(&self, id: i32) -> Result<Option<game_definition::Model>, ServiceError> {
        Ok(self.lock().definitions.iter().find(|d| d.id == id).cloned())
    }

    async fn definition_clues(&self, id: i32) -> Result<Vec<ClueWithCategory>, ServiceError> {
        let s = self.lock();
        s.links
            .iter()
            .filter(|(def, _)| *def == id)
            .map(|(_, clue_id)| {
                let c = s
                    .clues
                    .iter()
                    .find(|c| c.id == *clue_id)
                    .ok_or_else(|| ServiceError::Db(format!("dangling link to clue {clue_id}")))?;
                s.with_category(c)
            })
            .collect()
    }
}
