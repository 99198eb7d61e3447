use chrono::NaiveDate;
use migration::MigratorTrait;
use sea_orm::{ActiveModelTrait, ActiveValue::NotSet, DatabaseConnection, Set};
use tokio::sync::OnceCell;
use uuid::Uuid;

use crate::{category, clue, db::connect, game};




// Ensure migrations run only once across the entire test process
static MIGRATED: OnceCell<bool> = OnceCell::const_new();

/// Connect and migrate, or `None` when the database is unavailable or
/// `SKIP_DB_TESTS` is set.
pub async fn setup_test_db() -> Option<DatabaseConnection> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return None;
    }
    let migrated = MIGRATED
        .get_or_init(|| async {
            match connect().await {
                Ok(db) => match migration::Migrator::up(&db, None).await {
                    Ok(()) => true,
                    Err(e) => {
                        eprintln!("skip: migrate up failed: {}", e);
                        false
                    }
                },
                Err(e) => {
                    eprintln!("skip: cannot connect to db: {}", e);
                    false
                }
            }
        })
        .await;
    if !*migrated {
        return None;
    }
    connect().await.ok()
}

pub async fn seed_category(db: &DatabaseConnection) -> anyhow::Result<category::Model> {
    let am = category::ActiveModel {
        id: NotSet,
        title: Set(format!("category_{}", Uuid::new_v4())),
        canon: Set(true),
    };
    Ok(am.insert(db).await?)
}

pub async fn seed_game(db: &DatabaseConnection, episode_id: i32) -> anyhow::Result<game::Model> {
    let am = game::ActiveModel {
        id: NotSet,
        episode_id: Set(episode_id),
        aired: Set(NaiveDate::from_ymd_opt(1998, 3, 17).expect("valid date")),
        canon: Set(true),
    };
    Ok(am.insert(db).await?)
}

pub async fn seed_clue(
    db: &DatabaseConnection,
    category_id: i32,
    game_id: Option<i32>,
    value: i32,
    canon: bool,
) -> anyhow::Result<clue::Model> {
    let am = clue::ActiveModel {
        id: NotSet,
        answer: Set(format!("answer {}", Uuid::new_v4())),
        question: Set("What is a test?".to_string()),
        value: Set(value),
        invalid_count: Set(0),
        category_id: Set(category_id),
        game_id: Set(game_id),
        canon: Set(canon),
    };
    Ok(am.insert(db).await?)
}
