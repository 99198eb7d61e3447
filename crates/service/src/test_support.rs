#![cfg(test)]
use tokio::sync::OnceCell;
use sea_orm::{ActiveModelTrait, ActiveValue::NotSet, DatabaseConnection, Set};
use migration::MigratorTrait;
use models::db::{connect_with_config, DatabaseConfig};
use models::{category, clue};
use uuid::Uuid;

// Ensure migrations run only once across the entire test process
static MIGRATED: OnceCell<bool> = OnceCell::const_new();

fn test_config() -> DatabaseConfig {
    let mut cfg = DatabaseConfig::from_file().unwrap_or_else(|_| DatabaseConfig::from_env());
    cfg.max_connections = cfg.max_connections.max(10);
    cfg.min_connections = cfg.min_connections.min(1);
    cfg.acquire_timeout = std::time::Duration::from_secs(10);
    cfg
}

/// Fresh connection for the current test's runtime, or `None` when
/// `SKIP_DB_TESTS` is set or Postgres is unreachable.
pub async fn get_db() -> Result<Option<DatabaseConnection>, anyhow::Error> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return Ok(None);
    }
    // Run migrations exactly once, with a throwaway connection
    let ready = MIGRATED
        .get_or_init(|| async {
            let db = match connect_with_config(&test_config()).await {
                Ok(db) => db,
                Err(e) => {
                    eprintln!("skip: cannot connect to db: {}", e);
                    return false;
                }
            };
            match migration::Migrator::up(&db, None).await {
                Ok(()) => true,
                Err(e) => {
                    eprintln!("skip: migrate up failed: {}", e);
                    false
                }
            }
        })
        .await;
    if !*ready {
        return Ok(None);
    }
    Ok(Some(connect_with_config(&test_config()).await?))
}

/// Insert `n` canonical clues under a fresh category.
pub async fn seed_canon_clues(db: &DatabaseConnection, n: usize) -> Result<Vec<clue::Model>, anyhow::Error> {
    let cat = category::ActiveModel {
        id: NotSet,
        title: Set(format!("svc_category_{}", Uuid::new_v4())),
        canon: Set(true),
    }
    .insert(db)
    .await?;

    let mut out = Vec::with_capacity(n);
    for i in 0..n {
        let am = clue::ActiveModel {
            id: NotSet,
            answer: Set(format!("svc answer {i}")),
            question: Set(format!("svc question {i}")),
            value: Set(200),
            invalid_count: Set(0),
            category_id: Set(cat.id),
            game_id: Set(None),
            canon: Set(true),
        };
        out.push(am.insert(db).await?);
    }
    Ok(out)
}
