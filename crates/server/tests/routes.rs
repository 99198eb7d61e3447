//! Router tests over in-memory repositories; no database needed.
use std::collections::HashSet;
use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use chrono::NaiveDate;
use serde_json::Value;
use service::custom_game::{CustomGameService, CLUES_PER_GAME};
use service::game::GameService;
use service::memory::InMemoryStore;
use tower::ServiceExt;

use server::{routes, state::AppState};

fn cors() -> tower_http::cors::CorsLayer { tower_http::cors::CorsLayer::very_permissive() }

fn build_app(store: Arc<InMemoryStore>) -> Router {
    let state = AppState::new(
        Arc::new(GameService::new(store.clone())),
        Arc::new(CustomGameService::new(store)),
    );
    routes::build_router(state, cors())
}

fn seeded_store(canon_clues: usize) -> Arc<InMemoryStore> {
    let store = Arc::new(InMemoryStore::new());
    let cat = store.add_category("STATE CAPITALS");
    for _ in 0..canon_clues {
        store.add_clue(cat.id, None, 400, true);
    }
    store
}

async fn send(app: &Router, method: &str, uri: &str) -> anyhow::Result<(StatusCode, Value)> {
    let req = Request::builder().method(method).uri(uri).body(Body::empty())?;
    let res = app.clone().oneshot(req).await?;
    let status = res.status();
    let bytes = to_bytes(res.into_body(), usize::MAX).await?;
    let body = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes).unwrap_or(Value::Null) };
    Ok((status, body))
}

fn clue_ids(body: &Value) -> HashSet<i64> {
    body["clues"]
        .as_array()
        .expect("clues array")
        .iter()
        .map(|c| c["id"].as_i64().expect("clue id"))
        .collect()
}

#[tokio::test]
async fn test_health() -> anyhow::Result<()> {
    let app = build_app(seeded_store(0));
    let (status, body) = send(&app, "GET", "/health").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn test_get_game_shape_and_total() -> anyhow::Result<()> {
    let store = seeded_store(0);
    let cat = store.add_category("OPERA");
    let g = store.add_game(6100, NaiveDate::from_ymd_opt(2011, 2, 14).unwrap());
    store.add_clue(cat.id, Some(g.id), 800, true);
    store.add_clue(cat.id, Some(g.id), 1200, true);
    let app = build_app(store);

    let (status, body) = send(&app, "GET", &format!("/api/games/{}", g.id)).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], g.id);
    assert_eq!(body["episode_id"], 6100);
    assert_eq!(body["aired"], "2011-02-14");
    assert_eq!(body["canon"], true);
    assert_eq!(body["total_amount_won"], 2000);
    Ok(())
}

#[tokio::test]
async fn test_get_game_without_clues_totals_zero() -> anyhow::Result<()> {
    let store = seeded_store(0);
    let g = store.add_game(1, NaiveDate::from_ymd_opt(1984, 9, 10).unwrap());
    let app = build_app(store);

    let (status, body) = send(&app, "GET", &format!("/api/games/{}", g.id)).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_amount_won"], 0);
    Ok(())
}

#[tokio::test]
async fn test_get_missing_game_is_404_with_message() -> anyhow::Result<()> {
    let app = build_app(seeded_store(0));
    let (status, body) = send(&app, "GET", "/api/games/987654").await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(!body["message"].as_str().unwrap_or_default().is_empty());
    Ok(())
}

#[tokio::test]
async fn test_non_numeric_id_is_rejected() -> anyhow::Result<()> {
    let app = build_app(seeded_store(0));
    let (status, _) = send(&app, "GET", "/api/games/abc").await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn test_create_then_get_custom_game() -> anyhow::Result<()> {
    let app = build_app(seeded_store(45));

    let (status, created) = send(&app, "POST", "/api/custom-games").await?;
    assert_eq!(status, StatusCode::OK);
    let clues = created["clues"].as_array().expect("clues array");
    assert_eq!(clues.len(), CLUES_PER_GAME);
    for c in clues {
        assert_eq!(c["category"]["title"], "STATE CAPITALS");
        assert!(c["category"]["id"].is_i64());
        assert_eq!(c["invalid_count"], 0);
    }

    let id = created["id"].as_i64().expect("id");
    let (status, fetched) = send(&app, "GET", &format!("/api/custom-games/{id}")).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["id"], created["id"]);
    assert_eq!(fetched["created_on"], created["created_on"]);
    assert_eq!(clue_ids(&fetched), clue_ids(&created));
    Ok(())
}

#[tokio::test]
async fn test_custom_game_with_too_few_clues_is_409() -> anyhow::Result<()> {
    let store = seeded_store(3);
    let app = build_app(store.clone());
    let (status, body) = send(&app, "POST", "/api/custom-games").await?;
    assert_eq!(status, StatusCode::CONFLICT);
    assert!(body["message"].is_string());
    assert_eq!(store.definition_count(), 0);
    Ok(())
}

#[tokio::test]
async fn test_failed_create_is_500_and_persists_nothing() -> anyhow::Result<()> {
    let store = seeded_store(30);
    store.fail_link_inserts(true);
    let app = build_app(store.clone());

    let (status, body) = send(&app, "POST", "/api/custom-games").await?;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "internal server error");
    assert_eq!(store.definition_count(), 0);
    Ok(())
}

#[tokio::test]
async fn test_missing_or_empty_custom_game_is_404() -> anyhow::Result<()> {
    let store = seeded_store(0);
    let empty = store.add_empty_definition();
    let app = build_app(store);

    let (status, body) = send(&app, "GET", "/api/custom-games/424242").await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Custom game not found");

    let (status, _) = send(&app, "GET", &format!("/api/custom-games/{}", empty.id)).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn test_metrics_and_docs_are_served() -> anyhow::Result<()> {
    let app = build_app(seeded_store(0));
    let _ = send(&app, "GET", "/api/games/1").await?;

    let req = Request::builder().uri("/metrics").body(Body::empty())?;
    let res = app.clone().oneshot(req).await?;
    assert_eq!(res.status(), StatusCode::OK);
    let text = String::from_utf8(to_bytes(res.into_body(), usize::MAX).await?.to_vec())?;
    assert!(text.contains("trivia_request_duration_seconds"));

    let (status, doc) = send(&app, "GET", "/api-docs/openapi.json").await?;
    assert_eq!(status, StatusCode::OK);
    assert!(doc["paths"]["/api/custom-games"].is_object());
    Ok(())
}
