use axum::{extract::{Path, State}, Json};
use service::dto::CustomGameOut;
use tracing::info;

use crate::{errors::ApiError, observability::CUSTOM_GAMES_CREATED_TOTAL, state::AppState};

#[utoipa::path(
    post, path = "/api/custom-games", tag = "custom-games",
    responses(
        (status = 200, description = "Created custom game with its sampled clues", body = crate::openapi::CustomGameOutDoc),
        (status = 409, description = "Not enough canonical clues", body = crate::openapi::MessageDoc),
        (status = 500, description = "Create Failed", body = crate::openapi::MessageDoc)
    )
)]
pub async fn create_custom_game(State(state): State<AppState>) -> Result<Json<CustomGameOut>, ApiError> {
    let game = state.custom_games.create().await?;
    CUSTOM_GAMES_CREATED_TOTAL.inc();
    info!(custom_game_id = game.id, clue_count = game.clues.len(), "created custom game");
    Ok(Json(game))
}

#[utoipa::path(
    get, path = "/api/custom-games/{custom_game_id}", tag = "custom-games",
    params(("custom_game_id" = i32, Path, description = "Custom game ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::CustomGameOutDoc),
        (status = 404, description = "Custom game not found", body = crate::openapi::MessageDoc)
    )
)]
pub async fn get_custom_game(State(state): State<AppState>, Path(custom_game_id): Path<i32>) -> Result<Json<CustomGameOut>, ApiError> {
    let game = state.custom_games.get(custom_game_id).await?;
    Ok(Json(game))
}
