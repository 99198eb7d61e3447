use axum::{extract::{Path, State}, Json};
use service::dto::GameOut;
use tracing::info;

use crate::{errors::ApiError, state::AppState};

#[utoipa::path(
    get, path = "/api/games/{game_id}", tag = "games",
    params(("game_id" = i32, Path, description = "Game ID")),
    responses(
        (status = 200, description = "Game with total amount won", body = crate::openapi::GameOutDoc),
        (status = 404, description = "Game not found", body = crate::openapi::MessageDoc)
    )
)]
pub async fn get_game(State(state): State<AppState>, Path(game_id): Path<i32>) -> Result<Json<GameOut>, ApiError> {
    let game = state.games.get(game_id).await?;
    info!(game_id, total_amount_won = game.total_amount_won, "get game");
    Ok(Json(game))
}
