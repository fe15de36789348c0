use axum::extract::State;
use axum::Json;

use crate::errors::AppError;
use crate::metrics;
use crate::models::Game;
use crate::services::scoreboard;
use crate::AppState;

pub async fn live(State(state): State<AppState>) -> Result<Json<Vec<Game>>, AppError> {
    metrics::record_scores_request();

    let games = scoreboard::live_scores(&state.db).await?;
    metrics::set_live_games(games.len());

    Ok(Json(games))
}
