use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;

use crate::db::{alert_repo, game_repo, odds_repo};
use crate::errors::AppError;
use crate::models::{Alert, Game, Odds};
use crate::AppState;

#[derive(Serialize)]
pub struct GameDetail {
    #[serde(flatten)]
    pub game: Game,
    pub odds: Vec<Odds>,
    pub alerts: Vec<Alert>,
}

pub async fn detail(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<GameDetail>, AppError> {
    let game = game_repo::get_game_by_id(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Game not found".into()))?;

    let odds = odds_repo::get_odds_by_game(&state.db, id).await?;
    let alerts = alert_repo::get_alerts_by_game(&state.db, id).await?;

    Ok(Json(GameDetail { game, odds, alerts }))
}
