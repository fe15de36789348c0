use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;

use crate::db::player_repo;
use crate::errors::AppError;
use crate::models::{Player, PlayerGameStats, PlayerProp, PlayerTrend};
use crate::AppState;

const RECENT_GAMES: i64 = 10;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerDetail {
    #[serde(flatten)]
    pub player: Player,
    pub recent_games: Vec<PlayerGameStats>,
    pub props: Vec<PlayerProp>,
    pub trends: Vec<PlayerTrend>,
}

pub async fn detail(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<PlayerDetail>, AppError> {
    let player = player_repo::get_player_by_id(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Player not found".into()))?;

    let recent_games = player_repo::get_recent_stats(&state.db, id, RECENT_GAMES).await?;
    let props = player_repo::get_props_by_player(&state.db, id).await?;
    let trends = player_repo::get_trends_by_player(&state.db, id).await?;

    Ok(Json(PlayerDetail {
        player,
        recent_games,
        props,
        trends,
    }))
}

pub async fn by_team(
    State(state): State<AppState>,
    Path(team): Path<String>,
) -> Result<Json<Vec<Player>>, AppError> {
    let players = player_repo::get_players_by_team(&state.db, &team).await?;
    Ok(Json(players))
}
