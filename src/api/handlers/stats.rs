use axum::extract::{Path, State};
use axum::Json;

use crate::errors::AppError;
use crate::metrics;
use crate::models::TeamStats;
use crate::services::scoreboard;
use crate::AppState;

pub async fn team(
    State(state): State<AppState>,
    Path(team): Path<String>,
) -> Result<Json<TeamStats>, AppError> {
    metrics::record_stats_request();

    match scoreboard::team_stats(&state.db, &team).await {
        Ok(stats) => Ok(Json(stats)),
        Err(AppError::NotFound(msg)) => {
            metrics::record_stats_not_found();
            tracing::debug!(team = %team, "Stats requested for unknown team");
            Err(AppError::NotFound(msg))
        }
        Err(e) => Err(e),
    }
}
