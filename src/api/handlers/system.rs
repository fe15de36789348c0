use axum::extract::State;
use axum::Json;

use crate::db::system_repo;
use crate::errors::AppError;
use crate::models::SystemStats;
use crate::AppState;

pub async fn latest(State(state): State<AppState>) -> Result<Json<SystemStats>, AppError> {
    system_repo::get_latest_system_stats(&state.db)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound("No system stats recorded".into()))
}
