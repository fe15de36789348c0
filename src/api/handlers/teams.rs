use axum::extract::State;
use axum::Json;

use crate::db::team_repo;
use crate::errors::AppError;
use crate::models::Team;
use crate::AppState;

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Team>>, AppError> {
    let teams = team_repo::get_all_teams(&state.db).await?;
    Ok(Json(teams))
}
