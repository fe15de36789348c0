use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use crate::db::alert_repo;
use crate::errors::AppError;
use crate::models::alert::ALERT_STATUS_PENDING;
use crate::models::Alert;
use crate::AppState;

const MAX_ALERTS: i64 = 50;

#[derive(Debug, Deserialize)]
pub struct AlertQuery {
    pub status: Option<String>,
}

pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<AlertQuery>,
) -> Result<Json<Vec<Alert>>, AppError> {
    let status = query.status.as_deref().unwrap_or(ALERT_STATUS_PENDING);
    let alerts = alert_repo::get_alerts_by_status(&state.db, status, MAX_ALERTS).await?;
    Ok(Json(alerts))
}
