use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;

pub const ALERT_STATUS_PENDING: &str = "pending";

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetadataOdds {
    pub home: f64,
    pub away: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AlertMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub odds: Option<MetadataOdds>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profit: Option<f64>,
}

/// Database row for the alerts table.
///
/// `match_id` is text holding a game id rather than an integer key, so
/// joins against games go through `games.id::text`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub id: i32,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub kind: String,
    pub message: String,
    pub match_id: Option<String>,
    pub timestamp: DateTime<Utc>,
    pub status: String,
    pub metadata: Option<Json<AlertMetadata>>,
}
