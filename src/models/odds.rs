use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Database row for the odds table. Odds are American-style integers.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Odds {
    pub id: i32,
    pub game_id: i32,
    pub home_odds: i32,
    pub away_odds: i32,
    pub confidence: i32,
    pub timestamp: DateTime<Utc>,
}
