use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// JSONB blobs on the players row
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonStats {
    pub points: f64,
    pub assists: f64,
    pub rebounds: f64,
    pub games_played: i32,
    // Ingestion writes the shooting and clutch keys in snake_case.
    #[serde(rename = "fg_percentage", alias = "fgPercentage")]
    pub fg_percentage: f64,
    #[serde(rename = "three_point_percentage", alias = "threePointPercentage")]
    pub three_point_percentage: f64,
    #[serde(rename = "ft_percentage", alias = "ftPercentage")]
    pub ft_percentage: f64,
    /// Output in high-leverage minutes, on the same scale as `points`.
    #[serde(rename = "clutch_performance", alias = "clutchPerformance")]
    pub clutch_performance: f64,
    /// Points in the most recent games, oldest first.
    #[serde(default)]
    pub last_performance: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PsychologicalProfile {
    pub pressure_handling: f64,
    pub consistency: f64,
    pub rivalry_performance: f64,
    pub media_impact: f64,
    pub recovery_trend: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthStatus {
    #[serde(default)]
    pub injury_history: Vec<String>,
    pub fatigue_level: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_injury_date: Option<String>,
    pub minutes_load: f64,
}

/// Database row for the players table.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: i32,
    pub name: String,
    pub team: String,
    pub stats: Json<SeasonStats>,
    pub psychological_profile: Option<Json<PsychologicalProfile>>,
    pub health_status: Option<Json<HealthStatus>>,
    pub last_updated: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Per-game stat line (player_stats table, append-only)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct PlayerGameStats {
    pub id: i32,
    pub player_id: i32,
    pub game_date: DateTime<Utc>,
    pub is_home: bool,
    pub points: i32,
    pub rebounds: i32,
    pub assists: i32,
    pub minutes: i32,
    #[sqlx(rename = "fg_made")]
    pub field_goals_made: i32,
    #[sqlx(rename = "fg_attempted")]
    pub field_goals_attempted: i32,
    #[sqlx(rename = "three_made")]
    pub three_points_made: i32,
    #[sqlx(rename = "three_attempted")]
    pub three_points_attempted: i32,
    #[sqlx(rename = "ft_made")]
    pub free_throws_made: i32,
    #[sqlx(rename = "ft_attempted")]
    pub free_throws_attempted: i32,
    pub clutch_time: bool,
    pub quarter_points: Json<Vec<i32>>,
    pub result: String,
}

impl PlayerGameStats {
    /// Field goal percentage for this game, `None` when no shots were taken.
    pub fn fg_percentage(&self) -> Option<f64> {
        shooting_pct(self.field_goals_made, self.field_goals_attempted)
    }

    pub fn three_point_percentage(&self) -> Option<f64> {
        shooting_pct(self.three_points_made, self.three_points_attempted)
    }

    pub fn ft_percentage(&self) -> Option<f64> {
        shooting_pct(self.free_throws_made, self.free_throws_attempted)
    }
}

fn shooting_pct(made: i32, attempted: i32) -> Option<f64> {
    if attempted <= 0 {
        return None;
    }
    Some(f64::from(made) / f64::from(attempted) * 100.0)
}

// ---------------------------------------------------------------------------
// Props and trends
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContextualFactors {
    pub rest_days: i32,
    pub back_to_back: bool,
    pub rivalry_game: bool,
    pub home_advantage: f64,
}

/// Database row for the player_props table.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct PlayerProp {
    pub id: i32,
    pub player_id: i32,
    pub game_id: i32,
    pub stat_type: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub line: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub odds: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub prediction: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub confidence: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub value_rating: Decimal,
    pub contextual_factors: Option<Json<ContextualFactors>>,
    pub timestamp: DateTime<Utc>,
}

/// Database row for the player_trends table.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct PlayerTrend {
    pub id: i32,
    pub player_id: i32,
    pub date: DateTime<Utc>,
    pub trend_type: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub value: Decimal,
    pub direction: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub strength: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub confidence: Decimal,
}
