use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Database row for the teams table.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: i32,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub win_rate: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub avg_points: Decimal,
    pub current_form: String,
}

/// One point of a team's scoring time series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformancePoint {
    pub date: DateTime<Utc>,
    pub score: i32,
}

/// Response body of the team-stats endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamStats {
    #[serde(with = "rust_decimal::serde::float")]
    pub win_rate: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub avg_points: Decimal,
    pub current_form: String,
    pub performance_history: Vec<PerformancePoint>,
}
