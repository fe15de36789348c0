use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Host telemetry snapshot, one row per sample.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct SystemStats {
    pub id: i32,
    pub timestamp: DateTime<Utc>,
    #[serde(with = "rust_decimal::serde::float")]
    pub cpu_percent: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub memory_percent: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub disk_percent: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub network_bytes_sent: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub network_bytes_recv: Decimal,
    pub thread_count: i32,
}
