use sqlx::PgPool;

use crate::models::SystemStats;

/// Latest telemetry sample, if any has been recorded.
pub async fn get_latest_system_stats(pool: &PgPool) -> anyhow::Result<Option<SystemStats>> {
    let stats = sqlx::query_as::<_, SystemStats>(
        "SELECT * FROM system_stats ORDER BY timestamp DESC LIMIT 1",
    )
    .fetch_optional(pool)
    .await?;

    Ok(stats)
}
