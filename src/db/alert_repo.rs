use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::{Alert, AlertMetadata};

/// Alerts attached to a game. `match_id` is text, so the id is compared
/// in its decimal string form.
pub async fn get_alerts_by_game(pool: &PgPool, game_id: i32) -> anyhow::Result<Vec<Alert>> {
    let alerts = sqlx::query_as::<_, Alert>(
        "SELECT * FROM alerts WHERE match_id = $1 ORDER BY timestamp DESC",
    )
    .bind(game_id.to_string())
    .fetch_all(pool)
    .await?;

    Ok(alerts)
}

/// Most recent alerts with the given status.
pub async fn get_alerts_by_status(
    pool: &PgPool,
    status: &str,
    limit: i64,
) -> anyhow::Result<Vec<Alert>> {
    let alerts = sqlx::query_as::<_, Alert>(
        "SELECT * FROM alerts WHERE status = $1 ORDER BY timestamp DESC LIMIT $2",
    )
    .bind(status)
    .bind(limit)
    .fetch_all(pool)
    .await?;

    Ok(alerts)
}

/// Insert an alert. Status falls back to the column default (`pending`).
pub async fn insert_alert(
    pool: &PgPool,
    kind: &str,
    message: &str,
    match_id: Option<&str>,
    metadata: Option<AlertMetadata>,
) -> anyhow::Result<Alert> {
    let alert = sqlx::query_as::<_, Alert>(
        r#"
        INSERT INTO alerts (type, message, match_id, metadata)
        VALUES ($1, $2, $3, $4)
        RETURNING *
        "#,
    )
    .bind(kind)
    .bind(message)
    .bind(match_id)
    .bind(metadata.map(Json))
    .fetch_one(pool)
    .await?;

    Ok(alert)
}
