use sqlx::PgPool;

use crate::models::Odds;

/// All odds snapshots for a game, newest first.
pub async fn get_odds_by_game(pool: &PgPool, game_id: i32) -> anyhow::Result<Vec<Odds>> {
    let odds = sqlx::query_as::<_, Odds>(
        "SELECT * FROM odds WHERE game_id = $1 ORDER BY timestamp DESC",
    )
    .bind(game_id)
    .fetch_all(pool)
    .await?;

    Ok(odds)
}

pub async fn insert_odds(
    pool: &PgPool,
    game_id: i32,
    home_odds: i32,
    away_odds: i32,
    confidence: i32,
) -> anyhow::Result<Odds> {
    let odds = sqlx::query_as::<_, Odds>(
        r#"
        INSERT INTO odds (game_id, home_odds, away_odds, confidence)
        VALUES ($1, $2, $3, $4)
        RETURNING *
        "#,
    )
    .bind(game_id)
    .bind(home_odds)
    .bind(away_odds)
    .bind(confidence)
    .fetch_one(pool)
    .await?;

    Ok(odds)
}
