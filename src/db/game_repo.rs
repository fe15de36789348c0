use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::{Game, GameScore, GameStatus};

/// Fetch every game currently in progress, in insertion order.
pub async fn get_live_games(pool: &PgPool) -> anyhow::Result<Vec<Game>> {
    let games = sqlx::query_as::<_, Game>(
        "SELECT * FROM games WHERE status = $1 ORDER BY id",
    )
    .bind(GameStatus::Live)
    .fetch_all(pool)
    .await?;

    Ok(games)
}

/// Fetch up to `limit` finished games where `team` was the home side,
/// most recent first. Away games are not included.
pub async fn get_finished_home_games(
    pool: &PgPool,
    team: &str,
    limit: i64,
) -> anyhow::Result<Vec<Game>> {
    let games = sqlx::query_as::<_, Game>(
        r#"
        SELECT * FROM games
        WHERE status = $1 AND home_team = $2
        ORDER BY timestamp DESC
        LIMIT $3
        "#,
    )
    .bind(GameStatus::Finished)
    .bind(team)
    .bind(limit)
    .fetch_all(pool)
    .await?;

    Ok(games)
}

pub async fn get_game_by_id(pool: &PgPool, id: i32) -> anyhow::Result<Option<Game>> {
    let game = sqlx::query_as::<_, Game>("SELECT * FROM games WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(game)
}

/// Insert a new game record.
pub async fn insert_game(
    pool: &PgPool,
    home_team: &str,
    away_team: &str,
    status: GameStatus,
    score: GameScore,
    timestamp: DateTime<Utc>,
) -> anyhow::Result<Game> {
    let game = sqlx::query_as::<_, Game>(
        r#"
        INSERT INTO games (home_team, away_team, status, score, timestamp)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING *
        "#,
    )
    .bind(home_team)
    .bind(away_team)
    .bind(status)
    .bind(Json(score))
    .bind(timestamp)
    .fetch_one(pool)
    .await?;

    Ok(game)
}

/// Move a game forward in its lifecycle and record the latest score.
///
/// Fails if the game does not exist or if `next` is not ahead of the
/// stored status. The update is conditional on the status read, so a
/// concurrent writer cannot make it step backwards.
pub async fn advance_status(
    pool: &PgPool,
    id: i32,
    next: GameStatus,
    score: GameScore,
) -> anyhow::Result<Game> {
    let current = get_game_by_id(pool, id)
        .await?
        .ok_or_else(|| anyhow::anyhow!("game {id} not found"))?;

    let current_status = current.status;
    if !current_status.can_advance_to(next) {
        anyhow::bail!("game {id}: illegal status transition {current_status} -> {next}");
    }

    let updated = sqlx::query_as::<_, Game>(
        r#"
        UPDATE games SET status = $2, score = $3
        WHERE id = $1 AND status = $4
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(next)
    .bind(Json(score))
    .bind(current_status)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| anyhow::anyhow!("game {id}: status changed concurrently"))?;

    tracing::info!(
        game_id = id,
        from = %current_status,
        to = %next,
        "Game status advanced"
    );

    Ok(updated)
}
