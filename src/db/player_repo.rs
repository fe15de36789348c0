use chrono::Utc;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::{Player, PlayerGameStats, PlayerProp, PlayerTrend, SeasonStats};

pub async fn get_player_by_id(pool: &PgPool, id: i32) -> anyhow::Result<Option<Player>> {
    let player = sqlx::query_as::<_, Player>("SELECT * FROM players WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(player)
}

/// Fetch the roster for a team, ordered by name.
pub async fn get_players_by_team(pool: &PgPool, team: &str) -> anyhow::Result<Vec<Player>> {
    let players = sqlx::query_as::<_, Player>(
        "SELECT * FROM players WHERE team = $1 ORDER BY name",
    )
    .bind(team)
    .fetch_all(pool)
    .await?;

    Ok(players)
}

/// Get the N most recent stat lines for a player.
pub async fn get_recent_stats(
    pool: &PgPool,
    player_id: i32,
    limit: i64,
) -> anyhow::Result<Vec<PlayerGameStats>> {
    let stats = sqlx::query_as::<_, PlayerGameStats>(
        "SELECT * FROM player_stats WHERE player_id = $1 ORDER BY game_date DESC LIMIT $2",
    )
    .bind(player_id)
    .bind(limit)
    .fetch_all(pool)
    .await?;

    Ok(stats)
}

pub async fn get_props_by_player(pool: &PgPool, player_id: i32) -> anyhow::Result<Vec<PlayerProp>> {
    let props = sqlx::query_as::<_, PlayerProp>(
        "SELECT * FROM player_props WHERE player_id = $1 ORDER BY timestamp DESC",
    )
    .bind(player_id)
    .fetch_all(pool)
    .await?;

    Ok(props)
}

pub async fn get_trends_by_player(pool: &PgPool, player_id: i32) -> anyhow::Result<Vec<PlayerTrend>> {
    let trends = sqlx::query_as::<_, PlayerTrend>(
        "SELECT * FROM player_trends WHERE player_id = $1 ORDER BY date DESC",
    )
    .bind(player_id)
    .fetch_all(pool)
    .await?;

    Ok(trends)
}

/// Insert a player with only the required season-stats blob.
pub async fn insert_player(
    pool: &PgPool,
    name: &str,
    team: &str,
    stats: SeasonStats,
) -> anyhow::Result<Player> {
    let player = sqlx::query_as::<_, Player>(
        r#"
        INSERT INTO players (name, team, stats, last_updated)
        VALUES ($1, $2, $3, $4)
        RETURNING *
        "#,
    )
    .bind(name)
    .bind(team)
    .bind(Json(stats))
    .bind(Utc::now())
    .fetch_one(pool)
    .await?;

    Ok(player)
}
