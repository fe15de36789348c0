use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::models::Team;

/// Fetch a team by exact (case-sensitive) name.
pub async fn get_team_by_name(pool: &PgPool, name: &str) -> anyhow::Result<Option<Team>> {
    let team = sqlx::query_as::<_, Team>("SELECT * FROM teams WHERE name = $1 LIMIT 1")
        .bind(name)
        .fetch_optional(pool)
        .await?;

    Ok(team)
}

/// Fetch all teams ordered by name.
pub async fn get_all_teams(pool: &PgPool) -> anyhow::Result<Vec<Team>> {
    let teams = sqlx::query_as::<_, Team>("SELECT * FROM teams ORDER BY name")
        .fetch_all(pool)
        .await?;

    Ok(teams)
}

/// Insert a team or refresh its aggregates if the name already exists.
pub async fn upsert_team(
    pool: &PgPool,
    name: &str,
    win_rate: Decimal,
    avg_points: Decimal,
    current_form: &str,
) -> anyhow::Result<Team> {
    let team = sqlx::query_as::<_, Team>(
        r#"
        INSERT INTO teams (name, win_rate, avg_points, current_form)
        VALUES ($1, $2, $3, $4)
        ON CONFLICT (name) DO UPDATE
            SET win_rate = $2, avg_points = $3, current_form = $4
        RETURNING *
        "#,
    )
    .bind(name)
    .bind(win_rate)
    .bind(avg_points)
    .bind(current_form)
    .fetch_one(pool)
    .await?;

    Ok(team)
}
