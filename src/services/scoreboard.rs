use sqlx::PgPool;

use crate::db::{game_repo, team_repo};
use crate::errors::AppError;
use crate::models::{Game, PerformancePoint, Team, TeamStats};

/// How many finished games feed a team's performance history.
pub const PERFORMANCE_HISTORY_LEN: i64 = 10;

/// Every game currently in progress.
pub async fn live_scores(pool: &PgPool) -> Result<Vec<Game>, AppError> {
    let games = game_repo::get_live_games(pool).await?;
    tracing::debug!(count = games.len(), "Live games fetched");
    Ok(games)
}

/// Aggregates for `team_name` plus its recent scoring history.
///
/// Only games where the team was the home side are considered, and the
/// score plotted is the home score.
pub async fn team_stats(pool: &PgPool, team_name: &str) -> Result<TeamStats, AppError> {
    let team = team_repo::get_team_by_name(pool, team_name)
        .await?
        .ok_or_else(|| AppError::NotFound("Team not found".into()))?;

    let games =
        game_repo::get_finished_home_games(pool, team_name, PERFORMANCE_HISTORY_LEN).await?;

    Ok(build_team_stats(team, &games))
}

/// Shape a team row and its finished home games into the response body.
pub fn build_team_stats(team: Team, games: &[Game]) -> TeamStats {
    let performance_history = games
        .iter()
        .map(|game| PerformancePoint {
            date: game.timestamp,
            score: game.score.home,
        })
        .collect();

    TeamStats {
        win_rate: team.win_rate,
        avg_points: team.avg_points,
        current_form: team.current_form,
        performance_history,
    }
}
