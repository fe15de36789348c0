//! Terminal companion to the dashboard: follows live scores and, if a team
//! name is given as the first argument, that team's stats.
//!
//! `DASHBOARD_URL` selects the server (default `http://localhost:8000`).

use courtside::client::{DashboardClient, ScoresWatcher, StatsWatcher};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let base_url =
        std::env::var("DASHBOARD_URL").unwrap_or_else(|_| "http://localhost:8000".into());
    let client = DashboardClient::new(&base_url)?;

    let scores = ScoresWatcher::spawn(client.clone());
    let mut scores_rx = scores.subscribe();

    let mut stats = StatsWatcher::new(client);
    let mut stats_rx = stats.subscribe();
    let team = std::env::args().nth(1);
    stats.select_team(team.as_deref());

    loop {
        tokio::select! {
            changed = scores_rx.changed() => {
                if changed.is_err() {
                    break;
                }
                let board = scores_rx.borrow_and_update().clone();
                for game in &board.games {
                    tracing::info!(
                        game_id = game.id,
                        "{} {} - {} {} (Q{})",
                        game.home_team,
                        game.score.home,
                        game.score.away,
                        game.away_team,
                        game.score.quarter,
                    );
                }
                if !board.is_loading && board.games.is_empty() {
                    tracing::info!("No live games");
                }
            }
            changed = stats_rx.changed() => {
                if changed.is_err() {
                    break;
                }
                if let Some(s) = stats_rx.borrow_and_update().as_ref() {
                    tracing::info!(
                        win_rate = %s.win_rate,
                        avg_points = %s.avg_points,
                        form = %s.current_form,
                        games = s.performance_history.len(),
                        "Team stats"
                    );
                }
            }
            _ = tokio::signal::ctrl_c() => break,
        }
    }

    scores.shutdown();
    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(fmt::layer())
        .init();
}
