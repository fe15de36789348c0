use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};

use super::DashboardClient;
use crate::models::Game;

pub const SCORES_POLL_INTERVAL: Duration = Duration::from_secs(30);

/// Latest live-scores snapshot published by [`ScoresWatcher`].
#[derive(Debug, Clone)]
pub struct ScoreBoard {
    pub games: Vec<Game>,
    /// True until the first poll has completed, successfully or not.
    pub is_loading: bool,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Default for ScoreBoard {
    fn default() -> Self {
        Self {
            games: Vec::new(),
            is_loading: true,
            updated_at: None,
        }
    }
}

/// Polls live scores on a fixed interval for as long as it is alive.
/// The first poll fires immediately. Dropping the watcher cancels the
/// poll task.
pub struct ScoresWatcher {
    rx: watch::Receiver<ScoreBoard>,
    task: JoinHandle<()>,
}

impl ScoresWatcher {
    pub fn spawn(client: DashboardClient) -> Self {
        Self::spawn_with_interval(client, SCORES_POLL_INTERVAL)
    }

    pub fn spawn_with_interval(client: DashboardClient, period: Duration) -> Self {
        let (tx, rx) = watch::channel(ScoreBoard::default());
        let task = tokio::spawn(run_scores_poll(client, tx, period));
        Self { rx, task }
    }

    /// Receiver that observes every published snapshot.
    pub fn subscribe(&self) -> watch::Receiver<ScoreBoard> {
        self.rx.clone()
    }

    pub fn current(&self) -> ScoreBoard {
        self.rx.borrow().clone()
    }

    /// Stop polling. Equivalent to dropping the watcher.
    pub fn shutdown(self) {}
}

impl Drop for ScoresWatcher {
    fn drop(&mut self) {
        self.task.abort();
    }
}

async fn run_scores_poll(client: DashboardClient, tx: watch::Sender<ScoreBoard>, period: Duration) {
    let mut ticker = interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    tracing::info!(interval_ms = period.as_millis() as u64, "Scores poller started");

    loop {
        ticker.tick().await;

        match client.fetch_scores().await {
            Ok(games) => {
                tracing::debug!(count = games.len(), "Scores refreshed");
                tx.send_replace(ScoreBoard {
                    games,
                    is_loading: false,
                    updated_at: Some(Utc::now()),
                });
            }
            Err(e) => {
                tracing::warn!(error = %e, "Error fetching scores");
                // Keep the previous games; only clear the loading flag.
                tx.send_if_modified(|board| std::mem::replace(&mut board.is_loading, false));
            }
        }
    }
}
