use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use super::DashboardClient;
use crate::models::TeamStats;

/// Fetches team stats once per selection change. Not polled.
///
/// Selecting no team clears the published value. A failed fetch is logged
/// and leaves the previous value in place. A new selection cancels any
/// fetch still in flight for the previous one, and a fetch that has already
/// resolved for an older selection is never published.
pub struct StatsWatcher {
    client: DashboardClient,
    tx: Arc<watch::Sender<Option<TeamStats>>>,
    selected: Option<String>,
    /// Bumped on every selection change; a fetch only publishes if it still
    /// matches.
    generation: Arc<AtomicU64>,
    in_flight: Option<JoinHandle<()>>,
}

impl StatsWatcher {
    pub fn new(client: DashboardClient) -> Self {
        let (tx, _) = watch::channel(None);
        Self {
            client,
            tx: Arc::new(tx),
            selected: None,
            generation: Arc::new(AtomicU64::new(0)),
            in_flight: None,
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<TeamStats>> {
        self.tx.subscribe()
    }

    pub fn current(&self) -> Option<TeamStats> {
        self.tx.borrow().clone()
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Change the selected team. Re-selecting the current team is a no-op.
    pub fn select_team(&mut self, team: Option<&str>) {
        if self.selected.as_deref() == team {
            return;
        }
        self.selected = team.map(str::to_owned);
        // abort() only takes effect at the task's next await, so a fetch that
        // already resolved could still publish without this.
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        if let Some(handle) = self.in_flight.take() {
            handle.abort();
        }

        let Some(team) = team else {
            self.tx.send_replace(None);
            return;
        };

        let client = self.client.clone();
        let tx = Arc::clone(&self.tx);
        let current = Arc::clone(&self.generation);
        let team = team.to_owned();

        self.in_flight = Some(tokio::spawn(async move {
            match client.fetch_team_stats(&team).await {
                Ok(stats) => {
                    if publish_if_current(&tx, &current, generation, stats) {
                        tracing::debug!(team = %team, "Team stats loaded");
                    } else {
                        tracing::debug!(team = %team, "Discarding stats for a superseded selection");
                    }
                }
                Err(e) => {
                    tracing::warn!(error = %e, team = %team, "Error fetching stats");
                }
            }
        }));
    }
}

/// Publish `stats` only if no newer selection has been made since the fetch
/// for `generation` started. The check runs under the channel's write lock,
/// so it cannot interleave with the clear in `select_team(None)`.
fn publish_if_current(
    tx: &watch::Sender<Option<TeamStats>>,
    current: &AtomicU64,
    generation: u64,
    stats: TeamStats,
) -> bool {
    tx.send_if_modified(|value| {
        if current.load(Ordering::SeqCst) != generation {
            return false;
        }
        *value = Some(stats);
        true
    })
}

impl Drop for StatsWatcher {
    fn drop(&mut self) {
        if let Some(handle) = self.in_flight.take() {
            handle.abort();
        }
    }
}
