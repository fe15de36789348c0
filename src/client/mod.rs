//! Typed client for the dashboard API plus the two watchers the front end
//! is built on: a fixed-interval live-scores poll and a fetch-on-selection
//! team-stats view.

pub mod api_client;
pub mod scores_watcher;
pub mod stats_watcher;

pub use api_client::{ClientError, DashboardClient};
pub use scores_watcher::{ScoreBoard, ScoresWatcher, SCORES_POLL_INTERVAL};
pub use stats_watcher::StatsWatcher;
