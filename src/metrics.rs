use metrics::{counter, gauge};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

/// Install the Prometheus recorder and register the dashboard metrics.
/// Returns a `PrometheusHandle` whose `render()` method produces the
/// text/plain Prometheus scrape payload.
///
/// Only one global recorder can exist per process. Later calls still
/// return a working handle, but it renders nothing.
pub fn init_metrics() -> PrometheusHandle {
    let recorder = PrometheusBuilder::new().build_recorder();
    let handle = recorder.handle();

    if metrics::set_global_recorder(recorder).is_err() {
        tracing::debug!("Metrics recorder already installed");
        return handle;
    }

    register_metrics();
    handle
}

/// Pre-register so the series appear before the first request.
fn register_metrics() {
    counter!("scores_requests_total").absolute(0);
    counter!("stats_requests_total").absolute(0);
    counter!("stats_team_not_found_total").absolute(0);
    gauge!("live_games").set(0.0);
}

pub fn record_scores_request() {
    counter!("scores_requests_total").increment(1);
}

pub fn set_live_games(count: usize) {
    gauge!("live_games").set(count as f64);
}

pub fn record_stats_request() {
    counter!("stats_requests_total").increment(1);
}

pub fn record_stats_not_found() {
    counter!("stats_team_not_found_total").increment(1);
}
