use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use tokio::time::timeout;

use courtside::client::{DashboardClient, ScoresWatcher, StatsWatcher};

#[derive(Clone, Default)]
struct Stub {
    fail_scores: Arc<AtomicBool>,
    score_hits: Arc<AtomicUsize>,
}

async fn scores(State(stub): State<Stub>) -> Response {
    stub.score_hits.fetch_add(1, Ordering::SeqCst);
    if stub.fail_scores.load(Ordering::SeqCst) {
        return (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "error": "Internal server error" })))
            .into_response();
    }
    Json(json!([{
        "id": 1,
        "homeTeam": "Lakers",
        "awayTeam": "Celtics",
        "status": "live",
        "score": { "home": 54, "away": 50, "quarter": 2 },
        "timestamp": "2026-03-01T02:30:00Z"
    }]))
    .into_response()
}

async fn stats(Path(team): Path<String>) -> Response {
    match team.as_str() {
        "Lakers" => Json(json!({
            "winRate": 62.5,
            "avgPoints": 114.2,
            "currentForm": "W-W-L",
            "performanceHistory": [
                { "date": "2026-02-20T03:00:00Z", "score": 110 },
                { "date": "2026-02-22T03:00:00Z", "score": 98 }
            ]
        }))
        .into_response(),
        "Trail Blazers" => Json(json!({
            "winRate": 40.0,
            "avgPoints": 108.0,
            "currentForm": "L-L-W",
            "performanceHistory": []
        }))
        .into_response(),
        _ => (StatusCode::NOT_FOUND, Json(json!({ "error": "Team not found" }))).into_response(),
    }
}

async fn start_stub() -> (String, Stub) {
    let stub = Stub::default();
    let app = Router::new()
        .route("/api/scores", get(scores))
        .route("/api/stats/:team", get(stats))
        .with_state(stub.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{addr}"), stub)
}

async fn wait_for_hits(stub: &Stub, target: usize) {
    timeout(Duration::from_secs(5), async {
        while stub.score_hits.load(Ordering::SeqCst) < target {
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
    })
    .await
    .expect("poller did not reach expected request count");
}

#[tokio::test]
async fn test_client_fetches_scores_and_stats() {
    let (base, _stub) = start_stub().await;
    let client = DashboardClient::new(&base).unwrap();

    let games = client.fetch_scores().await.unwrap();
    assert_eq!(games.len(), 1);
    assert_eq!(games[0].home_team, "Lakers");
    assert_eq!(games[0].score.quarter, 2);

    let stats = client.fetch_team_stats("Lakers").await.unwrap();
    assert_eq!(stats.current_form, "W-W-L");
    assert_eq!(stats.performance_history.len(), 2);

    let stats = client.fetch_team_stats("Trail Blazers").await.unwrap();
    assert_eq!(stats.current_form, "L-L-W");

    assert!(client.fetch_team_stats("Unknown").await.is_err());
}

#[tokio::test]
async fn test_scores_watcher_polls_and_keeps_last_good_value() {
    let (base, stub) = start_stub().await;
    let client = DashboardClient::new(&base).unwrap();

    let watcher = ScoresWatcher::spawn_with_interval(client, Duration::from_millis(50));
    let mut rx = watcher.subscribe();
    assert!(rx.borrow().is_loading);

    timeout(Duration::from_secs(5), rx.changed()).await.unwrap().unwrap();
    let board = rx.borrow_and_update().clone();
    assert!(!board.is_loading);
    assert_eq!(board.games.len(), 1);
    assert!(board.updated_at.is_some());

    stub.fail_scores.store(true, Ordering::SeqCst);
    let seen = stub.score_hits.load(Ordering::SeqCst);
    wait_for_hits(&stub, seen + 2).await;

    let board = watcher.current();
    assert_eq!(board.games.len(), 1);
    assert_eq!(board.games[0].home_team, "Lakers");
}

#[tokio::test]
async fn test_scores_watcher_stops_when_dropped() {
    let (base, stub) = start_stub().await;
    let client = DashboardClient::new(&base).unwrap();

    let watcher = ScoresWatcher::spawn_with_interval(client, Duration::from_millis(20));
    wait_for_hits(&stub, 2).await;
    drop(watcher);

    // Let any request already on the wire land
    tokio::time::sleep(Duration::from_millis(100)).await;
    let after_drop = stub.score_hits.load(Ordering::SeqCst);
    tokio::time::sleep(Duration::from_millis(200)).await;
    assert_eq!(stub.score_hits.load(Ordering::SeqCst), after_drop);
}

#[tokio::test]
async fn test_scores_watcher_failed_first_poll_clears_loading() {
    let (base, stub) = start_stub().await;
    stub.fail_scores.store(true, Ordering::SeqCst);
    let client = DashboardClient::new(&base).unwrap();

    let watcher = ScoresWatcher::spawn_with_interval(client, Duration::from_secs(60));
    let mut rx = watcher.subscribe();

    timeout(Duration::from_secs(5), rx.changed()).await.unwrap().unwrap();
    let board = rx.borrow_and_update().clone();
    assert!(!board.is_loading);
    assert!(board.games.is_empty());
}

#[tokio::test]
async fn test_stats_watcher_follows_selection() {
    let (base, _stub) = start_stub().await;
    let client = DashboardClient::new(&base).unwrap();

    let mut watcher = StatsWatcher::new(client);
    let mut rx = watcher.subscribe();
    assert!(watcher.current().is_none());

    watcher.select_team(Some("Lakers"));
    timeout(Duration::from_secs(5), rx.changed()).await.unwrap().unwrap();
    let stats = rx.borrow_and_update().clone().unwrap();
    assert_eq!(stats.current_form, "W-W-L");
    assert_eq!(watcher.selected(), Some("Lakers"));

    // Failed fetch leaves the previous value in place
    watcher.select_team(Some("Unknown"));
    tokio::time::sleep(Duration::from_millis(200)).await;
    assert_eq!(watcher.current().unwrap().current_form, "W-W-L");
    assert!(!rx.has_changed().unwrap());

    watcher.select_team(None);
    assert!(watcher.current().is_none());
    assert_eq!(watcher.selected(), None);
}
