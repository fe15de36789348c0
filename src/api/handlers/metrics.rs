use axum::extract::State;

use crate::AppState;

pub async fn render(State(state): State<AppState>) -> String {
    state.metrics_handle.render()
}
