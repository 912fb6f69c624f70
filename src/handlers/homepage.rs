use axum::{extract::State, response::Response, routing::get, Router};

use crate::{extractors::IsHtmx, AppState};

use super::quiz::level_response;

pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(homepage))
}

/// Opens on the first configured level and its first knowledge point.
async fn homepage(State(state): State<AppState>, IsHtmx(is_htmx): IsHtmx) -> Response {
    let level = state.levels.first().cloned().unwrap_or_default();
    level_response(&state, is_htmx, &level, None).await
}
