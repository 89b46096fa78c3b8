//! Router for the root endpoint

use std::sync::Arc;

use axum::{Json, Router, extract::State};

use super::public::StatusResponse;
use crate::api::state::AppState;

type SharedState = Arc<AppState>;

async fn root_handler(State(state): State<SharedState>) -> Json<StatusResponse> {
    Json(StatusResponse {
        message: format!("{} is running", state.config.service_name),
    })
}

/// Create the root router
pub fn router() -> Router<SharedState> {
    Router::new().route("/", axum::routing::get(root_handler))
}
