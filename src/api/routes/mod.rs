//! API routes module

pub mod booking;
pub mod root;

use std::sync::Arc;

use crate::api::state::AppState;
use axum::Router;

type SharedState = Arc<AppState>;

/// Create the combined API router
pub fn router() -> Router<SharedState> {
    Router::new()
        // Demo booking routes
        .nest("/book-demo", booking::router())
}
