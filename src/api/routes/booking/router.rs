//! Router for the demo booking API

use std::sync::Arc;

use axum::{Json, Router, extract::State};

use super::{event, public};
use crate::api::public::{ApiError, ValidatedJson};
use crate::api::state::AppState;
use crate::core::AppConfig;

type SharedState = Arc<AppState>;

async fn book_demo_handler(
    State(state): State<SharedState>,
    ValidatedJson(booking): ValidatedJson<public::BookingRequest>,
) -> Result<Json<public::BookingResponse>, ApiError> {
    tracing::info!(
        "Received demo booking from {} ({})",
        booking.email,
        booking.company_name
    );

    let AppConfig {
        host_email,
        secondary_host_email,
        ..
    } = &state.config;

    let start = event::parse_start(&booking.time).map_err(|source| ApiError::InvalidTime {
        value: booking.time.clone(),
        source,
    })?;
    let calendar_event = event::build_event(&booking, start, host_email, secondary_host_email);

    let created = state
        .calendar
        .insert_event(host_email, &calendar_event)
        .await?;

    tracing::info!("Created calendar event {} for {}", created.id, booking.email);

    Ok(Json(public::BookingResponse::from(created)))
}

/// Create the demo booking router
pub fn router() -> Router<SharedState> {
    Router::new().route("/", axum::routing::post(book_demo_handler))
}
