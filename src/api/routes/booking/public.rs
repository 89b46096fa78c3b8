//! Public types for the demo booking API
use serde::{Deserialize, Serialize};

use crate::google::CreatedEvent;

/// Form submission from the marketing site
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub name: String,
    pub email: String,
    pub company_name: String,
    pub country: String,
    // YYYY-MM-DD, informational only. `time` carries the full timestamp
    pub date: String,
    // e.g. "2025-02-25T06:00:00+05:30"
    pub time: String,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingResponse {
    pub success: bool,
    pub event_id: String,
    pub meet_link: String,
}

impl From<CreatedEvent> for BookingResponse {
    fn from(event: CreatedEvent) -> Self {
        Self {
            success: true,
            event_id: event.id,
            meet_link: event.hangout_link.unwrap_or_default(),
        }
    }
}
