//! Google Calendar v3 event types and the `events.insert` call

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use super::error::ProviderError;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDateTime {
    pub date_time: DateTime<FixedOffset>,
    pub time_zone: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventAttendee {
    pub email: String,
    pub display_name: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConferenceSolutionKey {
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateConferenceRequest {
    pub request_id: String,
    pub conference_solution_key: ConferenceSolutionKey,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConferenceData {
    pub create_request: CreateConferenceRequest,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReminderMethod {
    Email,
    Popup,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReminderOverride {
    pub method: ReminderMethod,
    pub minutes: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reminders {
    pub use_default: bool,
    pub overrides: Vec<ReminderOverride>,
}

/// Request body for `events.insert`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub summary: String,
    pub description: String,
    pub start: EventDateTime,
    pub end: EventDateTime,
    pub attendees: Vec<EventAttendee>,
    pub conference_data: ConferenceData,
    pub reminders: Reminders,
}

/// The subset of the created event we care about
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedEvent {
    pub id: String,
    pub hangout_link: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GoogleErrorBody {
    message: String,
}

#[derive(Debug, Deserialize)]
struct GoogleErrorResponse {
    error: GoogleErrorBody,
}

/// Insert an event into `calendar_id`, asking Google to create the
/// conference and to email every attendee.
pub async fn insert_event(
    client: &reqwest::Client,
    api_url: &str,
    access_token: &str,
    calendar_id: &str,
    event: &Event,
) -> Result<CreatedEvent, ProviderError> {
    let url = format!(
        "{}/calendar/v3/calendars/{}/events",
        api_url.trim_end_matches('/'),
        urlencoding::encode(calendar_id)
    );

    tracing::debug!("Inserting event into calendar {}", calendar_id);

    let resp = client
        .post(&url)
        .bearer_auth(access_token)
        .query(&[("conferenceDataVersion", "1"), ("sendUpdates", "all")])
        .json(event)
        .send()
        .await?;

    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        let message = serde_json::from_str::<GoogleErrorResponse>(&body)
            .map(|e| e.error.message)
            .unwrap_or(body);
        return Err(ProviderError::Api {
            status: status.as_u16(),
            message,
        });
    }

    Ok(resp.json::<CreatedEvent>().await?)
}
