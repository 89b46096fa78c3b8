//! Turns a booking request into a Google Calendar event

use chrono::{DateTime, Duration, FixedOffset};
use uuid::Uuid;

use super::public::BookingRequest;
use crate::google::Event;
use crate::google::gcal::{
    ConferenceData, ConferenceSolutionKey, CreateConferenceRequest, EventAttendee, EventDateTime,
    ReminderMethod, ReminderOverride, Reminders,
};

pub const MEETING_DURATION_MINUTES: i64 = 30;
pub const TIME_ZONE: &str = "Asia/Kolkata";
pub const TEAM_DISPLAY_NAME: &str = "VibeModel Team";
const CONFERENCE_SOLUTION: &str = "hangoutsMeet";
const EMPTY_MESSAGE: &str = "None provided.";

/// (method, minutes before start)
pub const REMINDERS: [(ReminderMethod, u32); 3] = [
    // 24 hours before
    (ReminderMethod::Email, 1440),
    (ReminderMethod::Email, 30),
    (ReminderMethod::Popup, 10),
];

/// ISO 8601 forms outside RFC 3339 that still carry an offset: minute
/// precision and offsets without a colon
const OFFSET_FORMATS: [&str; 5] = [
    "%Y-%m-%dT%H:%M%:z",
    "%Y-%m-%dT%H:%M%z",
    "%Y-%m-%dT%H:%M:%S%z",
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M%:z",
];

/// Parse the requested start time. Only timestamps with an explicit
/// UTC offset (or `Z`) are accepted.
pub fn parse_start(time: &str) -> Result<DateTime<FixedOffset>, chrono::ParseError> {
    let time = time.trim();
    DateTime::parse_from_rfc3339(time).or_else(|err| {
        OFFSET_FORMATS
            .iter()
            .find_map(|fmt| DateTime::parse_from_str(time, fmt).ok())
            .ok_or(err)
    })
}

fn summary(booking: &BookingRequest) -> String {
    format!(
        "VibeModel Demo – {} ({})",
        booking.name, booking.company_name
    )
}

fn description(booking: &BookingRequest) -> String {
    let notes = if booking.message.is_empty() {
        EMPTY_MESSAGE
    } else {
        booking.message.as_str()
    };

    format!(
        "Demo request received from the VibeModel website.\n\n\
         Name: {}\n\
         Email: {}\n\
         Company: {}\n\
         Country: {}\n\n\
         Notes:\n{}",
        booking.name, booking.email, booking.company_name, booking.country, notes
    )
}

/// Build the event for `booking` starting at `start`.
///
/// Attendee order is host, secondary host, then the requester. Each
/// call gets a new conference request id so Google never hands back a
/// meeting created for an earlier booking.
pub fn build_event(
    booking: &BookingRequest,
    start: DateTime<FixedOffset>,
    host_email: &str,
    secondary_host_email: &str,
) -> Event {
    let end = start + Duration::minutes(MEETING_DURATION_MINUTES);

    Event {
        summary: summary(booking),
        description: description(booking),
        start: EventDateTime {
            date_time: start,
            time_zone: TIME_ZONE.to_string(),
        },
        end: EventDateTime {
            date_time: end,
            time_zone: TIME_ZONE.to_string(),
        },
        attendees: vec![
            EventAttendee {
                email: host_email.to_string(),
                display_name: TEAM_DISPLAY_NAME.to_string(),
            },
            EventAttendee {
                email: secondary_host_email.to_string(),
                display_name: TEAM_DISPLAY_NAME.to_string(),
            },
            EventAttendee {
                email: booking.email.clone(),
                display_name: booking.name.clone(),
            },
        ],
        conference_data: ConferenceData {
            create_request: CreateConferenceRequest {
                request_id: Uuid::new_v4().to_string(),
                conference_solution_key: ConferenceSolutionKey {
                    kind: CONFERENCE_SOLUTION.to_string(),
                },
            },
        },
        reminders: Reminders {
            use_default: false,
            overrides: REMINDERS
                .iter()
                .map(|(method, minutes)| ReminderOverride {
                    method: *method,
                    minutes: *minutes,
                })
                .collect(),
        },
    }
}
