//! Test utilities for integration tests
#![allow(dead_code)]
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{Router, body::Body, http::Request, response::Response};
use serde_json::Value;

use demo_booking::api::AppState;
use demo_booking::api::app;
use demo_booking::core::AppConfig;
use demo_booking::google::{CalendarService, CreatedEvent, Event, ProviderError};

pub const HOST_EMAIL: &str = "host@example.com";
pub const SECONDARY_HOST_EMAIL: &str = "second@example.com";

/// What the fake calendar answers with on every insert
#[derive(Clone)]
pub enum Outcome {
    Created {
        id: String,
        hangout_link: Option<String>,
    },
    Rejected {
        status: u16,
        message: String,
    },
}

/// Calendar double that records every insert it receives.
pub struct RecordingCalendar {
    outcome: Outcome,
    calls: Mutex<Vec<(String, Event)>>,
}

impl RecordingCalendar {
    pub fn new(outcome: Outcome) -> Arc<Self> {
        Arc::new(Self {
            outcome,
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn created(id: &str, hangout_link: Option<&str>) -> Arc<Self> {
        Self::new(Outcome::Created {
            id: id.to_string(),
            hangout_link: hangout_link.map(str::to_string),
        })
    }

    pub fn calls(&self) -> Vec<(String, Event)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CalendarService for RecordingCalendar {
    async fn insert_event(
        &self,
        calendar_id: &str,
        event: &Event,
    ) -> Result<CreatedEvent, ProviderError> {
        self.calls
            .lock()
            .unwrap()
            .push((calendar_id.to_string(), event.clone()));

        match &self.outcome {
            Outcome::Created { id, hangout_link } => Ok(CreatedEvent {
                id: id.clone(),
                hangout_link: hangout_link.clone(),
            }),
            Outcome::Rejected { status, message } => Err(ProviderError::Api {
                status: *status,
                message: message.clone(),
            }),
        }
    }
}

/// Config pointing Google traffic at `google_url`
pub fn test_config(google_url: &str) -> AppConfig {
    AppConfig {
        service_name: String::from("VibeModel API"),
        google_client_id: String::from("test_client_id"),
        google_client_secret: String::from("test_client_secret"),
        google_refresh_token: String::from("test_refresh_token"),
        google_token_url: format!("{}/token", google_url),
        google_calendar_api_url: google_url.to_string(),
        host_email: String::from(HOST_EMAIL),
        secondary_host_email: String::from(SECONDARY_HOST_EMAIL),
    }
}

/// Creates a test application router backed by `calendar`.
pub fn test_app(calendar: Arc<dyn CalendarService>) -> Router {
    let app_state = AppState::new(test_config("http://localhost:1"), calendar);
    app(Arc::new(app_state))
}

/// A complete, valid booking payload
pub fn booking_json() -> Value {
    serde_json::json!({
        "name": "Jane Doe",
        "email": "jane@acme.test",
        "companyName": "Acme",
        "country": "India",
        "date": "2025-02-25",
        "time": "2025-02-25T06:00:00+05:30",
        "message": "Interested in forecasting",
    })
}

pub fn book_demo_request(body: &Value) -> Request<Body> {
    Request::builder()
        .uri("/api/book-demo")
        .method("POST")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn json_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
