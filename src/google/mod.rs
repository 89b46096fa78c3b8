//! Google Calendar integration
mod error;
pub mod gcal;
pub mod oauth;

use async_trait::async_trait;

pub use error::ProviderError;
pub use gcal::{CreatedEvent, Event};

use crate::core::AppConfig;
use oauth::{CALENDAR_SCOPE, Credentials, refresh_access_token};

/// The one effectful operation a booking needs from a calendar
/// provider. Implemented by `GoogleCalendar` in production and by
/// test doubles everywhere else.
#[async_trait]
pub trait CalendarService: Send + Sync {
    async fn insert_event(
        &self,
        calendar_id: &str,
        event: &Event,
    ) -> Result<CreatedEvent, ProviderError>;
}

/// Google Calendar client bound to the "manage calendars" scope.
///
/// Holds only configuration. A fresh set of credentials is built and
/// exchanged for an access token on every insert, nothing is cached
/// between requests.
pub struct GoogleCalendar {
    client_id: String,
    client_secret: String,
    refresh_token: String,
    token_url: String,
    api_url: String,
    http: reqwest::Client,
}

impl GoogleCalendar {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client_id: config.google_client_id.clone(),
            client_secret: config.google_client_secret.clone(),
            refresh_token: config.google_refresh_token.clone(),
            token_url: config.google_token_url.clone(),
            api_url: config.google_calendar_api_url.clone(),
            http: reqwest::Client::new(),
        }
    }

    /// Build the credentials for a single request. No network call
    /// happens here, the token exchange is deferred until the insert.
    pub fn credentials(&self) -> Credentials {
        Credentials {
            client_id: self.client_id.clone(),
            client_secret: self.client_secret.clone(),
            refresh_token: self.refresh_token.clone(),
            token_uri: self.token_url.clone(),
            scopes: vec![CALENDAR_SCOPE.to_string()],
        }
    }
}

#[async_trait]
impl CalendarService for GoogleCalendar {
    async fn insert_event(
        &self,
        calendar_id: &str,
        event: &Event,
    ) -> Result<CreatedEvent, ProviderError> {
        let credentials = self.credentials();
        let oauth = refresh_access_token(&self.http, &credentials).await?;
        gcal::insert_event(
            &self.http,
            &self.api_url,
            &oauth.access_token,
            calendar_id,
            event,
        )
        .await
    }
}
