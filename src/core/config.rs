use std::env;

pub const DEFAULT_HOST_EMAIL: &str = "balagei.vibeai@gmail.com";
pub const DEFAULT_SECONDARY_HOST_EMAIL: &str = "balagei@vibemodel.ai";
pub const DEFAULT_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";
pub const DEFAULT_CALENDAR_API_URL: &str = "https://www.googleapis.com";

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub service_name: String,
    pub google_client_id: String,
    pub google_client_secret: String,
    pub google_refresh_token: String,
    pub google_token_url: String,
    pub google_calendar_api_url: String,
    pub host_email: String,
    pub secondary_host_email: String,
}

impl AppConfig {
    /// Names of the Google credentials that are unset. These are not
    /// required to start the server, the token exchange will simply
    /// fail at booking time.
    pub fn missing_credentials(&self) -> Vec<&'static str> {
        [
            ("GOOGLE_CLIENT_ID", &self.google_client_id),
            ("GOOGLE_CLIENT_SECRET", &self.google_client_secret),
            ("GOOGLE_REFRESH_TOKEN", &self.google_refresh_token),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(name, _)| name)
        .collect()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        let service_name =
            env::var("SERVICE_NAME").unwrap_or_else(|_| "VibeModel API".to_string());
        let google_client_id = env::var("GOOGLE_CLIENT_ID").unwrap_or_default();
        let google_client_secret = env::var("GOOGLE_CLIENT_SECRET").unwrap_or_default();
        let google_refresh_token = env::var("GOOGLE_REFRESH_TOKEN").unwrap_or_default();
        let google_token_url =
            env::var("GOOGLE_TOKEN_URL").unwrap_or_else(|_| DEFAULT_TOKEN_URL.to_string());
        let google_calendar_api_url = env::var("GOOGLE_CALENDAR_API_URL")
            .unwrap_or_else(|_| DEFAULT_CALENDAR_API_URL.to_string());
        let host_email =
            env::var("HOST_EMAIL").unwrap_or_else(|_| DEFAULT_HOST_EMAIL.to_string());
        let secondary_host_email = env::var("SECONDARY_HOST_EMAIL")
            .unwrap_or_else(|_| DEFAULT_SECONDARY_HOST_EMAIL.to_string());

        Self {
            service_name,
            google_client_id,
            google_client_secret,
            google_refresh_token,
            google_token_url,
            google_calendar_api_url,
            host_email,
            secondary_host_email,
        }
    }
}
