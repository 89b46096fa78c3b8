//! Errors returned by the Google Calendar integration.

use thiserror::Error;

/// A failure while talking to Google, either while minting an access
/// token or while inserting the event.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The token endpoint rejected the refresh token or client credentials.
    #[error("token refresh failed: {0}")]
    Auth(String),

    /// The Calendar API answered with a non-success status.
    #[error("HTTP {status} returned \"{message}\"")]
    Api { status: u16, message: String },

    /// Transport or decoding failure.
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}
