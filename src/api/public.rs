//! Public API types

use axum::{
    Json,
    body::Bytes,
    extract::{FromRequest, Request, rejection::JsonRejection},
    response::{IntoResponse, Response},
};
use http::{StatusCode, header};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::google::ProviderError;

// Errors

/// Every way a request can fail, mapped exhaustively to a status code
/// in `IntoResponse`.
#[derive(Debug)]
pub enum ApiError {
    /// Body missing, malformed, or a field has the wrong type
    Validation(JsonRejection),
    /// The `time` field is not an offset-aware timestamp
    InvalidTime {
        value: String,
        source: chrono::ParseError,
    },
    /// Google rejected the token exchange or the insert
    Provider(ProviderError),
    Internal(anyhow::Error),
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(rejection) => rejection.status(),
            // Kept as a server error for compatibility with existing
            // clients even though the input is at fault
            ApiError::InvalidTime { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Provider(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn detail(&self) -> String {
        match self {
            ApiError::Validation(rejection) => rejection.body_text(),
            ApiError::InvalidTime { value, source } => {
                format!("Invalid time '{}': {}", value, source)
            }
            ApiError::Provider(err) => format!("Google Calendar error: {}", err),
            ApiError::Internal(err) => err.to_string(),
        }
    }
}

/// Convert `ApiError` into an Axum compatible response.
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = self.detail();

        // Always log the error
        if status.is_server_error() {
            tracing::error!("{}", detail);
        } else {
            tracing::warn!("Rejected request: {}", detail);
        }

        (status, Json(ErrorResponse { detail })).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Validation(rejection)
    }
}

/// Transport failures are not something Google decided, so they are
/// reported as-is rather than as a calendar error.
impl From<ProviderError> for ApiError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::Http(err) => Self::Internal(err.into()),
            err => Self::Provider(err),
        }
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err)
    }
}

/// JSON body extractor whose rejections render as `{"detail": ...}`.
///
/// A body sent without a `Content-Type` header is still parsed as
/// JSON. Any other non-JSON content type is rejected.
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if req.headers().contains_key(header::CONTENT_TYPE) {
            let Json(value) = Json::<T>::from_request(req, state).await?;
            return Ok(Self(value));
        }

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(JsonRejection::from)?;
        let Json(value) = Json::<T>::from_bytes(&bytes)?;
        Ok(Self(value))
    }
}

// Re-export public types from each route

pub mod booking {
    pub use crate::api::routes::booking::public::*;
}

pub mod root {
    pub use crate::api::routes::root::public::*;
}
