//! OAuth refresh-token exchange against Google's token endpoint

use serde::Deserialize;

use super::error::ProviderError;

pub const CALENDAR_SCOPE: &str = "https://www.googleapis.com/auth/calendar";

/// Credentials for a single request. There is no access token here,
/// one is minted from the refresh token every time.
#[derive(Clone, Debug)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
    pub refresh_token: String,
    pub token_uri: String,
    pub scopes: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct OAuthResponse {
    pub access_token: String,
    pub expires_in: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct OAuthErrorResponse {
    error: String,
    error_description: Option<String>,
}

pub async fn refresh_access_token(
    client: &reqwest::Client,
    credentials: &Credentials,
) -> Result<OAuthResponse, ProviderError> {
    let scope = credentials.scopes.join(" ");
    let params = [
        ("client_id", credentials.client_id.as_str()),
        ("client_secret", credentials.client_secret.as_str()),
        ("refresh_token", credentials.refresh_token.as_str()),
        ("grant_type", "refresh_token"),
        ("scope", scope.as_str()),
    ];

    tracing::debug!("Refreshing access token via {}", credentials.token_uri);

    let resp = client
        .post(&credentials.token_uri)
        .form(&params)
        .send()
        .await?;

    if !resp.status().is_success() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        let message = match serde_json::from_str::<OAuthErrorResponse>(&body) {
            Ok(OAuthErrorResponse {
                error,
                error_description: Some(description),
            }) => format!("{}: {}", error, description),
            Ok(OAuthErrorResponse { error, .. }) => error,
            Err(_) => format!("{} {}", status.as_u16(), body),
        };
        return Err(ProviderError::Auth(message));
    }

    let oauth = resp.json::<OAuthResponse>().await?;
    tracing::debug!("Access token minted, expires in {:?}s", oauth.expires_in);

    Ok(oauth)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;

    fn credentials(token_uri: String) -> Credentials {
        Credentials {
            client_id: String::from("test-client-id"),
            client_secret: String::from("test-client-secret"),
            refresh_token: String::from("test-refresh-token"),
            token_uri,
            scopes: vec![CALENDAR_SCOPE.to_string()],
        }
    }

    #[tokio::test]
    async fn it_exchanges_refresh_token_for_access_token() {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("POST", "/token")
            .match_body(Matcher::AllOf(vec![
                Matcher::UrlEncoded("grant_type".into(), "refresh_token".into()),
                Matcher::UrlEncoded("refresh_token".into(), "test-refresh-token".into()),
                Matcher::UrlEncoded("client_id".into(), "test-client-id".into()),
                Matcher::UrlEncoded("scope".into(), CALENDAR_SCOPE.into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"access_token": "ya29.test", "expires_in": 3599, "token_type": "Bearer"}"#)
            .create_async()
            .await;

        let client = reqwest::Client::new();
        let resp = refresh_access_token(&client, &credentials(format!("{}/token", server.url())))
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(resp.access_token, "ya29.test");
        assert_eq!(resp.expires_in, Some(3599));
    }

    #[tokio::test]
    async fn it_returns_auth_error_when_refresh_is_rejected() {
        let mut server = mockito::Server::new_async().await;

        let _mock = server
            .mock("POST", "/token")
            .with_status(400)
            .with_header("content-type", "application/json")
            .with_body(r#"{"error": "invalid_grant", "error_description": "Bad Request"}"#)
            .create_async()
            .await;

        let client = reqwest::Client::new();
        let err = refresh_access_token(&client, &credentials(format!("{}/token", server.url())))
            .await
            .unwrap_err();

        match err {
            ProviderError::Auth(message) => assert_eq!(message, "invalid_grant: Bad Request"),
            other => panic!("Expected auth error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn it_keeps_unstructured_error_bodies() {
        let mut server = mockito::Server::new_async().await;

        let _mock = server
            .mock("POST", "/token")
            .with_status(503)
            .with_body("upstream unavailable")
            .create_async()
            .await;

        let client = reqwest::Client::new();
        let err = refresh_access_token(&client, &credentials(format!("{}/token", server.url())))
            .await
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "token refresh failed: 503 upstream unavailable"
        );
    }
}
