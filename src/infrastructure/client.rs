use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::UpstreamConfig;
use crate::domain::error::message::REQUEST_FAILED;
use crate::domain::models::jsonwebtoken::AuthContext;
use crate::domain::repositories::repository::{RepositoryError, RepositoryResult};

/// HTTP client for the farm backend. Holds no credentials of its own; callers
/// pass an [`AuthContext`] with every authenticated request.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &UpstreamConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn request(&self, method: Method, path: &str, auth: Option<&AuthContext>) -> RequestBuilder {
        let builder = self.http.request(method, format!("{}{}", self.base_url, path));

        match auth {
            Some(auth) => builder.bearer_auth(&auth.token),
            None => builder,
        }
    }

    /// Sends `request` and decodes the JSON body. A 204 decodes as `null`.
    pub async fn fetch<T: DeserializeOwned>(&self, request: RequestBuilder) -> RepositoryResult<T> {
        let response = request.send().await?.check_success().await?;

        if response.status() == StatusCode::NO_CONTENT {
            return decode(Value::Null);
        }

        let body = response.bytes().await?;

        serde_json::from_slice(&body).map_err(|err| RepositoryError::Decode(err.to_string()))
    }

    /// Sends `request`, discarding whatever body comes back.
    pub async fn execute(&self, request: RequestBuilder) -> RepositoryResult<()> {
        request.send().await?.check_success().await?;
        Ok(())
    }
}

fn decode<T: DeserializeOwned>(value: Value) -> RepositoryResult<T> {
    serde_json::from_value(value).map_err(|err| RepositoryError::Decode(err.to_string()))
}

#[async_trait]
pub trait ResponseExt {
    async fn check_success(self) -> RepositoryResult<Self>
    where
        Self: Sized;
}

#[async_trait]
impl ResponseExt for Response {
    async fn check_success(self) -> RepositoryResult<Self> {
        let status = self.status();

        if status.is_success() {
            return Ok(self);
        }

        let message = match self.text().await {
            Ok(text) => error_message(&text),
            Err(_) => REQUEST_FAILED.to_string(),
        };

        tracing::debug!(status = status.as_u16(), "upstream rejected request: {message}");

        Err(RepositoryError::Rejected {
            status: status.as_u16(),
            message,
        })
    }
}

/// Picks the one message to show for an error body: `detail`, then `error`,
/// then a bare JSON string, then the serialized JSON itself. Bodies that are
/// not JSON fall back to "Request failed".
pub fn error_message(body: &str) -> String {
    let body = body.trim();

    let Ok(value) = serde_json::from_str::<Value>(body) else {
        return REQUEST_FAILED.to_string();
    };

    let message = match &value {
        Value::Object(object) => ["detail", "error"]
            .iter()
            .filter_map(|key| object.get(*key))
            .find_map(present)
            .unwrap_or_else(|| value.to_string()),
        Value::String(text) => text.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    };

    match message.is_empty() {
        true => REQUEST_FAILED.to_string(),
        false => message,
    }
}

fn present(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::String(text) if text.is_empty() => None,
        Value::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
    }
}

impl From<reqwest::Error> for RepositoryError {
    fn from(error: reqwest::Error) -> Self {
        match error.is_decode() {
            true => RepositoryError::Decode(error.to_string()),
            false => RepositoryError::Unavailable(error.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use rstest::*;
    use serde_json::json;

    #[rstest]
    #[case::detail(r#"{"detail": "Not found.", "error": "ignored"}"#, "Not found.")]
    #[case::error(r#"{"error": "Invalid credentials"}"#, "Invalid credentials")]
    #[case::empty_detail(r#"{"detail": "", "error": "Fallback"}"#, "Fallback")]
    #[case::string(r#""Plain message""#, "Plain message")]
    #[case::fields(
        r#"{"username":["A user with that username already exists."]}"#,
        r#"{"username":["A user with that username already exists."]}"#
    )]
    #[case::html("<h1>Bad Gateway</h1>", "Request failed")]
    #[case::plain_text("upstream connect error", "Request failed")]
    #[case::empty("", "Request failed")]
    #[case::null("null", "Request failed")]
    fn test_error_message(#[case] body: &str, #[case] expected: &str) {
        assert_eq!(error_message(body), expected);
    }

    fn client(server: &MockServer) -> ApiClient {
        ApiClient::new(&UpstreamConfig {
            base_url: server.url("/api/"),
            timeout_secs: 5,
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_rejection_carries_status_and_message() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/farmers/");
                then.status(403)
                    .json_body(json!({ "detail": "You do not have permission." }));
            })
            .await;

        let client = client(&server);
        let error = client
            .fetch::<Value>(client.request(Method::GET, "/farmers/", None))
            .await
            .unwrap_err();

        assert_eq!(
            error,
            RepositoryError::Rejected {
                status: 403,
                message: "You do not have permission.".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_no_content_decodes_as_null() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(DELETE).path("/api/crops/4/");
                then.status(204);
            })
            .await;

        let client = client(&server);
        let body: Option<Value> = client
            .fetch(client.request(Method::DELETE, "/crops/4/", None))
            .await
            .unwrap();

        assert_eq!(body, None);
    }

    #[tokio::test]
    async fn test_unreachable_backend() {
        let client = ApiClient::new(&UpstreamConfig {
            base_url: "http://127.0.0.1:9".to_string(),
            timeout_secs: 1,
        })
        .unwrap();

        let error = client
            .execute(client.request(Method::GET, "/farmers/", None))
            .await
            .unwrap_err();

        assert!(matches!(error, RepositoryError::Unavailable(_)));
    }
}
