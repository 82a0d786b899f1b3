use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Method;

use crate::domain::models::account::{Credentials, Session};
use crate::domain::models::farmer::FarmerFields;
use crate::domain::repositories::account::AccountRepository;
use crate::domain::repositories::repository::RepositoryResult;
use crate::infrastructure::client::ApiClient;

pub struct AccountRepositoryImpl {
    client: Arc<ApiClient>,
}

impl AccountRepositoryImpl {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AccountRepository for AccountRepositoryImpl {
    async fn login(&self, credentials: Credentials) -> RepositoryResult<Session> {
        let request = self
            .client
            .request(Method::POST, "/login/", None)
            .json(&credentials);

        self.client.fetch(request).await
    }

    async fn register(&self, fields: FarmerFields) -> RepositoryResult<()> {
        let request = self
            .client
            .request(Method::POST, "/register/", None)
            .json(&fields);

        self.client.execute(request).await
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::UpstreamConfig;
    use crate::domain::models::account::Role;
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_login_sends_no_token() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/api/login/")
                    .json_body(json!({ "email": "ana@farm.io", "password": "Abcdef12" }));
                then.status(200).json_body(json!({
                    "access": "a",
                    "refresh": "r",
                    "user": { "id": 1, "email": "ana@farm.io", "username": "ana.k", "role": "admin" }
                }));
            })
            .await;

        let client = ApiClient::new(&UpstreamConfig {
            base_url: server.url("/api"),
            timeout_secs: 5,
        })
        .unwrap();

        let session = AccountRepositoryImpl::new(Arc::new(client))
            .login(Credentials {
                email: "ana@farm.io".to_string(),
                password: "Abcdef12".to_string(),
            })
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(session.user.and_then(|user| user.role), Some(Role::Admin));
    }
}
