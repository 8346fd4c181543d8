use reqwest::{header, Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::sync::{Arc, Mutex};

use crate::{api::types::*, config, utils::storage as storage_utils};

const TOKEN_KEY: &str = "token";

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
    // In-memory copy of the bearer token; localStorage is best-effort only
    // so the client also works where no browser storage exists.
    token: Arc<Mutex<Option<String>>>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
            token: Arc::new(Mutex::new(None)),
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
            token: Arc::new(Mutex::new(None)),
        }
    }

    pub(crate) fn http_client(&self) -> &Client {
        &self.client
    }

    pub(crate) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    fn bearer_token(&self) -> Option<String> {
        if let Ok(guard) = self.token.lock() {
            if let Some(token) = guard.as_ref() {
                return Some(token.clone());
            }
        }
        storage_utils::local_storage()
            .ok()
            .and_then(|storage| storage.get_item(TOKEN_KEY).ok().flatten())
    }

    fn store_token(&self, token: &str) {
        if let Ok(mut guard) = self.token.lock() {
            *guard = Some(token.to_string());
        }
        if let Ok(storage) = storage_utils::local_storage() {
            let _ = storage.set_item(TOKEN_KEY, token);
        }
    }

    fn clear_token(&self) {
        if let Ok(mut guard) = self.token.lock() {
            *guard = None;
        }
        if let Ok(storage) = storage_utils::local_storage() {
            let _ = storage.remove_item(TOKEN_KEY);
        }
    }

    pub(crate) fn get_auth_headers(&self) -> Result<header::HeaderMap, ApiError> {
        let mut headers = header::HeaderMap::new();
        if let Some(token) = self.bearer_token() {
            headers.insert(
                header::AUTHORIZATION,
                format!("Bearer {}", token)
                    .parse()
                    .map_err(|_| ApiError::Request("Invalid token format".to_string()))?,
            );
        }
        Ok(headers)
    }

    pub(crate) fn handle_unauthorized_status(&self, status: StatusCode) {
        if status == StatusCode::UNAUTHORIZED {
            self.clear_token();
            Self::redirect_to_login_if_needed();
        }
    }

    fn redirect_to_login_if_needed() {
        #[cfg(target_arch = "wasm32")]
        if let Some(window) = web_sys::window() {
            let location = window.location();
            if let Ok(pathname) = location.pathname() {
                if pathname == "/login" {
                    return;
                }
            }
            let _ = location.set_href("/login");
        }
    }

    pub(crate) async fn parse_response<T: DeserializeOwned>(
        response: Response,
    ) -> Result<T, ApiError> {
        let status = response.status();
        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| ApiError::Parse(e.to_string()))
        } else {
            Err(Self::error_from(status, response).await)
        }
    }

    pub(crate) async fn parse_empty(response: Response) -> Result<(), ApiError> {
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(Self::error_from(status, response).await)
        }
    }

    async fn error_from(status: StatusCode, response: Response) -> ApiError {
        let message = response
            .json::<ErrorBody>()
            .await
            .map(|body| body.message)
            .unwrap_or_else(|_| format!("Request failed with status {}", status));
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ApiError::Unauthorized(message),
            StatusCode::NOT_FOUND => ApiError::NotFound(message),
            _ => ApiError::Service(message),
        }
    }

    /// PUT /auth — sign in. The returned token is kept for later calls.
    pub async fn login(&self, request: LoginRequest) -> Result<LoginResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .client
            .put(format!("{}/auth", base_url))
            .json(&request)
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;

        let login: LoginResponse = Self::parse_response(response).await?;
        self.store_token(&login.token);
        Ok(login)
    }

    /// DELETE /auth — sign out. The local token is dropped regardless of the
    /// service's answer.
    pub async fn logout(&self) -> Result<(), ApiError> {
        let headers = self.get_auth_headers()?;
        let base_url = self.resolved_base_url().await;
        let result = self
            .client
            .delete(format!("{}/auth", base_url))
            .headers(headers)
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()));
        self.clear_token();
        Self::parse_empty(result?).await
    }

    /// GET /user/me — the signed-in user, or 401.
    pub async fn get_me(&self) -> Result<User, ApiError> {
        let headers = self.get_auth_headers()?;
        let base_url = self.resolved_base_url().await;
        let response = self
            .client
            .get(format!("{}/user/me", base_url))
            .headers(headers)
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            self.clear_token();
        }
        Self::parse_response(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_token_round_trips_in_memory() {
        let client = ApiClient::new_with_base_url("http://localhost:3000/api");
        assert!(client.bearer_token().is_none());

        client.store_token("ttttt");
        assert_eq!(client.bearer_token().as_deref(), Some("ttttt"));

        let headers = client.get_auth_headers().unwrap();
        assert_eq!(
            headers.get(header::AUTHORIZATION).unwrap(),
            "Bearer ttttt"
        );

        client.clear_token();
        assert!(client.bearer_token().is_none());
        assert!(client.get_auth_headers().unwrap().is_empty());
    }
}
