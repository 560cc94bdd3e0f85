//! Content Service Client
//!
//! REST bindings to the wedding content API, organized by content type.
//! Every request carries the admin bearer token when one is stored; a 401
//! from any endpoint evicts the token and sends the admin back to login.

mod auth;
mod gallery;
mod gifts;
mod home;
mod info;
mod rsvp;
mod seed;
mod story;
mod timeline;
mod upload;

use std::sync::Arc;

use reqwest::header::AUTHORIZATION;
use reqwest::{Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::AppConfig;
use crate::error::{ApiError, ApiResult};
use crate::session::{default_token_store, TokenStore};

pub use upload::UploadFile;

/// Called after a 401 evicted the token
pub type UnauthorizedHook = Arc<dyn Fn() + Send + Sync>;

pub const LOGIN_ROUTE: &str = "/admin/login";

#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    max_upload_bytes: u64,
    tokens: Arc<dyn TokenStore>,
    on_unauthorized: UnauthorizedHook,
}

impl ApiClient {
    /// Browser client: `localStorage` tokens, redirect to login on 401
    pub fn new(config: &AppConfig) -> Self {
        Self::with_parts(config, default_token_store(), Arc::new(redirect_to_login))
    }

    pub fn with_parts(config: &AppConfig, tokens: Arc<dyn TokenStore>, on_unauthorized: UnauthorizedHook) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.api_base_url.clone(),
            max_upload_bytes: config.max_upload_bytes,
            tokens,
            on_unauthorized,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Request builder with the bearer token attached when present
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.http.request(method, self.url(path));
        match self.tokens.token() {
            Some(token) => builder.header(AUTHORIZATION, format!("Bearer {token}")),
            None => builder,
        }
    }

    async fn send(&self, builder: RequestBuilder) -> ApiResult<reqwest::Response> {
        let response = builder.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(self.reject(status, &body))
    }

    /// Map a failed status to an error, handling session expiry globally
    fn reject(&self, status: StatusCode, body: &str) -> ApiError {
        if status == StatusCode::UNAUTHORIZED {
            tracing::warn!("session rejected by server, clearing token");
            self.tokens.clear();
            (self.on_unauthorized)();
            return ApiError::Unauthorized;
        }
        let detail = error_detail(body)
            .unwrap_or_else(|| status.canonical_reason().unwrap_or("Unknown error").to_string());
        ApiError::Status { status: status.as_u16(), detail }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let response = self.send(self.request(Method::GET, path)).await?;
        Ok(response.json().await?)
    }

    async fn send_json<B, T>(&self, method: Method, path: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.send(self.request(method, path).json(body)).await?;
        Ok(response.json().await?)
    }

    async fn post_empty(&self, path: &str) -> ApiResult<()> {
        self.send(self.request(Method::POST, path)).await?;
        Ok(())
    }

    async fn delete(&self, path: &str) -> ApiResult<()> {
        self.send(self.request(Method::DELETE, path)).await?;
        Ok(())
    }
}

/// Extract FastAPI's `{"detail": ...}` message
fn error_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        serde_json::Value::String(s) => Some(s.clone()),
        serde_json::Value::Array(errors) => {
            let messages: Vec<&str> = errors.iter().filter_map(|e| e.get("msg")?.as_str()).collect();
            (!messages.is_empty()).then(|| messages.join("; "))
        }
        _ => None,
    }
}

/// Leave the admin area for the login page, unless already there
fn redirect_to_login() {
    let Some(window) = web_sys::window() else { return };
    let location = window.location();
    let path = location.pathname().unwrap_or_default();
    if path.starts_with("/admin") && !path.ends_with("/login") {
        let _ = location.set_href(LOGIN_ROUTE);
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::session::MemoryTokenStore;
    use std::sync::atomic::{AtomicUsize, Ordering};

    pub(crate) fn test_client(tokens: Arc<MemoryTokenStore>) -> (ApiClient, Arc<AtomicUsize>) {
        let redirects = Arc::new(AtomicUsize::new(0));
        let counter = redirects.clone();
        let config = AppConfig { api_base_url: "http://127.0.0.1:9".into(), ..AppConfig::default() };
        let client = ApiClient::with_parts(
            &config,
            tokens,
            Arc::new(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            }),
        );
        (client, redirects)
    }

    #[test]
    fn test_bearer_header_only_with_token() {
        let tokens = Arc::new(MemoryTokenStore::default());
        let (client, _) = test_client(tokens.clone());

        let anonymous = client.request(Method::GET, "/api/home").build().unwrap();
        assert_eq!(anonymous.url().as_str(), "http://127.0.0.1:9/api/home");
        assert!(anonymous.headers().get(AUTHORIZATION).is_none());

        tokens.store("secret");
        let authed = client.request(Method::PUT, "/api/home").build().unwrap();
        assert_eq!(authed.headers()[AUTHORIZATION], "Bearer secret");
    }

    #[test]
    fn test_unauthorized_evicts_token_and_redirects() {
        let tokens = Arc::new(MemoryTokenStore::default());
        tokens.store("expired");
        let (client, redirects) = test_client(tokens.clone());

        let err = client.reject(StatusCode::UNAUTHORIZED, r#"{"detail":"Could not validate credentials"}"#);
        assert!(matches!(err, ApiError::Unauthorized));
        assert_eq!(tokens.token(), None);
        assert_eq!(redirects.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_other_statuses_keep_session() {
        let tokens = Arc::new(MemoryTokenStore::default());
        tokens.store("fine");
        let (client, redirects) = test_client(tokens.clone());

        match client.reject(StatusCode::NOT_FOUND, r#"{"detail":"Some story images not found"}"#) {
            ApiError::Status { status, detail } => {
                assert_eq!(status, 404);
                assert_eq!(detail, "Some story images not found");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(tokens.token().as_deref(), Some("fine"));
        assert_eq!(redirects.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_error_detail_shapes() {
        assert_eq!(error_detail(r#"{"detail":"Invalid file type"}"#).as_deref(), Some("Invalid file type"));
        assert_eq!(
            error_detail(r#"{"detail":[{"msg":"field required"},{"msg":"value is not a valid email address"}]}"#)
                .as_deref(),
            Some("field required; value is not a valid email address")
        );
        assert_eq!(error_detail("Internal Server Error"), None);
        assert_eq!(
            match ApiClient::with_parts(&AppConfig::default(), Arc::new(MemoryTokenStore::default()), Arc::new(|| {}))
                .reject(StatusCode::INTERNAL_SERVER_ERROR, "oops")
            {
                ApiError::Status { detail, .. } => detail,
                _ => String::new(),
            },
            "Internal Server Error"
        );
    }
}
