//! REST client for the signals backend.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Serialize;
use signals_core::error::ApiError;
use signals_core::traits::Gateway;
use signals_core::types::{AuthResponse, BillingStatus, Checkout, SignalsPage, User};
use tracing::{debug, info};

const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Backend API configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    /// Create config with an explicit base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Load from environment variables, falling back to the local backend.
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("SIGNALS_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(base_url)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

/// Request body for the auth endpoints.
#[derive(Debug, Serialize)]
struct Credentials<'a> {
    email: &'a str,
    password: &'a str,
}

/// Pull the backend's `detail` message out of an error body.
fn extract_detail(body: &str) -> Option<String> {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()?
        .get("detail")?
        .as_str()
        .map(|s| s.to_string())
}

/// Map a non-success response to a typed error.
///
/// The backend reports failures as JSON `{"detail": "..."}`; when that field
/// is absent or the body is not JSON, `fallback` is used instead.
fn error_for(status: StatusCode, body: &str, fallback: &str) -> ApiError {
    let message = extract_detail(body).unwrap_or_else(|| fallback.to_string());
    if status == StatusCode::UNAUTHORIZED {
        ApiError::Unauthorized(message)
    } else {
        ApiError::Api(message)
    }
}

/// REST gateway client.
pub struct RestClient {
    config: ApiConfig,
    client: Client,
}

impl RestClient {
    /// Create a new client against the configured backend.
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .build()
            .map_err(|e| ApiError::Configuration(e.to_string()))?;
        Ok(Self { config, client })
    }

    /// Create from environment variables.
    pub fn from_env() -> Result<Self, ApiError> {
        Self::new(ApiConfig::from_env())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }
}

#[async_trait]
impl Gateway for RestClient {
    async fn signup(&self, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
        let url = self.url("/auth/signup");
        debug!("POST {}", url);

        let resp = self
            .client
            .post(&url)
            .json(&Credentials { email, password })
            .send()
            .await
            .map_err(|e| ApiError::Connection(e.to_string()))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            return Err(error_for(status, &text, "Signup failed"));
        }

        let auth: AuthResponse = resp
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;

        info!("Account created for {}", auth.user.email);
        Ok(auth)
    }

    async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
        let url = self.url("/auth/login");
        debug!("POST {}", url);

        let resp = self
            .client
            .post(&url)
            .json(&Credentials { email, password })
            .send()
            .await
            .map_err(|e| ApiError::Connection(e.to_string()))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            return Err(error_for(status, &text, "Login failed"));
        }

        let auth: AuthResponse = resp
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;

        info!("Logged in as {}", auth.user.email);
        Ok(auth)
    }

    async fn me(&self, token: &str) -> Result<User, ApiError> {
        let url = self.url("/auth/me");

        let resp = self
            .client
            .get(&url)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| ApiError::Connection(e.to_string()))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            return Err(error_for(status, &text, "Failed to get user info"));
        }

        resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn signals(&self, token: &str) -> Result<SignalsPage, ApiError> {
        let url = self.url("/signals/");

        let resp = self
            .client
            .get(&url)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| ApiError::Connection(e.to_string()))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            return Err(error_for(status, &text, "Failed to fetch signals"));
        }

        let page: SignalsPage = resp
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;

        debug!(
            "Fetched {} of {} signals (paid: {}, cached: {})",
            page.signals.len(),
            page.total,
            page.is_paid,
            page.cached
        );
        Ok(page)
    }

    async fn create_checkout(&self, token: &str) -> Result<Checkout, ApiError> {
        let url = self.url("/billing/create-checkout");

        let resp = self
            .client
            .post(&url)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| ApiError::Connection(e.to_string()))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            return Err(error_for(status, &text, "Failed to create checkout"));
        }

        let checkout: Checkout = resp
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;

        info!("Checkout session created: {}", checkout.session_id);
        Ok(checkout)
    }

    async fn billing_status(&self, token: &str) -> Result<BillingStatus, ApiError> {
        let url = self.url("/billing/status");

        let resp = self
            .client
            .get(&url)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| ApiError::Connection(e.to_string()))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            return Err(error_for(status, &text, "Failed to get billing status"));
        }

        resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))
    }

    fn name(&self) -> &str {
        &self.config.base_url
    }
}
