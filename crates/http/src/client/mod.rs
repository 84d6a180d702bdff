//! Grantflow API clients
//!
//! [`PortalClient`] talks to the handful of public endpoints (login); the
//! [`AuthGateway`] is the choke point every authenticated call goes through.

pub mod auth;
pub mod gateway;
pub mod grants;
pub mod options;
pub mod reports;
pub mod subgrantees;

use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, ClientBuilder as ReqwestBuilder};

use crate::error::ApiError;
use crate::session::SessionStore;

pub use gateway::{AuthGateway, SessionExpiredHandler};
pub use options::{RequestBody, RequestOptions};

const USER_AGENT: &str = "grantflow-client/0.1.0";

/// Strip trailing slashes so path concatenation never produces `//`.
///
/// Idempotent and total; the result only ends in `/` when the input collapses
/// to the empty string.
pub fn normalize_base_url(url: &str) -> &str {
    url.trim_end_matches('/')
}

/// Client for public endpoints that don't require authentication
#[derive(Clone)]
pub struct PortalClient {
    client: Client,
    base_url: String,
}

impl PortalClient {
    /// Create a new public client
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        ClientBuilder::new().base_url(base_url).build_public()
    }

    /// Create a new client builder
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Create a request builder without authentication
    pub fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client.request(method, url)
    }

    /// Execute a request and handle common errors
    pub async fn execute<T: serde::de::DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            Ok(response.json().await?)
        } else {
            let message = response.text().await.unwrap_or_else(|_| status.to_string());
            Err(ApiError::from_status(status, message))
        }
    }
}

/// Builder that creates the appropriate client type
pub struct ClientBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    on_session_expired: Option<Arc<SessionExpiredHandler>>,
}

impl ClientBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self {
            base_url: None,
            timeout: None,
            user_agent: None,
            on_session_expired: None,
        }
    }

    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the request timeout
    #[cfg(not(target_arch = "wasm32"))]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Set the handler invoked after an unrecoverable refresh failure tears
    /// the session down
    pub fn on_session_expired(mut self, handler: Arc<SessionExpiredHandler>) -> Self {
        self.on_session_expired = Some(handler);
        self
    }

    fn build_inner(&self) -> Result<(Client, String), ApiError> {
        let base_url = self
            .base_url
            .as_deref()
            .ok_or_else(|| ApiError::Configuration("base_url is required".into()))?;
        let base_url = normalize_base_url(base_url).to_string();

        let agent = self.user_agent.clone().unwrap_or_else(|| USER_AGENT.into());

        #[cfg(not(target_arch = "wasm32"))]
        let client = {
            let mut builder = ReqwestBuilder::new().user_agent(agent);
            if let Some(timeout) = self.timeout {
                builder = builder.timeout(timeout);
            }
            builder.build()?
        };

        #[cfg(target_arch = "wasm32")]
        let client = {
            let _ = self.timeout; // Timeouts not supported on WASM
            ReqwestBuilder::new().user_agent(agent).build()?
        };

        Ok((client, base_url))
    }

    /// Build a public client
    pub fn build_public(self) -> Result<PortalClient, ApiError> {
        let (client, base_url) = self.build_inner()?;
        Ok(PortalClient { client, base_url })
    }

    /// Build the authenticated gateway over a session store
    pub fn build_gateway(self, store: Arc<dyn SessionStore>) -> Result<AuthGateway, ApiError> {
        let (client, base_url) = self.build_inner()?;
        Ok(AuthGateway::new(
            client,
            base_url,
            store,
            self.on_session_expired,
        ))
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
