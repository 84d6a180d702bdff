//! Authenticated request gateway
//!
//! Single choke point for every call to the grants API: attaches the bearer
//! token from the session store, forces the JSON content type, and recovers
//! exactly once from an expired access token by exchanging the refresh token
//! and replaying the original request. A refresh that fails tears the whole
//! session down and invokes the registered expiry handler.

use std::sync::Arc;

use reqwest::header::{self, HeaderValue};
use reqwest::{Client, Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use super::options::RequestOptions;
use crate::error::ApiError;
use crate::session::SessionStore;
use crate::types::{RefreshRequest, RefreshResponse};

/// Invoked after the session store has been cleared on unrecoverable
/// authorization failure; the browser layer registers a redirect here
pub type SessionExpiredHandler = dyn Fn() + Send + Sync;

const REFRESH_PATH: &str = "/api/authentication/refresh/";

/// Session-aware API client
#[derive(Clone)]
pub struct AuthGateway {
    client: Client,
    base_url: String,
    store: Arc<dyn SessionStore>,
    // Single-flight: concurrent 401s serialize here so only the first caller
    // exchanges the refresh token.
    refresh_gate: Arc<futures::lock::Mutex<()>>,
    on_session_expired: Option<Arc<SessionExpiredHandler>>,
}

impl AuthGateway {
    pub(crate) fn new(
        client: Client,
        base_url: String,
        store: Arc<dyn SessionStore>,
        on_session_expired: Option<Arc<SessionExpiredHandler>>,
    ) -> Self {
        Self {
            client,
            base_url,
            store,
            refresh_gate: Arc::new(futures::lock::Mutex::new(())),
            on_session_expired,
        }
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The session store this gateway reads tokens from
    pub fn store(&self) -> &Arc<dyn SessionStore> {
        &self.store
    }

    /// Issue a request, recovering once from an expired access token.
    ///
    /// The raw response is returned unparsed except in the recovery path,
    /// where the retried response is returned instead, whatever its outcome.
    /// A 400 is logged and passed through; every other status is the
    /// caller's to interpret.
    pub async fn send(&self, path: &str, options: RequestOptions) -> Result<Response, ApiError> {
        let response = self.issue(path, &options).await?;

        match response.status() {
            StatusCode::UNAUTHORIZED => {
                self.recover_access_token().await?;
                self.issue(path, &options).await
            }
            StatusCode::BAD_REQUEST => {
                warn!(path, "request rejected by server-side validation");
                Ok(response)
            }
            _ => Ok(response),
        }
    }

    /// Issue a request and deserialize a successful response.
    ///
    /// Error statuses are drained into the error taxonomy; the body of a 400
    /// is logged here since the raw path cannot read it without consuming it.
    pub async fn execute<T: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<T, ApiError> {
        let response = self.send(path, options).await?;
        let status = response.status();

        if status.is_success() {
            Ok(response.json().await?)
        } else {
            let message = response.text().await.unwrap_or_else(|_| status.to_string());
            if status == StatusCode::BAD_REQUEST {
                warn!(%message, "validation error");
            }
            Err(ApiError::from_status(status, message))
        }
    }

    /// GET a resource
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.execute(path, RequestOptions::get()).await
    }

    /// POST a JSON payload
    pub async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.execute(path, RequestOptions::with_json(Method::POST, body)?)
            .await
    }

    /// PUT a JSON payload
    pub async fn put_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.execute(path, RequestOptions::with_json(Method::PUT, body)?)
            .await
    }

    /// DELETE a resource; tolerates an empty response body
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let response = self
            .send(path, RequestOptions::method(Method::DELETE))
            .await?;
        let status = response.status();

        if status.is_success() {
            Ok(())
        } else {
            let message = response.text().await.unwrap_or_else(|_| status.to_string());
            Err(ApiError::from_status(status, message))
        }
    }

    async fn issue(&self, path: &str, options: &RequestOptions) -> Result<Response, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        let method = options.method.clone().unwrap_or(Method::GET);

        // Caller headers first; the two forced defaults always win.
        let mut headers = options.headers.clone();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        if let Some(token) = self.store.access_token() {
            let bearer = HeaderValue::from_str(&format!("Bearer {token}")).map_err(|_| {
                ApiError::Configuration("access token is not a valid header value".into())
            })?;
            headers.insert(header::AUTHORIZATION, bearer);
        }

        let mut request = self.client.request(method, url).headers(headers);
        if let Some(body) = options.body.clone() {
            request = request.body(body.into_text()?);
        }
        #[cfg(not(target_arch = "wasm32"))]
        if let Some(timeout) = options.timeout {
            request = request.timeout(timeout);
        }

        Ok(request.send().await?)
    }

    /// Exchange the refresh token for a new access token.
    ///
    /// Callers that lose the single-flight race reuse the token the winner
    /// stored instead of spending the refresh token again.
    async fn recover_access_token(&self) -> Result<String, ApiError> {
        let observed = self.store.access_token();
        let _flight = self.refresh_gate.lock().await;

        if let Some(current) = self.store.access_token() {
            if observed.as_deref() != Some(current.as_str()) {
                debug!("access token already refreshed by a concurrent request");
                return Ok(current);
            }
        }

        let Some(refresh) = self.store.refresh_token() else {
            return Err(self.expire_session());
        };

        let url = format!("{}{REFRESH_PATH}", self.base_url);
        let response = self
            .client
            .post(url)
            .json(&RefreshRequest { refresh })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(self.expire_session());
        }

        match response.json::<RefreshResponse>().await {
            Ok(refreshed) => {
                // The refresh token stays as issued at login.
                self.store.set_access_token(&refreshed.access);
                Ok(refreshed.access)
            }
            Err(_) => Err(self.expire_session()),
        }
    }

    fn expire_session(&self) -> ApiError {
        warn!("token refresh failed, tearing down session");
        self.store.clear();
        if let Some(handler) = &self.on_session_expired {
            handler();
        }
        ApiError::SessionExpired
    }
}
