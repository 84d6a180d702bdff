//! Authentication API service

use grantflow_http::{Session, SessionStore};

use crate::client::public_client;
use crate::session::BrowserSessionStore;

/// Authentication API service
#[derive(Clone)]
pub struct AuthApiService;

impl AuthApiService {
    /// Create a new auth API service
    pub fn new() -> Self {
        Self
    }

    /// Log in to the self-service portal.
    ///
    /// Returns the session for the caller to dispatch into the auth context,
    /// which persists it.
    pub async fn login(&self, email: String, password: String) -> Result<Session, String> {
        let client = public_client().map_err(|e| format!("Failed to get client: {e}"))?;

        let response = client
            .login(email, password)
            .await
            .map_err(|e| e.to_string())?;

        Ok(Session {
            access_token: response.access,
            refresh_token: response.refresh,
            user: Some(response.user),
        })
    }

    /// Log in to the admin area
    pub async fn admin_login(&self, email: String, password: String) -> Result<Session, String> {
        let client = public_client().map_err(|e| format!("Failed to get client: {e}"))?;

        let response = client
            .admin_login(email, password)
            .await
            .map_err(|e| e.to_string())?;

        Ok(Session {
            access_token: response.access,
            refresh_token: response.refresh,
            user: Some(response.user),
        })
    }

    /// Log out: purely client-side, the tokens are simply discarded
    pub fn logout(&self) {
        BrowserSessionStore::new().clear();
    }
}

impl Default for AuthApiService {
    fn default() -> Self {
        Self::new()
    }
}
