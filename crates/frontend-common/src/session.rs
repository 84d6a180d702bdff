//! Durable session store over the browser's localStorage
//!
//! Exactly four keys, written and cleared per the session lifecycle: both
//! tokens together at login, the access token alone on refresh, everything at
//! logout or forced expiry.

use gloo::storage::{LocalStorage, Storage};
use grantflow_http::types::UserProfile;
use grantflow_http::{Session, SessionStore};

use crate::config::AuthConfig;

/// Browser-backed [`SessionStore`]
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserSessionStore;

impl BrowserSessionStore {
    pub fn new() -> Self {
        Self
    }
}

impl SessionStore for BrowserSessionStore {
    fn access_token(&self) -> Option<String> {
        LocalStorage::get(AuthConfig::ACCESS_TOKEN_KEY).ok()
    }

    fn refresh_token(&self) -> Option<String> {
        LocalStorage::get(AuthConfig::REFRESH_TOKEN_KEY).ok()
    }

    fn user(&self) -> Option<UserProfile> {
        LocalStorage::get(AuthConfig::USER_KEY).ok()
    }

    fn is_authenticated(&self) -> bool {
        LocalStorage::get(AuthConfig::IS_AUTHENTICATED_KEY).unwrap_or(false)
    }

    fn set_session(&self, session: Session) {
        let _ = LocalStorage::set(AuthConfig::ACCESS_TOKEN_KEY, &session.access_token);
        let _ = LocalStorage::set(AuthConfig::REFRESH_TOKEN_KEY, &session.refresh_token);
        let _ = LocalStorage::set(AuthConfig::IS_AUTHENTICATED_KEY, true);
        match &session.user {
            Some(user) => {
                let _ = LocalStorage::set(AuthConfig::USER_KEY, user);
            }
            None => LocalStorage::delete(AuthConfig::USER_KEY),
        }
    }

    fn set_tokens(&self, access: &str, refresh: &str) {
        let _ = LocalStorage::set(AuthConfig::ACCESS_TOKEN_KEY, access);
        let _ = LocalStorage::set(AuthConfig::REFRESH_TOKEN_KEY, refresh);
    }

    fn set_access_token(&self, access: &str) {
        let _ = LocalStorage::set(AuthConfig::ACCESS_TOKEN_KEY, access);
    }

    fn clear(&self) {
        LocalStorage::delete(AuthConfig::ACCESS_TOKEN_KEY);
        LocalStorage::delete(AuthConfig::REFRESH_TOKEN_KEY);
        LocalStorage::delete(AuthConfig::IS_AUTHENTICATED_KEY);
        LocalStorage::delete(AuthConfig::USER_KEY);
    }
}
