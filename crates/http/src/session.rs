//! Client-held session state
//!
//! The portal keeps exactly four pieces of durable state: the access token,
//! the refresh token, the authenticated flag, and the cached user profile.
//! They are written together at login, the access token alone is replaced by
//! the refresh flow, and all four are cleared together at logout or forced
//! expiry. No call site touches the underlying storage directly; everything
//! goes through a [`SessionStore`].

use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use crate::types::UserProfile;

/// The session issued at login
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Short-lived bearer credential attached to every API request
    pub access_token: String,
    /// Longer-lived credential exchanged for a new access token
    pub refresh_token: String,
    /// Cached profile fields for display; not security-sensitive
    pub user: Option<UserProfile>,
}

/// Single choke point for session state.
///
/// Implementations must uphold the teardown invariant: there is no state in
/// which some of the session fields are present and others are not, other
/// than the access token being newer than the refresh token after a refresh.
pub trait SessionStore: Send + Sync {
    /// Current access token, if a session exists
    fn access_token(&self) -> Option<String>;

    /// Current refresh token, if a session exists
    fn refresh_token(&self) -> Option<String>;

    /// Cached user profile, if one was stored at login
    fn user(&self) -> Option<UserProfile>;

    /// Gate used by route guards
    fn is_authenticated(&self) -> bool;

    /// Store a full session, as issued by the login endpoint
    fn set_session(&self, session: Session);

    /// Replace both tokens, leaving any cached user in place
    fn set_tokens(&self, access: &str, refresh: &str);

    /// Replace only the access token; the refresh flow never rotates the
    /// refresh token client-side
    fn set_access_token(&self, access: &str);

    /// Remove every session field
    fn clear(&self);
}

/// In-memory store used on native targets and in tests
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    inner: Mutex<Option<Session>>,
}

impl MemorySessionStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with a session
    pub fn with_session(session: Session) -> Self {
        Self {
            inner: Mutex::new(Some(session)),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn access_token(&self) -> Option<String> {
        self.inner
            .lock()
            .expect("session store lock poisoned")
            .as_ref()
            .map(|s| s.access_token.clone())
    }

    fn refresh_token(&self) -> Option<String> {
        self.inner
            .lock()
            .expect("session store lock poisoned")
            .as_ref()
            .map(|s| s.refresh_token.clone())
    }

    fn user(&self) -> Option<UserProfile> {
        self.inner
            .lock()
            .expect("session store lock poisoned")
            .as_ref()
            .and_then(|s| s.user.clone())
    }

    fn is_authenticated(&self) -> bool {
        self.inner
            .lock()
            .expect("session store lock poisoned")
            .is_some()
    }

    fn set_session(&self, session: Session) {
        *self.inner.lock().expect("session store lock poisoned") = Some(session);
    }

    fn set_tokens(&self, access: &str, refresh: &str) {
        let mut guard = self.inner.lock().expect("session store lock poisoned");
        match guard.as_mut() {
            Some(session) => {
                session.access_token = access.to_string();
                session.refresh_token = refresh.to_string();
            }
            None => {
                *guard = Some(Session {
                    access_token: access.to_string(),
                    refresh_token: refresh.to_string(),
                    user: None,
                });
            }
        }
    }

    fn set_access_token(&self, access: &str) {
        let mut guard = self.inner.lock().expect("session store lock poisoned");
        if let Some(session) = guard.as_mut() {
            session.access_token = access.to_string();
        }
    }

    fn clear(&self) {
        *self.inner.lock().expect("session store lock poisoned") = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session {
            access_token: "A1".into(),
            refresh_token: "R1".into(),
            user: None,
        }
    }

    #[test]
    fn refresh_replaces_only_the_access_token() {
        let store = MemorySessionStore::with_session(session());
        store.set_access_token("A2");
        assert_eq!(store.access_token().as_deref(), Some("A2"));
        assert_eq!(store.refresh_token().as_deref(), Some("R1"));
    }

    #[test]
    fn set_access_token_without_a_session_is_a_no_op() {
        let store = MemorySessionStore::new();
        store.set_access_token("A2");
        assert_eq!(store.access_token(), None);
        assert!(!store.is_authenticated());
    }

    #[test]
    fn clear_removes_every_field() {
        let store = MemorySessionStore::with_session(session());
        store.clear();
        assert_eq!(store.access_token(), None);
        assert_eq!(store.refresh_token(), None);
        assert_eq!(store.user(), None);
        assert!(!store.is_authenticated());
    }

    #[test]
    fn tokens_are_written_together() {
        let store = MemorySessionStore::new();
        store.set_tokens("A1", "R1");
        assert_eq!(store.access_token().as_deref(), Some("A1"));
        assert_eq!(store.refresh_token().as_deref(), Some("R1"));
    }
}
