//! Global session-expiry handler
//!
//! The gateway clears the session store itself; this module owns what happens
//! next in the browser: notifying the auth context and forcing navigation to
//! the login route for the current area.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::warn;

use crate::config;

thread_local! {
    /// Callback used to sync UI state (the auth context) before navigating
    static SESSION_EXPIRED_CALLBACK: RefCell<Option<Rc<dyn Fn()>>> = RefCell::new(None);
}

/// Set the session-expired callback
pub fn set_session_expired_callback(callback: Rc<dyn Fn()>) {
    SESSION_EXPIRED_CALLBACK.with(|cb| {
        *cb.borrow_mut() = Some(callback);
    });
}

/// Clear the session-expired callback
pub fn clear_session_expired_callback() {
    SESSION_EXPIRED_CALLBACK.with(|cb| {
        *cb.borrow_mut() = None;
    });
}

/// Invoked by the gateway after an unrecoverable refresh failure
pub fn trigger_session_expired() {
    warn!("session expired, returning to login");
    SESSION_EXPIRED_CALLBACK.with(|cb| {
        if let Some(callback) = cb.borrow().as_ref() {
            callback();
        }
    });
    redirect_to_login();
}

/// Hard navigation to the login route for the current area
pub fn redirect_to_login() {
    if let Some(window) = web_sys::window() {
        let location = window.location();
        let path = location.pathname().unwrap_or_default();
        let _ = location.set_href(config::login_route_for(&path));
    }
}
