//! Client configuration and initialization

use std::sync::{Arc, Mutex};

use grantflow_http::{ApiError, AuthGateway, ClientBuilder, PortalClient};
use once_cell::sync::Lazy;

use crate::auth::error_handler;
use crate::config;
use crate::session::BrowserSessionStore;

/// Global client instances
static PUBLIC_CLIENT: Lazy<Mutex<Option<PortalClient>>> = Lazy::new(|| Mutex::new(None));
static GATEWAY: Lazy<Mutex<Option<AuthGateway>>> = Lazy::new(|| Mutex::new(None));

/// Get the public client instance (for the login endpoints)
pub fn public_client() -> Result<PortalClient, ApiError> {
    let mut client_lock = PUBLIC_CLIENT
        .lock()
        .expect("Failed to acquire public client lock");

    if let Some(client) = client_lock.as_ref() {
        return Ok(client.clone());
    }

    let client = PortalClient::builder()
        .base_url(config::api_base_url())
        .build_public()?;
    *client_lock = Some(client.clone());
    Ok(client)
}

/// Get the authenticated gateway instance.
///
/// The gateway reads tokens from localStorage on every request, so the same
/// instance serves the whole page lifetime; an absent access token simply
/// means requests go out without an `Authorization` header.
pub fn gateway() -> Result<AuthGateway, ApiError> {
    let mut gateway_lock = GATEWAY.lock().expect("Failed to acquire gateway lock");

    if let Some(gateway) = gateway_lock.as_ref() {
        return Ok(gateway.clone());
    }

    let gateway = ClientBuilder::new()
        .base_url(config::api_base_url())
        .on_session_expired(Arc::new(error_handler::trigger_session_expired))
        .build_gateway(Arc::new(BrowserSessionStore::new()))?;
    *gateway_lock = Some(gateway.clone());
    Ok(gateway)
}
