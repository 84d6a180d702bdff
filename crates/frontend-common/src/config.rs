//! Frontend configuration

use grantflow_http::client::normalize_base_url;

/// Compile-time override for the API base URL; set by the build pipeline for
/// deployments where the API is not served from the page origin
const API_URL_OVERRIDE: Option<&str> = option_env!("GRANTFLOW_API_URL");

/// Get the base URL for API calls
pub fn api_base_url() -> String {
    if let Some(url) = API_URL_OVERRIDE {
        return normalize_base_url(url).to_string();
    }

    // Fall back to the window origin
    if let Some(window) = web_sys::window() {
        if let Ok(origin) = window.location().origin() {
            return normalize_base_url(&origin).to_string();
        }
    }

    // Default to relative URLs
    String::new()
}

/// Authentication configuration
pub struct AuthConfig;

impl AuthConfig {
    /// Durable storage key for the access token
    pub const ACCESS_TOKEN_KEY: &'static str = "accessToken";

    /// Durable storage key for the refresh token
    pub const REFRESH_TOKEN_KEY: &'static str = "refreshToken";

    /// Durable storage key for the route-guard flag
    pub const IS_AUTHENTICATED_KEY: &'static str = "isAuthenticated";

    /// Durable storage key for the cached user profile
    pub const USER_KEY: &'static str = "user";

    /// Login route for the self-service portal
    pub const LOGIN_ROUTE: &'static str = "/login";

    /// Login route for the admin area
    pub const ADMIN_LOGIN_ROUTE: &'static str = "/admin-login";
}

/// Pick the login route an expired session should land on, based on where in
/// the portal the user currently is
pub fn login_route_for(path: &str) -> &'static str {
    if path == "/admin" || path.starts_with("/admin/") || path == AuthConfig::ADMIN_LOGIN_ROUTE {
        AuthConfig::ADMIN_LOGIN_ROUTE
    } else {
        AuthConfig::LOGIN_ROUTE
    }
}
