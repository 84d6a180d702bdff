//! Grantflow portal HTTP client
//!
//! Every call the portal makes to the grants API goes through the
//! [`client::AuthGateway`], which attaches the bearer token from the session
//! store and transparently recovers from an expired access token by exchanging
//! the refresh token once and replaying the request.

pub mod client;
pub mod error;
pub mod session;
pub mod types;

pub use client::{AuthGateway, ClientBuilder, PortalClient, RequestBody, RequestOptions};
pub use error::ApiError;
pub use session::{MemorySessionStore, Session, SessionStore};
