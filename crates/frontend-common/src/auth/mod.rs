//! Authentication state and session-expiry handling

pub mod context;
pub mod error_handler;
pub mod guard;

pub use context::{use_auth, use_auth_state, use_is_authenticated, AuthAction, AuthContext};
pub use guard::RequireAuth;
