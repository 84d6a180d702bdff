//! Global authentication context and provider

use std::rc::Rc;

use grantflow_http::types::UserProfile;
use grantflow_http::{Session, SessionStore};
use yew::prelude::*;

use crate::session::BrowserSessionStore;

/// Authentication context data
#[derive(Clone, Debug, PartialEq)]
pub struct AuthContextData {
    pub user: Option<UserProfile>,
    pub is_authenticated: bool,
    pub is_loading: bool,
    pub error: Option<String>,
}

/// Authentication context actions
pub enum AuthAction {
    Login(Session),
    Logout,
    SessionExpired,
    SetLoading(bool),
}

/// Authentication context
pub type AuthContext = UseReducerHandle<AuthContextData>;

impl Default for AuthContextData {
    fn default() -> Self {
        Self {
            user: None,
            is_authenticated: false,
            is_loading: true, // Start with loading to check localStorage
            error: None,
        }
    }
}

impl Reducible for AuthContextData {
    type Action = AuthAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let store = BrowserSessionStore::new();
        match action {
            AuthAction::Login(session) => {
                let user = session.user.clone();
                store.set_session(session);

                Rc::new(Self {
                    user,
                    is_authenticated: true,
                    is_loading: false,
                    error: None,
                })
            }
            AuthAction::Logout => {
                store.clear();

                Rc::new(Self {
                    user: None,
                    is_authenticated: false,
                    is_loading: false,
                    error: None,
                })
            }
            AuthAction::SessionExpired => {
                // The gateway already cleared storage; mirror it in UI state.
                Rc::new(Self {
                    user: None,
                    is_authenticated: false,
                    is_loading: false,
                    error: Some("Your session has expired. Please log in again.".to_string()),
                })
            }
            AuthAction::SetLoading(is_loading) => Rc::new(Self {
                is_loading,
                ..(*self).clone()
            }),
        }
    }
}

/// Auth provider props
#[derive(Properties, PartialEq)]
pub struct AuthProviderProps {
    pub children: Children,
}

/// Auth provider component
#[function_component(AuthProvider)]
pub fn auth_provider(props: &AuthProviderProps) -> Html {
    let auth_state = use_reducer(AuthContextData::default);

    // Route gateway expiry notifications into the context
    {
        let auth_state = auth_state.clone();
        use_effect_with((), move |_| {
            let auth_state = auth_state.clone();
            super::error_handler::set_session_expired_callback(Rc::new(move || {
                auth_state.dispatch(AuthAction::SessionExpired);
            }));

            // Cleanup on unmount
            super::error_handler::clear_session_expired_callback
        });
    }

    // Load auth state from localStorage on mount
    {
        let auth_state = auth_state.clone();
        use_effect_with((), move |_| {
            let store = BrowserSessionStore::new();
            match (store.access_token(), store.refresh_token()) {
                (Some(access_token), Some(refresh_token)) => {
                    auth_state.dispatch(AuthAction::Login(Session {
                        access_token,
                        refresh_token,
                        user: store.user(),
                    }));
                }
                _ => auth_state.dispatch(AuthAction::SetLoading(false)),
            }
        });
    }

    html! {
        <ContextProvider<AuthContext> context={auth_state}>
            {props.children.clone()}
        </ContextProvider<AuthContext>>
    }
}

/// Hook to use auth context
#[hook]
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>()
        .expect("AuthContext not found. Make sure to wrap your component with AuthProvider")
}

/// Hook to get current user profile
#[hook]
pub fn use_auth_state() -> Option<UserProfile> {
    let auth = use_auth();
    auth.user.clone()
}

/// Hook to check if authenticated
#[hook]
pub fn use_is_authenticated() -> bool {
    let auth = use_auth();
    auth.is_authenticated
}
