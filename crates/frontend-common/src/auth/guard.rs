//! Route guard for authenticated areas

use yew::prelude::*;

use super::context::use_auth;
use super::error_handler::redirect_to_login;

/// Route guard props
#[derive(Properties, PartialEq)]
pub struct RequireAuthProps {
    pub children: Children,
}

/// Renders its children only for an authenticated session; otherwise forces
/// navigation to the login route for the current area
#[function_component(RequireAuth)]
pub fn require_auth(props: &RequireAuthProps) -> Html {
    let auth = use_auth();

    if auth.is_loading {
        return html! {};
    }

    if !auth.is_authenticated {
        redirect_to_login();
        return html! {};
    }

    html! { <>{props.children.clone()}</> }
}
