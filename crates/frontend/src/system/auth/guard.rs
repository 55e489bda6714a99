use leptos::prelude::*;
use leptos_router::components::Redirect;

use super::context::use_auth;

pub const LOGIN_PATH: &str = "/login";

/// Renders `children` only while a session exists; otherwise sends the user
/// to the login page.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();

    view! {
        <Show
            when=move || auth.is_authenticated()
            fallback=|| view! { <Redirect path=LOGIN_PATH /> }
        >
            {children()}
        </Show>
    }
}
