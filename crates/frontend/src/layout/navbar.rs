use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::routes::routes::{BILLING_PATH, HOME_PATH, LOGIN_PATH, SALES_PATH, STITCHING_PATH};
use crate::shared::icons::icon;
use crate::shared::notify::use_notifier;
use crate::system::auth::context::use_auth;

const LINKS: [(&str, &str, &str); 4] = [
    (HOME_PATH, "home", "Home"),
    (SALES_PATH, "sales", "Sales"),
    (STITCHING_PATH, "stitching", "Stitching"),
    (BILLING_PATH, "billing", "Billing"),
];

/// Top navigation. Hidden on the login page and while logged out.
#[component]
pub fn Navbar() -> impl IntoView {
    let auth = use_auth();
    let notifier = use_notifier();
    let location = use_location();

    let visible = move || auth.is_authenticated() && location.pathname.get() != LOGIN_PATH;

    // The route guard takes over once the session is gone
    let logout = move |_| {
        auth.logout();
        notifier.info("Logged out");
    };

    view! {
        <Show when=visible>
            <nav class="main-nav-bar">
                <span class="main-nav-bar__brand">"Tailor Shop"</span>
                <ul>
                    // The active link gets aria-current="page"
                    {LINKS.into_iter().map(|(href, icon_name, title)| {
                        view! {
                            <li class="main-nav-bar__link">
                                <A href=href>
                                    {icon(icon_name)}
                                    <span>{title}</span>
                                </A>
                            </li>
                        }
                    }).collect_view()}
                </ul>
                <div class="main-nav-bar__user">
                    <span>{move || auth.email().unwrap_or_default()}</span>
                    <button class="button button--icon" title="Logout" on:click=logout>
                        {icon("logout")}
                    </button>
                </div>
            </nav>
        </Show>
    }
}
