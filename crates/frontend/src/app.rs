use crate::routes::routes::AppRoutes;
use crate::shared::config::AppConfig;
use crate::shared::notify::{NoticeHost, Notifier};
use crate::system::auth::context::provide_auth;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::from_env();
    log::debug!("API base: {}", config.api_base);

    provide_context(Notifier::new(config.notice_lifetime_ms));
    provide_auth();

    view! {
        <AppRoutes />
        <NoticeHost />
    }
}
