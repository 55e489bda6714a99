use contracts::shared::error::AppError;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_navigate;

use crate::routes::routes::HOME_PATH;
use crate::shared::notify::use_notifier;
use crate::system::auth::{api, context::use_auth};

fn failure_notice(error: &AppError) -> String {
    format!("Login failed: {}", error)
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();

    view! {
        <Show
            when=move || !auth.is_authenticated()
            fallback=|| view! { <Redirect path=HOME_PATH /> }
        >
            <LoginForm />
        </Show>
    }
}

#[component]
fn LoginForm() -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let auth = use_auth();
    let notifier = use_notifier();
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let email_val = email.get();
        let password_val = password.get();

        set_is_loading.set(true);
        set_error_message.set(None);

        let navigate = navigate.clone();
        spawn_local(async move {
            let result = match api::login(email_val, password_val).await {
                Ok(session) => auth.login(session),
                Err(e) => Err(e),
            };
            set_is_loading.set(false);
            match result {
                Ok(()) => {
                    notifier.success("Login successful");
                    navigate(HOME_PATH, Default::default());
                }
                Err(e) => {
                    log::warn!("login failed: {}", e);
                    notifier.error(failure_notice(&e));
                    set_error_message.set(Some(e.to_string()));
                }
            }
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Tailor Shop"</h1>
                <h2>"Sign in"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="email">"Email"</label>
                        <input
                            type="email"
                            id="email"
                            placeholder="you@example.com"
                            value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">"Password"</label>
                        <input
                            type="password"
                            id="password"
                            value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <button
                        type="submit"
                        class="btn-primary"
                        disabled=move || is_loading.get()
                    >
                        {move || if is_loading.get() { "Signing in..." } else { "Login" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
