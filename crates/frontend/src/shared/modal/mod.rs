use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;

/// Overlay dialog. Renders nothing while `is_open` is false.
///
/// The parent owns `is_open`; the close button, a click on the overlay and
/// the Escape key all ask it to close through `on_close`.
#[component]
pub fn Modal(
    #[prop(into)] is_open: Signal<bool>,
    #[prop(into)] title: Signal<String>,
    on_close: Callback<()>,
    children: ChildrenFn,
) -> impl IntoView {
    let keydown = window_event_listener(ev::keydown, move |event| {
        if event.key() == "Escape" && is_open.get_untracked() {
            on_close.run(());
        }
    });
    on_cleanup(move || keydown.remove());

    // Clicks inside the panel must not reach the overlay
    let stop_propagation = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
    };

    view! {
        <Show when=move || is_open.get()>
            <div class="modal-overlay" on:click=move |_| on_close.run(())>
                <div class="modal" role="dialog" aria-modal="true" on:click=stop_propagation>
                    <div class="modal-header">
                        <h2 class="modal-title">{move || title.get()}</h2>
                        <button
                            class="button button--icon modal__close"
                            aria-label="Close"
                            on:click=move |_| on_close.run(())
                        >
                            {icon("x")}
                        </button>
                    </div>
                    <div class="modal-body">
                        {children()}
                    </div>
                </div>
            </div>
        </Show>
    }
}
