//! Transient notifications shown in the corner of the screen.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::config::NOTICE_LIFETIME_MS;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
    Info,
}

impl NoticeKind {
    pub fn class(&self) -> &'static str {
        match self {
            NoticeKind::Success => "notice notice--success",
            NoticeKind::Error => "notice notice--error",
            NoticeKind::Info => "notice notice--info",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub text: String,
}

/// Ordered queue of visible notices.
#[derive(Clone, Debug, Default)]
pub struct NoticeQueue {
    next_id: u64,
    items: Vec<Notice>,
}

impl NoticeQueue {
    pub fn push(&mut self, kind: NoticeKind, text: String) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Notice { id, kind, text });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|notice| notice.id != id);
    }

    pub fn items(&self) -> &[Notice] {
        &self.items
    }
}

/// Handle to the notice queue, provided once at the app root.
#[derive(Clone, Copy)]
pub struct Notifier {
    queue: RwSignal<NoticeQueue>,
    lifetime_ms: u32,
}

impl Notifier {
    pub fn new(lifetime_ms: u32) -> Self {
        Self {
            queue: RwSignal::new(NoticeQueue::default()),
            lifetime_ms,
        }
    }

    pub fn notify(&self, kind: NoticeKind, text: impl Into<String>) {
        let mut id = 0;
        self.queue.update(|q| id = q.push(kind, text.into()));
        let queue = self.queue;
        let lifetime = self.lifetime_ms;
        spawn_local(async move {
            TimeoutFuture::new(lifetime).await;
            queue.update(|q| q.dismiss(id));
        });
    }

    pub fn success(&self, text: impl Into<String>) {
        self.notify(NoticeKind::Success, text);
    }

    pub fn error(&self, text: impl Into<String>) {
        self.notify(NoticeKind::Error, text);
    }

    pub fn info(&self, text: impl Into<String>) {
        self.notify(NoticeKind::Info, text);
    }

    pub fn dismiss(&self, id: u64) {
        self.queue.update(|q| q.dismiss(id));
    }
}

pub fn use_notifier() -> Notifier {
    use_context::<Notifier>().unwrap_or_else(|| Notifier::new(NOTICE_LIFETIME_MS))
}

/// Renders the queue; place once near the root.
#[component]
pub fn NoticeHost() -> impl IntoView {
    let notifier = use_notifier();

    view! {
        <div class="notice-host">
            <For
                each=move || notifier.queue.with(|q| q.items().to_vec())
                key=|notice| notice.id
                children=move |notice| {
                    let id = notice.id;
                    view! {
                        <div class=notice.kind.class() role="status">
                            <span>{notice.text}</span>
                            <button class="notice__close" on:click=move |_| notifier.dismiss(id)>
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
