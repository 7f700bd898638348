use gloo_timers::callback::Timeout;
use leptos::*;

use crate::config::TOAST_DURATION_MS;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

const CONTAINER_CLASS: &str = "toast-container toast-top-right";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToastOptions {
    pub auto_close_ms: u32,
    pub close_on_click: bool,
    pub show_progress: bool,
}

impl Default for ToastOptions {
    fn default() -> Self {
        Self {
            auto_close_ms: TOAST_DURATION_MS,
            close_on_click: true,
            show_progress: true,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
    pub options: ToastOptions,
}

impl Toast {
    fn class(&self) -> &'static str {
        match self.kind {
            ToastKind::Success => "toast toast-success",
            ToastKind::Error => "toast toast-error",
        }
    }
}

/// Toasts currently on screen, oldest first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastQueue {
    next_id: u64,
    items: Vec<Toast>,
}

impl ToastQueue {
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>, options: ToastOptions) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Toast {
            id,
            kind,
            message: message.into(),
            options,
        });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|toast| toast.id != id);
    }

    pub fn items(&self) -> &[Toast] {
        &self.items
    }
}

/// Notification sink shared through context.
#[derive(Clone, Copy)]
pub struct Toasts {
    queue: RwSignal<ToastQueue>,
    options: ToastOptions,
}

impl Toasts {
    pub fn new(options: ToastOptions) -> Self {
        Self {
            queue: create_rw_signal(ToastQueue::default()),
            options,
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(ToastKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(ToastKind::Error, message.into());
    }

    fn show(&self, kind: ToastKind, message: String) {
        let options = self.options;
        let mut id = 0;
        self.queue.update(|queue| id = queue.push(kind, message, options));

        let queue = self.queue;
        Timeout::new(options.auto_close_ms, move || {
            queue.update(|q| q.dismiss(id));
        })
        .forget();
    }

    pub fn dismiss(&self, id: u64) {
        self.queue.update(|queue| queue.dismiss(id));
    }
}

pub fn provide_toasts(options: ToastOptions) -> Toasts {
    let toasts = Toasts::new(options);
    provide_context(toasts);
    toasts
}

pub fn use_toasts() -> Toasts {
    expect_context::<Toasts>()
}

/// Renders every queued toast in the top-right corner.
#[component]
pub fn ToastContainer() -> impl IntoView {
    let toasts = use_toasts();

    view! {
        <div class=CONTAINER_CLASS role="status" aria-live="polite">
            <For
                each=move || toasts.queue.with(|q| q.items().to_vec())
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let close_on_click = toast.options.close_on_click;
                    let progress_style = format!("animation-duration: {}ms;", toast.options.auto_close_ms);
                    view! {
                        <div
                            class=toast.class()
                            on:click=move |_| {
                                if close_on_click {
                                    toasts.dismiss(id);
                                }
                            }
                        >
                            <span class="toast-message">{toast.message.clone()}</span>
                            {toast.options.show_progress.then(|| view! {
                                <div class="toast-progress" style=progress_style></div>
                            })}
                        </div>
                    }
                }
            />
        </div>
    }
}
