use leptos::*;

#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="loading">
            <div class="spinner"></div>
        </div>
    }
}

/// Full-screen backdrop with a spinner, shown while `open` is true.
#[component]
pub fn LoadingOverlay(#[prop(into)] open: Signal<bool>) -> impl IntoView {
    view! {
        <Show when=move || open.get() fallback=|| ()>
            <div class="backdrop">
                <div class="spinner spinner-light"></div>
            </div>
        </Show>
    }
}
