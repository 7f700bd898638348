use leptos::*;

/// Centered message with optional call to action underneath.
#[component]
pub fn EmptyState(
    #[prop(into)] title: String,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="empty-state">
            <h2 class="empty-state-title">{title}</h2>
            {children.map(|c| c())}
        </div>
    }
}
