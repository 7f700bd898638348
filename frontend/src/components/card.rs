use leptos::*;

fn with_extra(base: &str, extra: Option<String>) -> String {
    match extra {
        Some(extra) => format!("{} {}", base, extra),
        None => base.to_string(),
    }
}

/// Card container component.
#[component]
pub fn Card(
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional, into)] style: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=with_extra("card", class) style=style.unwrap_or_default()>
            {children()}
        </div>
    }
}

/// Card body section.
#[component]
pub fn CardBody(children: Children) -> impl IntoView {
    view! {
        <div class="card-body">
            {children()}
        </div>
    }
}

/// Card footer section.
#[component]
pub fn CardFooter(children: Children) -> impl IntoView {
    view! {
        <div class="card-footer">
            {children()}
        </div>
    }
}

/// Responsive grid the listing cards are laid out in.
#[component]
pub fn CardGrid(children: Children) -> impl IntoView {
    view! {
        <div class="card-grid">
            {children()}
        </div>
    }
}
