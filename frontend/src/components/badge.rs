use leptos::*;

#[derive(Default, Clone, Copy, PartialEq)]
pub enum BadgeVariant {
    #[default]
    Default,
    Fresh,
    Expired,
}

impl BadgeVariant {
    pub fn for_expired(is_expired: bool) -> Self {
        if is_expired {
            BadgeVariant::Expired
        } else {
            BadgeVariant::Fresh
        }
    }

    fn class(&self) -> &'static str {
        match self {
            BadgeVariant::Default => "badge",
            BadgeVariant::Fresh => "badge badge-success",
            BadgeVariant::Expired => "badge badge-danger",
        }
    }
}

/// Small status label.
#[component]
pub fn Badge(#[prop(optional)] variant: BadgeVariant, children: Children) -> impl IntoView {
    view! {
        <span class=variant.class()>{children()}</span>
    }
}
