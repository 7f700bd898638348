use leptos::*;

#[derive(Default, Clone, Copy, PartialEq)]
pub enum ButtonVariant {
    #[default]
    Gradient,
    Outline,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Gradient => "btn btn-gradient",
            ButtonVariant::Outline => "btn btn-outline",
        }
    }
}

/// Button that disables itself and shows a spinner while `loading`.
#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] loading: MaybeSignal<bool>,
    #[prop(optional)] on_click: Option<Callback<ev::MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let is_disabled = move || disabled.get() || loading.get();

    view! {
        <button
            type="button"
            class=variant.class()
            disabled=is_disabled
            on:click=move |ev| {
                if let Some(callback) = on_click {
                    callback.call(ev);
                }
            }
        >
            <Show when=move || loading.get() fallback=|| ()>
                <span class="spinner spinner-inline"></span>
            </Show>
            {children()}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_button_variant_classes() {
        assert_eq!(ButtonVariant::Gradient.class(), "btn btn-gradient");
        assert_eq!(ButtonVariant::Outline.class(), "btn btn-outline");
    }
}
