use leptos::*;

/// Labelled number field bound to its raw text, so an empty field stays empty.
#[component]
pub fn NumberInput(
    #[prop(into)] value: RwSignal<String>,
    #[prop(into)] label: String,
    #[prop(into)] name: String,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
) -> impl IntoView {
    let input_id = format!("input-{}", name);

    view! {
        <div class="form-field">
            <label class="form-label" for=input_id.clone()>{label}</label>
            <input
                type="number"
                class="form-input form-input-standard"
                id=input_id
                name=name
                disabled=disabled
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </div>
    }
}
