use leptos::*;

fn tab_id(index: usize) -> String {
    format!("horizontal-tab-{}", index)
}

fn panel_id(index: usize) -> String {
    format!("horizontal-tabpanel-{}", index)
}

fn tab_class(index: usize, selected: usize) -> &'static str {
    if index == selected {
        "tab-link active"
    } else {
        "tab-link"
    }
}

/// Row of tab buttons; `on_change` receives the clicked index.
#[component]
pub fn TabBar(
    labels: Vec<&'static str>,
    #[prop(into)] selected: Signal<usize>,
    on_change: Callback<usize>,
) -> impl IntoView {
    view! {
        <div class="tab-bar" role="tablist">
            {labels.into_iter().enumerate().map(move |(index, label)| {
                view! {
                    <button
                        type="button"
                        role="tab"
                        id=tab_id(index)
                        aria-controls=panel_id(index)
                        aria-selected=move || (selected.get() == index).to_string()
                        class=move || tab_class(index, selected.get())
                        on:click=move |_| on_change.call(index)
                    >
                        {label}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}

/// Panel that stays mounted and is hidden while another tab is selected.
#[component]
pub fn TabPanel(
    index: usize,
    #[prop(into)] selected: Signal<usize>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            role="tabpanel"
            id=panel_id(index)
            aria-labelledby=tab_id(index)
            hidden=move || selected.get() != index
            class="tab-panel"
        >
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_tab_ids() {
        assert_eq!(tab_id(0), "horizontal-tab-0");
        assert_eq!(panel_id(1), "horizontal-tabpanel-1");
    }

    #[wasm_bindgen_test]
    fn test_active_class_logic() {
        assert_eq!(tab_class(1, 1), "tab-link active");
        assert_eq!(tab_class(0, 1), "tab-link");
    }
}
