use leptos::*;

#[derive(Default, Clone, Copy, PartialEq)]
pub enum AlertSeverity {
    #[default]
    Info,
    Success,
    Error,
}

impl AlertSeverity {
    fn class(&self) -> &'static str {
        match self {
            AlertSeverity::Info => "alert",
            AlertSeverity::Success => "alert alert-success",
            AlertSeverity::Error => "alert alert-error",
        }
    }
}

/// Inline alert; shows a close button when `on_close` is given.
#[component]
pub fn Alert(
    #[prop(optional)] severity: AlertSeverity,
    #[prop(optional)] on_close: Option<Callback<()>>,
    #[prop(into)] message: String,
) -> impl IntoView {
    view! {
        <div class=severity.class() role="alert">
            <span class="alert-message">{message}</span>
            {on_close.map(|callback| view! {
                <button
                    class="alert-dismiss"
                    type="button"
                    aria-label="Close"
                    on:click=move |_| callback.call(())
                >
                    "×"
                </button>
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_alert_severity_classes() {
        assert_eq!(AlertSeverity::Info.class(), "alert");
        assert_eq!(AlertSeverity::Success.class(), "alert alert-success");
        assert_eq!(AlertSeverity::Error.class(), "alert alert-error");
        assert!(matches!(AlertSeverity::default(), AlertSeverity::Info));
    }
}
