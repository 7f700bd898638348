use leptos::*;
use leptos_router::*;

use crate::api::Session;
use crate::components::empty_state::EmptyState;
use crate::components::navbar::Navbar;
use crate::components::toast::{provide_toasts, ToastContainer, ToastOptions};
use crate::config::{provide_config, AppConfig};
use crate::pages::{all_foods::AllFoodsPage, my_donations::MyDonationsPage};

const FEED_PATH: &str = "/dashboard/all-foods";

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    provide_toasts(ToastOptions {
        auto_close_ms: config.toast_duration_ms,
        ..ToastOptions::default()
    });

    let session = Session::new();
    provide_context(session);
    session.restore(&config);
    provide_config(config);

    // Pages get the session explicitly rather than reading context
    let session_state = session.signal();

    view! {
        <Router>
            <Navbar />
            <main class="container">
                <Routes>
                    <Route path="/" view=RedirectToFeed />
                    <Route path="/dashboard" view=RedirectToFeed />
                    <Route
                        path=FEED_PATH
                        view=move || view! { <AllFoodsPage session=session_state /> }
                    />
                    <Route
                        path="/dashboard/my-donations"
                        view=move || view! { <MyDonationsPage session=session_state /> }
                    />
                    <Route path="/*any" view=NotFound />
                </Routes>
            </main>
            <ToastContainer />
        </Router>
    }
}

#[component]
fn RedirectToFeed() -> impl IntoView {
    let navigate = use_navigate();
    navigate(FEED_PATH, Default::default());
    view! {}
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <EmptyState title="Page not found">
            <a href=FEED_PATH class="btn btn-gradient">"Back to offerings"</a>
        </EmptyState>
    }
}
