use leptos::*;
use shared::Listing;

use crate::api::{ApiClient, SessionState};
use crate::components::alert::{Alert, AlertSeverity};
use crate::components::card::CardGrid;
use crate::components::empty_state::EmptyState;
use crate::components::loading::Loading;
use crate::components::request_card::RequestCard;
use crate::config::use_config;
use crate::utils::{FeedView, FetchState};

/// Every listing currently offered, each with a pickup request form.
#[component]
pub fn AllFoodsPage(#[prop(into)] session: Signal<SessionState>) -> impl IntoView {
    let client = store_value(ApiClient::new(&use_config()));
    let listings = create_rw_signal(FetchState::<Vec<Listing>>::NotStarted);

    // Load listings once per mount
    create_effect(move |_| {
        listings.set(FetchState::Loading);
        let client = client.get_value();
        wasm_bindgen_futures::spawn_local(async move {
            let result = client.get_all_listings().await;
            match &result {
                Ok(loaded) => log::debug!("loaded {} listings", loaded.len()),
                Err(e) => log::error!("failed to load listings: {}", e),
            }
            listings.set(FetchState::from_result(result));
        });
    });

    view! {
        <div class="page-header">
            <h1 class="page-title">"Available Food"</h1>
        </div>

        <CardGrid>
            {move || match listings.with(FeedView::from_state) {
                FeedView::Loading => view! { <Loading /> }.into_view(),
                FeedView::Failed(e) => view! {
                    <Alert
                        severity=AlertSeverity::Error
                        message=format!("Couldn't load offerings: {}", e)
                    />
                }.into_view(),
                FeedView::Empty => view! { <EmptyState title="No offerings found" /> }.into_view(),
                FeedView::Listings(items) => items
                    .into_iter()
                    .map(move |listing| view! { <RequestCard listing=listing session=session /> })
                    .collect_view(),
            }}
        </CardGrid>
    }
}
