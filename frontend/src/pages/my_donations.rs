use leptos::*;
use shared::Listing;

use crate::api::{ApiClient, SessionState};
use crate::components::alert::{Alert, AlertSeverity};
use crate::components::empty_state::EmptyState;
use crate::components::loading::Loading;
use crate::components::my_foods::MyFoods;
use crate::components::tabs::{TabBar, TabPanel};
use crate::components::toast::use_toasts;
use crate::config::use_config;
use crate::utils::{
    create_partition_memo, is_current_session, DonationTab, DonationsView, FetchState,
    ListingPartition, SessionChange,
};

/// The signed-in donor's listings, split into active and expired tabs.
#[component]
pub fn MyDonationsPage(#[prop(into)] session: Signal<SessionState>) -> impl IntoView {
    let config = use_config();
    let toasts = use_toasts();
    let client = store_value(ApiClient::new(&config));
    let donate_path = config.donate_path;

    let listings = create_rw_signal(FetchState::<Vec<Listing>>::NotStarted);
    let active_tab = create_rw_signal(DonationTab::default());

    let partition = create_partition_memo(listings);

    // Fetch once per auth change
    create_effect(move |_| {
        let change = session.with(SessionChange::for_session);
        if let Some(state) = change.fetch_state() {
            listings.set(state);
        }
        if let Some(message) = change.notice() {
            toasts.error(message);
        }

        if let SessionChange::Fetch { account_id } = change {
            let client = client.get_value();
            wasm_bindgen_futures::spawn_local(async move {
                let result = client.get_my_listings().await;
                if !session.with_untracked(|s| is_current_session(&account_id, s)) {
                    log::debug!("dropping donations fetched for {}", account_id);
                    return;
                }
                match &result {
                    Ok(loaded) => log::debug!("loaded {} donations", loaded.len()),
                    Err(e) => log::error!("failed to load donations: {}", e),
                }
                listings.set(FetchState::from_result(result));
            });
        }
    });

    let selected = Signal::derive(move || active_tab.get().index());
    let on_tab_change = Callback::new(move |index: usize| {
        if let Some(tab) = DonationTab::from_index(index) {
            active_tab.set(tab);
        }
    });

    view! {
        <div class="page-header">
            <h1 class="page-title">"My Donations"</h1>
        </div>

        {move || {
            let current = session.with(|s| listings.with(|l| DonationsView::resolve(s, l)));
            match current {
                DonationsView::NotLoggedIn => view! {
                    <EmptyState title="You are not logged in" />
                }.into_view(),
                DonationsView::Loading => view! { <Loading /> }.into_view(),
                DonationsView::Failed(e) => view! {
                    <Alert
                        severity=AlertSeverity::Error
                        message=format!("Couldn't load your donations: {}", e)
                    />
                }.into_view(),
                DonationsView::NoDonations => view! {
                    <EmptyState title="No Donations Yet">
                        <a href=donate_path class="btn btn-gradient">"Click to Donate"</a>
                    </EmptyState>
                }.into_view(),
                DonationsView::Tabs => view! {
                    <DonationTabs partition=partition selected=selected on_change=on_tab_change />
                }.into_view(),
            }
        }}
    }
}

#[component]
fn DonationTabs(
    partition: Memo<ListingPartition>,
    selected: Signal<usize>,
    on_change: Callback<usize>,
) -> impl IntoView {
    let labels = DonationTab::ALL.iter().map(|tab| tab.label()).collect::<Vec<_>>();

    view! {
        <div class="tabs-header">
            <TabBar labels=labels selected=selected on_change=on_change />
        </div>

        <div class="tab-items">
            {DonationTab::ALL.into_iter().map(move |tab| view! {
                <TabPanel index=tab.index() selected=selected>
                    {move || view! {
                        <MyFoods listings=partition.with(|p| p.for_tab(tab).to_vec()) />
                    }}
                </TabPanel>
            }).collect_view()}
        </div>
    }
}
