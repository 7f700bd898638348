use leptos::*;
use shared::Listing;

use super::FetchState;
use crate::api::SessionState;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DonationTab {
    #[default]
    Active,
    Expired,
}

impl DonationTab {
    pub const ALL: [DonationTab; 2] = [DonationTab::Active, DonationTab::Expired];

    pub fn index(&self) -> usize {
        match self {
            DonationTab::Active => 0,
            DonationTab::Expired => 1,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn label(&self) -> &'static str {
        match self {
            DonationTab::Active => "Active",
            DonationTab::Expired => "Expired",
        }
    }
}

/// Donor listings split by their expiration flag.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListingPartition {
    pub fresh: Vec<Listing>,
    pub expired: Vec<Listing>,
}

impl ListingPartition {
    pub fn from_listings(listings: &[Listing]) -> Self {
        let (expired, fresh) = listings.iter().cloned().partition(|l| l.is_expired);
        Self { fresh, expired }
    }

    pub fn for_tab(&self, tab: DonationTab) -> &[Listing] {
        match tab {
            DonationTab::Active => &self.fresh,
            DonationTab::Expired => &self.expired,
        }
    }

    pub fn len(&self) -> usize {
        self.fresh.len() + self.expired.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// What the my-donations page shows for a session and fetch state.
#[derive(Debug, Clone, PartialEq)]
pub enum DonationsView {
    NotLoggedIn,
    Loading,
    Failed(String),
    NoDonations,
    Tabs,
}

impl DonationsView {
    pub fn resolve(session: &SessionState, state: &FetchState<Vec<Listing>>) -> Self {
        match session {
            SessionState::Anonymous => DonationsView::NotLoggedIn,
            SessionState::Restoring => DonationsView::Loading,
            SessionState::Authenticated(_) => match state {
                FetchState::NotStarted | FetchState::Loading => DonationsView::Loading,
                FetchState::Failed(e) => DonationsView::Failed(e.clone()),
                FetchState::Loaded(listings) if listings.is_empty() => DonationsView::NoDonations,
                FetchState::Loaded(_) => DonationsView::Tabs,
            },
        }
    }
}

pub const LOGIN_REQUIRED: &str = "You need to login First";

/// What the donations page does when the session changes.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionChange {
    /// Load the listings of this account.
    Fetch { account_id: String },
    LoginRequired,
    /// The session is still being restored.
    Wait,
}

impl SessionChange {
    pub fn for_session(session: &SessionState) -> Self {
        match session {
            SessionState::Authenticated(account) => SessionChange::Fetch {
                account_id: account.id.clone(),
            },
            SessionState::Anonymous => SessionChange::LoginRequired,
            SessionState::Restoring => SessionChange::Wait,
        }
    }

    /// State the listings move to right away; `None` leaves them as they are.
    pub fn fetch_state(&self) -> Option<FetchState<Vec<Listing>>> {
        match self {
            SessionChange::Fetch { .. } => Some(FetchState::Loading),
            SessionChange::LoginRequired => Some(FetchState::NotStarted),
            SessionChange::Wait => None,
        }
    }

    pub fn notice(&self) -> Option<&'static str> {
        match self {
            SessionChange::LoginRequired => Some(LOGIN_REQUIRED),
            _ => None,
        }
    }
}

/// A fetch issued for `account_id` may only land while that account is signed in.
pub fn is_current_session(account_id: &str, session: &SessionState) -> bool {
    session.account().is_some_and(|account| account.id == account_id)
}

pub fn create_partition_memo(listings: RwSignal<FetchState<Vec<Listing>>>) -> Memo<ListingPartition> {
    create_partition_memo_with(listings, ListingPartition::from_listings)
}

/// Partition memo over `listings`, recomputed only when they change.
pub fn create_partition_memo_with<F>(
    listings: RwSignal<FetchState<Vec<Listing>>>,
    derive: F,
) -> Memo<ListingPartition>
where
    F: Fn(&[Listing]) -> ListingPartition + 'static,
{
    create_memo(move |_| {
        listings.with(|state| {
            state
                .loaded()
                .map(|loaded| derive(loaded))
                .unwrap_or_default()
        })
    })
}
