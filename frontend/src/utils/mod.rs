pub mod donations;
pub mod feed;
pub mod fetch_state;
pub mod pickup;

pub use donations::{
    create_partition_memo, is_current_session, DonationTab, DonationsView, ListingPartition,
    SessionChange,
};
pub use feed::FeedView;
pub use fetch_state::FetchState;
pub use pickup::{build_request, PickupNotice, RequestCardState};
