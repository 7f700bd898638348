use shared::Listing;

use super::FetchState;

/// What the all-foods page shows for a given fetch state.
#[derive(Debug, Clone, PartialEq)]
pub enum FeedView {
    Loading,
    Failed(String),
    Empty,
    Listings(Vec<Listing>),
}

impl FeedView {
    pub fn from_state(state: &FetchState<Vec<Listing>>) -> Self {
        match state {
            FetchState::NotStarted | FetchState::Loading => FeedView::Loading,
            FetchState::Failed(e) => FeedView::Failed(e.clone()),
            FetchState::Loaded(listings) if listings.is_empty() => FeedView::Empty,
            FetchState::Loaded(listings) => FeedView::Listings(listings.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn listing(id: &str) -> Listing {
        Listing {
            id: id.to_string(),
            food_name: "Apples".to_string(),
            quantity: 10,
            location: "Market".to_string(),
            quality: "Good".to_string(),
            dietary_info: String::new(),
            expiry_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            img: None,
            is_expired: false,
            owner: "donor@example.com".to_string(),
        }
    }

    #[test]
    fn test_pending_fetch_shows_loading() {
        assert_eq!(FeedView::from_state(&FetchState::NotStarted), FeedView::Loading);
        assert_eq!(FeedView::from_state(&FetchState::Loading), FeedView::Loading);
    }

    #[test]
    fn test_empty_collection_shows_no_cards() {
        let view = FeedView::from_state(&FetchState::Loaded(Vec::new()));
        assert_eq!(view, FeedView::Empty);
    }

    #[test]
    fn test_loaded_collection_keeps_order() {
        let view = FeedView::from_state(&FetchState::Loaded(vec![listing("a"), listing("b")]));
        match view {
            FeedView::Listings(listings) => {
                let ids: Vec<_> = listings.iter().map(|l| l.id.as_str()).collect();
                assert_eq!(ids, vec!["a", "b"]);
            }
            other => panic!("unexpected view: {:?}", other),
        }
    }

    #[test]
    fn test_failure_is_not_loading() {
        let view = FeedView::from_state(&FetchState::Failed("offline".to_string()));
        assert_eq!(view, FeedView::Failed("offline".to_string()));
    }
}
