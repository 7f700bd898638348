use leptos::*;
use shared::Listing;

use crate::components::card::{Card, CardBody, CardFooter};

/// Card showing one listing, with `body` and `footer` slots supplied by the caller.
#[component]
pub fn ListingCard(
    listing: Listing,
    #[prop(optional)] disabled: bool,
    #[prop(into)] body: ViewFn,
    #[prop(into)] footer: ViewFn,
) -> impl IntoView {
    let style = card_style(disabled);

    view! {
        <Card class="listing-card" style=style>
            <div class="listing-card-header">
                <h3 class="listing-card-title">{listing.food_name}</h3>
                <span class="listing-card-owner">{listing.owner}</span>
            </div>
            <CardBody>{body.run()}</CardBody>
            <CardFooter>{footer.run()}</CardFooter>
        </Card>
    }
}

/// Label/value pair inside a listing card.
#[component]
pub fn ListingDetail(
    #[prop(into)] label: String,
    #[prop(into)] value: MaybeSignal<String>,
    #[prop(optional)] highlight: bool,
) -> impl IntoView {
    let class = if highlight {
        "listing-detail listing-detail-highlight"
    } else {
        "listing-detail"
    };

    view! {
        <div class=class>
            <span class="listing-detail-label">{label}</span>
            <span class="listing-detail-value">{move || value.get()}</span>
        </div>
    }
}

#[component]
pub fn ExpiryDate(listing: Listing) -> impl IntoView {
    view! {
        <div class="listing-expiry">
            <span class="listing-expiry-label">"Expiry Date: "</span>
            <strong>{format_expiry(&listing)}</strong>
        </div>
    }
}

/// Image preview; listings without an image get a placeholder.
#[component]
pub fn PreviewImage(url: Option<String>, #[prop(into)] alt: String) -> impl IntoView {
    match url.filter(|u| !u.trim().is_empty()) {
        Some(src) => view! {
            <img class="preview-image" src=src alt=alt loading="lazy" />
        }
        .into_view(),
        None => view! {
            <div class="preview-image preview-image-empty">"No image"</div>
        }
        .into_view(),
    }
}

fn card_style(disabled: bool) -> String {
    format!("opacity: {};", if disabled { "0.6" } else { "1" })
}

pub fn format_expiry(listing: &Listing) -> String {
    listing.expiry_date.format("%d %b %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_card_style_dims_disabled_cards() {
        assert_eq!(card_style(false), "opacity: 1;");
        assert_eq!(card_style(true), "opacity: 0.6;");
    }

    #[wasm_bindgen_test]
    fn test_format_expiry() {
        let listing = Listing {
            id: "x".to_string(),
            food_name: "Milk".to_string(),
            quantity: 1,
            location: "Fridge".to_string(),
            quality: "Cold".to_string(),
            dietary_info: String::new(),
            expiry_date: NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
            img: None,
            is_expired: false,
            owner: "donor@example.com".to_string(),
        };
        assert_eq!(format_expiry(&listing), "05 Jan 2024");
    }
}
