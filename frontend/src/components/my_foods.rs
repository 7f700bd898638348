use leptos::*;
use shared::Listing;

use crate::components::badge::{Badge, BadgeVariant};
use crate::components::card::CardGrid;
use crate::components::listing_card::{ExpiryDate, ListingCard, ListingDetail, PreviewImage};

/// Read-only cards for a donor's own listings.
#[component]
pub fn MyFoods(listings: Vec<Listing>) -> impl IntoView {
    if listings.is_empty() {
        return view! {
            <p class="tab-empty">"Nothing here yet"</p>
        }
        .into_view();
    }

    view! {
        <CardGrid>
            {listings.into_iter().map(|listing| view! { <DonationCard listing=listing /> }).collect_view()}
        </CardGrid>
    }
    .into_view()
}

#[component]
fn DonationCard(listing: Listing) -> impl IntoView {
    let body_listing = listing.clone();
    let footer_listing = listing.clone();

    view! {
        <ListingCard
            listing=listing
            body=move || {
                let l = body_listing.clone();
                view! {
                    <div class="listing-details">
                        <ListingDetail label="Quantity" value=l.quantity.to_string() />
                        <ListingDetail label="Location" value=l.location.clone() highlight=true />
                        <ListingDetail label="Quality" value=l.quality.clone() highlight=true />
                    </div>
                    <PreviewImage url=l.img.clone() alt=l.food_name.clone() />
                }
            }
            footer=move || {
                let l = footer_listing.clone();
                let expired = l.is_expired;
                let label = if expired { "Expired" } else { "Active" };
                view! {
                    <Badge variant=BadgeVariant::for_expired(expired)>{label}</Badge>
                    <ExpiryDate listing=l />
                }
            }
        />
    }
}
