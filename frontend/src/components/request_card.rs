use leptos::*;
use shared::{Listing, PickupError, PickupResponse};

use crate::api::{ApiClient, SessionState};
use crate::components::alert::{Alert, AlertSeverity};
use crate::components::badge::Badge;
use crate::components::button::Button;
use crate::components::listing_card::{ExpiryDate, ListingCard, ListingDetail, PreviewImage};
use crate::components::loading::LoadingOverlay;
use crate::components::number_input::NumberInput;
use crate::components::toast::use_toasts;
use crate::config::use_config;
use crate::utils::{build_request, PickupNotice, RequestCardState};

/// Listing card with a pickup request form in its footer.
#[component]
pub fn RequestCard(
    listing: Listing,
    #[prop(into)] session: Signal<SessionState>,
    #[prop(optional)] disabled: bool,
) -> impl IntoView {
    let toasts = use_toasts();
    let client = store_value(ApiClient::new(&use_config()));

    let card = create_rw_signal(RequestCardState::new(&listing));
    let quantity_input = create_rw_signal(String::new());
    let stored_listing = store_value(listing.clone());

    let submitting = Signal::derive(move || card.with(|c| c.submitting));
    let input_locked = Signal::derive(move || disabled || submitting.get());

    let raise = move |notice: Option<PickupNotice>| match notice {
        Some(PickupNotice::Success(message)) => toasts.success(message),
        Some(PickupNotice::Error(message)) => toasts.error(message),
        None => {}
    };

    let submit = move || {
        if card.with_untracked(|c| c.submitting) {
            return;
        }
        let built = stored_listing.with_value(|l| {
            build_request(l, &session.get_untracked(), &quantity_input.get_untracked())
        });
        let request = match built {
            Ok(request) => request,
            Err(e) => {
                log::warn!("pickup request not sent: {}", e);
                raise(card.try_update(|c| c.reject(e)).flatten());
                return;
            }
        };

        if !card.try_update(|c| c.begin()).unwrap_or(false) {
            return;
        }

        log::info!(
            "requesting {} of listing {} for {}",
            request.chosen_quantity,
            request.food_id,
            request.requested_by
        );

        let client = client.get_value();
        wasm_bindgen_futures::spawn_local(async move {
            let outcome = client
                .submit_pickup_request(&request)
                .await
                .map_err(PickupError::Transport)
                .and_then(PickupResponse::into_result);

            if let Err(e) = &outcome {
                log::error!("pickup request for listing {} failed: {}", request.food_id, e);
            }

            raise(card.try_update(|c| c.finish(outcome)).flatten());
        });
    };

    view! {
        <div class="request-card">
            <ListingCard
                listing=listing
                disabled=disabled
                body=move || {
                    let l = stored_listing.get_value();
                    let quantity = Signal::derive(move || card.with(|c| c.quantity.to_string()));
                    view! {
                        <div class="listing-details">
                            <ListingDetail label="Food" value=l.food_name.clone() />
                            <ListingDetail label="Quantity" value=quantity />
                            <ListingDetail label="Location" value=l.location.clone() highlight=true />
                            <ListingDetail label="Quality" value=l.quality.clone() highlight=true />
                        </div>
                        <PreviewImage url=l.img.clone() alt=l.food_name.clone() />
                    }
                }
                footer=move || {
                    let l = stored_listing.get_value();
                    let dietary_info = l.dietary_info.clone();
                    view! {
                        <div class="listing-dietary">
                            <Badge>
                                <span class="badge-icon icon-info" aria-hidden="true"></span>
                                {dietary_info}
                            </Badge>
                        </div>
                        <ExpiryDate listing=l />
                        <form
                            class="request-form"
                            on:submit=move |ev| {
                                ev.prevent_default();
                                submit();
                            }
                        >
                            <NumberInput
                                value=quantity_input
                                label="Quantity Required"
                                name="chosenQuantity"
                                disabled=input_locked
                            />
                            <Button
                                disabled=disabled
                                loading=submitting
                                on_click=Callback::new(move |_| submit())
                            >
                                "Request"
                            </Button>
                        </form>
                        {move || card.with(|c| c.success.clone()).map(|message| view! {
                            <Alert
                                severity=AlertSeverity::Success
                                message=message
                                on_close=Callback::new(move |_| card.update(|c| c.dismiss_success()))
                            />
                        })}
                        {move || card.with(|c| c.error.clone()).map(|message| view! {
                            <Alert
                                severity=AlertSeverity::Error
                                message=message
                                on_close=Callback::new(move |_| card.update(|c| c.dismiss_error()))
                            />
                        })}
                    }
                }
            />
            <LoadingOverlay open=submitting />
        </div>
    }
}
