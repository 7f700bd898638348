//! Pickup request form state for a single listing card.
//!
//! The card keeps its own copy of the displayed quantity. The listing it was
//! built from is never written to, so a failed request cannot corrupt it.

use shared::{Listing, PickupError, PickupRequest};

use crate::api::SessionState;

pub const SUCCESS_ALERT: &str = "Successfully Sent Request";
pub const FAILURE_ALERT: &str = "Couldn't make request";
pub const SUCCESS_TOAST: &str = "Request for Food submitted successfully";
pub const FAILURE_TOAST: &str = "Error while requesting for food";

/// Toast to raise after a submission settles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickupNotice {
    Success(&'static str),
    Error(&'static str),
}

pub fn parse_quantity(input: &str) -> Result<i64, PickupError> {
    input
        .trim()
        .parse::<i64>()
        .map_err(|_| PickupError::InvalidQuantity)
}

/// Build the request for `listing` on behalf of the signed-in user.
pub fn build_request(
    listing: &Listing,
    session: &SessionState,
    quantity_input: &str,
) -> Result<PickupRequest, PickupError> {
    let account = session.account().ok_or(PickupError::Unauthenticated)?;
    let quantity = parse_quantity(quantity_input)?;
    Ok(PickupRequest::new(listing, account, quantity))
}

#[derive(Debug, Clone, PartialEq)]
pub struct RequestCardState {
    pub quantity: i64,
    pub submitting: bool,
    pub success: Option<String>,
    pub error: Option<String>,
}

impl RequestCardState {
    pub fn new(listing: &Listing) -> Self {
        Self {
            quantity: listing.quantity,
            submitting: false,
            success: None,
            error: None,
        }
    }

    /// Returns false when a submission is already in flight.
    pub fn begin(&mut self) -> bool {
        if self.submitting {
            return false;
        }
        self.submitting = true;
        self.success = None;
        self.error = None;
        true
    }

    /// Settle the in-flight request with the service's answer.
    pub fn finish(&mut self, outcome: Result<Listing, PickupError>) -> Option<PickupNotice> {
        self.submitting = false;
        match outcome {
            Ok(updated) => {
                self.quantity = updated.quantity;
                self.success = Some(SUCCESS_ALERT.to_string());
                self.error = None;
                Some(PickupNotice::Success(SUCCESS_TOAST))
            }
            Err(e) => self.report(e),
        }
    }

    /// Report a request that was refused before being sent. An in-flight
    /// request is left alone.
    pub fn reject(&mut self, error: PickupError) -> Option<PickupNotice> {
        if self.submitting {
            return None;
        }
        self.report(error)
    }

    fn report(&mut self, error: PickupError) -> Option<PickupNotice> {
        self.success = None;
        match error {
            PickupError::InvalidQuantity => {
                self.error = Some(PickupError::InvalidQuantity.to_string());
                None
            }
            _ => {
                self.error = Some(FAILURE_ALERT.to_string());
                Some(PickupNotice::Error(FAILURE_TOAST))
            }
        }
    }

    pub fn dismiss_success(&mut self) {
        self.success = None;
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }
}
