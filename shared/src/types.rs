use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// Account Types
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    #[serde(rename = "$id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub email: String,
}

// ============================================================================
// Listing Types
// ============================================================================

/// A food donation available for pickup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    #[serde(rename = "$id")]
    pub id: String,
    pub food_name: String,
    pub quantity: i64,
    pub location: String,
    pub quality: String,
    #[serde(default)]
    pub dietary_info: String,
    pub expiry_date: NaiveDate,
    #[serde(default)]
    pub img: Option<String>,
    #[serde(default)]
    pub is_expired: bool,
    /// Email of the donor who posted the listing.
    #[serde(rename = "postedBy")]
    pub owner: String,
}

/// Collection envelope returned by the listing endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentList<T> {
    #[serde(default)]
    pub total: u64,
    pub documents: Vec<T>,
}

// ============================================================================
// Pickup Request Types
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    #[default]
    Pending,
    Accepted,
    Rejected,
    Completed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PickupRequest {
    pub food_id: String,
    pub requested_by: String,
    pub chosen_quantity: i64,
    pub status: RequestStatus,
}

impl PickupRequest {
    /// New requests always start out pending.
    pub fn new(listing: &Listing, requested_by: &Account, chosen_quantity: i64) -> Self {
        Self {
            food_id: listing.id.clone(),
            requested_by: requested_by.email.clone(),
            chosen_quantity,
            status: RequestStatus::Pending,
        }
    }
}

/// Acknowledgement of a pickup request. `data` carries the listing as it
/// stands after the request was recorded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PickupResponse {
    pub status: bool,
    #[serde(default)]
    pub data: Option<Listing>,
}

impl PickupResponse {
    pub fn into_result(self) -> Result<Listing, PickupError> {
        if !self.status {
            return Err(PickupError::Rejected);
        }
        self.data.ok_or(PickupError::MissingListing)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PickupError {
    #[error("you need to be logged in to request food")]
    Unauthenticated,
    #[error("quantity must be a whole number")]
    InvalidQuantity,
    #[error("the request was not accepted")]
    Rejected,
    #[error("the acknowledgement did not include the listing")]
    MissingListing,
    #[error("{0}")]
    Transport(String),
}

// ============================================================================
// API Response Types
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiSuccess<T> {
    pub data: T,
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(quantity: i64) -> Listing {
        Listing {
            id: "food-1".to_string(),
            food_name: "Rice".to_string(),
            quantity,
            location: "Hall B".to_string(),
            quality: "Good".to_string(),
            dietary_info: "Vegan".to_string(),
            expiry_date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            img: None,
            is_expired: false,
            owner: "donor@example.com".to_string(),
        }
    }

    fn account() -> Account {
        Account {
            id: "user-1".to_string(),
            name: "Sam".to_string(),
            email: "sam@example.com".to_string(),
        }
    }

    #[test]
    fn test_listing_deserializes_document() {
        let json = r#"{
            "$id": "64a1",
            "foodName": "Bread",
            "quantity": 12,
            "location": "Main St",
            "quality": "Fresh",
            "dietaryInfo": "Vegetarian",
            "expiryDate": "2024-03-10",
            "img": "https://cdn.example.com/bread.png",
            "isExpired": true,
            "postedBy": "donor@example.com"
        }"#;
        let listing: Listing = serde_json::from_str(json).unwrap();
        assert_eq!(listing.id, "64a1");
        assert_eq!(listing.food_name, "Bread");
        assert_eq!(listing.quantity, 12);
        assert_eq!(listing.expiry_date, NaiveDate::from_ymd_opt(2024, 3, 10).unwrap());
        assert!(listing.is_expired);
        assert_eq!(listing.owner, "donor@example.com");
    }

    #[test]
    fn test_listing_optional_fields_default() {
        let json = r#"{
            "$id": "64a2",
            "foodName": "Soup",
            "quantity": 3,
            "location": "Depot",
            "quality": "Good",
            "expiryDate": "2024-03-11",
            "postedBy": "donor@example.com"
        }"#;
        let listing: Listing = serde_json::from_str(json).unwrap();
        assert_eq!(listing.img, None);
        assert_eq!(listing.dietary_info, "");
        assert!(!listing.is_expired);
    }

    #[test]
    fn test_pickup_request_starts_pending() {
        let request = PickupRequest::new(&listing(5), &account(), 2);
        assert_eq!(request.food_id, "food-1");
        assert_eq!(request.requested_by, "sam@example.com");
        assert_eq!(request.chosen_quantity, 2);
        assert_eq!(request.status, RequestStatus::Pending);
    }

    #[test]
    fn test_pickup_request_wire_format() {
        let request = PickupRequest::new(&listing(5), &account(), 2);
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["foodId"], "food-1");
        assert_eq!(value["requestedBy"], "sam@example.com");
        assert_eq!(value["chosenQuantity"], 2);
        assert_eq!(value["status"], "pending");
    }

    #[test]
    fn test_request_status_wire_names() {
        let status: RequestStatus = serde_json::from_str(r#""accepted""#).unwrap();
        assert_eq!(status, RequestStatus::Accepted);
        assert_eq!(serde_json::to_value(RequestStatus::Completed).unwrap(), "completed");
        assert!(serde_json::from_str::<RequestStatus>(r#""shipped""#).is_err());
    }

    #[test]
    fn test_pickup_response_success() {
        let response = PickupResponse {
            status: true,
            data: Some(listing(3)),
        };
        assert_eq!(response.into_result().unwrap().quantity, 3);
    }

    #[test]
    fn test_pickup_response_rejected_ignores_payload() {
        let response = PickupResponse {
            status: false,
            data: Some(listing(0)),
        };
        assert_eq!(response.into_result(), Err(PickupError::Rejected));
    }

    #[test]
    fn test_pickup_response_missing_listing() {
        let response: PickupResponse = serde_json::from_str(r#"{"status": true}"#).unwrap();
        assert_eq!(response.into_result(), Err(PickupError::MissingListing));
    }

    #[test]
    fn test_document_list_total() {
        let list: DocumentList<Listing> = serde_json::from_value(serde_json::json!({
            "total": 2,
            "documents": [listing(1), listing(2)],
        }))
        .unwrap();
        assert_eq!(list.total, 2);
        assert_eq!(list.documents[1].quantity, 2);

        let parsed: DocumentList<Listing> = serde_json::from_str(r#"{"documents": []}"#).unwrap();
        assert_eq!(parsed.total, 0);
        assert!(parsed.documents.is_empty());
    }

    #[test]
    fn test_api_success_wrapper() {
        let success: ApiSuccess<Account> = serde_json::from_str(
            r#"{"data": {"$id": "user-1", "name": "Sam", "email": "sam@example.com"}}"#,
        )
        .unwrap();
        assert_eq!(success.data, account());
    }

    #[test]
    fn test_pickup_error_messages() {
        assert_eq!(
            PickupError::Transport("connection refused".to_string()).to_string(),
            "connection refused"
        );
        assert_eq!(
            PickupError::InvalidQuantity.to_string(),
            "quantity must be a whole number"
        );
    }
}
