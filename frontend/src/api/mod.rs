mod session;

pub use session::{Session, SessionState};

use gloo_net::http::Request;
use gloo_storage::{LocalStorage, Storage};
use serde::{de::DeserializeOwned, Serialize};
use shared::{Account, ApiError, ApiSuccess, DocumentList, Listing, PickupRequest, PickupResponse};

use crate::config::{AppConfig, TOKEN_KEY};

/// Client for the data-access service.
#[derive(Clone, Debug)]
pub struct ApiClient {
    config: AppConfig,
}

impl ApiClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    fn get_token() -> Option<String> {
        LocalStorage::get(TOKEN_KEY).ok()
    }

    async fn request<T: DeserializeOwned>(
        &self,
        method: &str,
        path: &str,
        body: Option<impl Serialize>,
        auth: bool,
    ) -> Result<T, String> {
        let url = self.config.url(path);

        let mut request = match method {
            "GET" => Request::get(&url),
            "POST" => Request::post(&url),
            _ => return Err("Invalid method".to_string()),
        };

        if auth {
            if let Some(token) = Self::get_token() {
                request = request.header("Authorization", &format!("Bearer {}", token));
            }
        }

        let response = if let Some(body) = body {
            request
                .header("Content-Type", "application/json")
                .json(&body)
                .map_err(|e| e.to_string())?
                .send()
                .await
                .map_err(|e| e.to_string())?
        } else {
            request.send().await.map_err(|e| e.to_string())?
        };

        if response.ok() {
            let result: ApiSuccess<T> = response.json().await.map_err(|e| e.to_string())?;
            Ok(result.data)
        } else {
            let error: ApiError = response.json().await.unwrap_or(ApiError {
                error: "unknown".to_string(),
                message: "An unknown error occurred".to_string(),
            });
            log::warn!("{} {} failed: {} ({})", method, path, error.message, error.error);
            Err(error.message)
        }
    }

    // Account endpoints
    pub async fn get_account(&self) -> Result<Account, String> {
        self.request::<Account>("GET", "/account", None::<()>, true).await
    }

    // Listing endpoints
    pub async fn get_all_listings(&self) -> Result<Vec<Listing>, String> {
        self.request::<DocumentList<Listing>>("GET", "/listings", None::<()>, false)
            .await
            .map(|list| list.documents)
    }

    pub async fn get_my_listings(&self) -> Result<Vec<Listing>, String> {
        self.request::<DocumentList<Listing>>("GET", "/listings/mine", None::<()>, true)
            .await
            .map(|list| list.documents)
    }

    // Pickup request endpoints
    pub async fn submit_pickup_request(&self, request: &PickupRequest) -> Result<PickupResponse, String> {
        self.request("POST", "/pickup-requests", Some(request), true).await
    }
}
