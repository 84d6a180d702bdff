//! Application review API service

use grantflow_http::types::{Paginated, Review, ReviewPayload};

use crate::client::gateway;

/// Application review API service
#[derive(Clone)]
pub struct ReviewApiService;

impl ReviewApiService {
    /// Create a new review API service
    pub fn new() -> Self {
        Self
    }

    /// List reviews filed against an application
    pub async fn list(&self, application: i64) -> Result<Paginated<Review>, String> {
        let gateway = gateway().map_err(|e| format!("Failed to get client: {e}"))?;
        gateway
            .list_reviews(application)
            .await
            .map_err(|e| e.to_string())
    }

    /// File a review with scores and a recommendation
    pub async fn create(&self, application: i64, payload: ReviewPayload) -> Result<Review, String> {
        let gateway = gateway().map_err(|e| format!("Failed to get client: {e}"))?;
        gateway
            .create_review(application, &payload)
            .await
            .map_err(|e| e.to_string())
    }
}

impl Default for ReviewApiService {
    fn default() -> Self {
        Self::new()
    }
}
