//! Donor management API service

use grantflow_http::types::{Donor, DonorPayload, Paginated};

use crate::client::gateway;

/// Donor management API service
#[derive(Clone)]
pub struct DonorApiService;

impl DonorApiService {
    /// Create a new donor API service
    pub fn new() -> Self {
        Self
    }

    /// List donors
    pub async fn list(&self) -> Result<Paginated<Donor>, String> {
        let gateway = gateway().map_err(|e| format!("Failed to get client: {e}"))?;
        gateway.list_donors().await.map_err(|e| e.to_string())
    }

    /// Fetch a single donor
    pub async fn get(&self, id: i64) -> Result<Donor, String> {
        let gateway = gateway().map_err(|e| format!("Failed to get client: {e}"))?;
        gateway.get_donor(id).await.map_err(|e| e.to_string())
    }

    /// Create a donor
    pub async fn create(&self, payload: DonorPayload) -> Result<Donor, String> {
        let gateway = gateway().map_err(|e| format!("Failed to get client: {e}"))?;
        gateway
            .create_donor(&payload)
            .await
            .map_err(|e| e.to_string())
    }

    /// Update a donor
    pub async fn update(&self, id: i64, payload: DonorPayload) -> Result<Donor, String> {
        let gateway = gateway().map_err(|e| format!("Failed to get client: {e}"))?;
        gateway
            .update_donor(id, &payload)
            .await
            .map_err(|e| e.to_string())
    }

    /// Delete a donor
    pub async fn delete(&self, id: i64) -> Result<(), String> {
        let gateway = gateway().map_err(|e| format!("Failed to get client: {e}"))?;
        gateway.delete_donor(id).await.map_err(|e| e.to_string())
    }
}

impl Default for DonorApiService {
    fn default() -> Self {
        Self::new()
    }
}
