//! Subgrantee profile intake API service

use grantflow_http::types::SubgranteeProfile;

use crate::client::gateway;

/// Subgrantee profile intake API service
#[derive(Clone)]
pub struct SubgranteeApiService;

impl SubgranteeApiService {
    /// Create a new subgrantee API service
    pub fn new() -> Self {
        Self
    }

    /// Fetch the calling organisation's profile
    pub async fn get_profile(&self) -> Result<SubgranteeProfile, String> {
        let gateway = gateway().map_err(|e| format!("Failed to get client: {e}"))?;
        gateway
            .get_subgrantee_profile()
            .await
            .map_err(|e| e.to_string())
    }

    /// Create or replace the calling organisation's profile
    pub async fn save_profile(&self, profile: SubgranteeProfile) -> Result<SubgranteeProfile, String> {
        let gateway = gateway().map_err(|e| format!("Failed to get client: {e}"))?;
        gateway
            .upsert_subgrantee_profile(&profile)
            .await
            .map_err(|e| e.to_string())
    }
}

impl Default for SubgranteeApiService {
    fn default() -> Self {
        Self::new()
    }
}
