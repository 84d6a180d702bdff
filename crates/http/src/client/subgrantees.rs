//! Subgrantee profile intake client methods

use super::gateway::AuthGateway;
use crate::error::ApiError;
use crate::types::SubgranteeProfile;

impl AuthGateway {
    /// Fetch the calling organisation's profile
    pub async fn get_subgrantee_profile(&self) -> Result<SubgranteeProfile, ApiError> {
        self.get("/api/subgrantees/profiles/").await
    }

    /// Create or replace the calling organisation's profile
    pub async fn upsert_subgrantee_profile(
        &self,
        profile: &SubgranteeProfile,
    ) -> Result<SubgranteeProfile, ApiError> {
        self.put_json("/api/subgrantees/profiles/", profile).await
    }
}
