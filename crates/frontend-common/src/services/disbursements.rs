//! Disbursement API service

use grantflow_http::types::{Disbursement, DisbursementPayload, Paginated};

use crate::client::gateway;

/// Disbursement API service
#[derive(Clone)]
pub struct DisbursementApiService;

impl DisbursementApiService {
    /// Create a new disbursement API service
    pub fn new() -> Self {
        Self
    }

    /// List all disbursements
    pub async fn list(&self) -> Result<Paginated<Disbursement>, String> {
        let gateway = gateway().map_err(|e| format!("Failed to get client: {e}"))?;
        gateway
            .list_disbursements()
            .await
            .map_err(|e| e.to_string())
    }

    /// List disbursements released against one application
    pub async fn list_for_application(
        &self,
        application: i64,
    ) -> Result<Paginated<Disbursement>, String> {
        let gateway = gateway().map_err(|e| format!("Failed to get client: {e}"))?;
        gateway
            .list_application_disbursements(application)
            .await
            .map_err(|e| e.to_string())
    }

    /// Record a disbursement; eligibility is enforced server-side
    pub async fn create(&self, payload: DisbursementPayload) -> Result<Disbursement, String> {
        let gateway = gateway().map_err(|e| format!("Failed to get client: {e}"))?;
        gateway
            .create_disbursement(&payload)
            .await
            .map_err(|e| e.to_string())
    }
}

impl Default for DisbursementApiService {
    fn default() -> Self {
        Self::new()
    }
}
