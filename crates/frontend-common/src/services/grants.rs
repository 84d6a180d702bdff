//! Grant type and application API service

use grantflow_http::types::{
    ApplicationPayload, ApplicationStatus, CloseoutPayload, CloseoutRequest, GrantApplication,
    GrantType, GrantTypePayload, Paginated,
};

use crate::client::gateway;

/// Grant type and application API service
#[derive(Clone)]
pub struct GrantApiService;

impl GrantApiService {
    /// Create a new grant API service
    pub fn new() -> Self {
        Self
    }

    /// List grant types
    pub async fn list_grant_types(&self) -> Result<Paginated<GrantType>, String> {
        let gateway = gateway().map_err(|e| format!("Failed to get client: {e}"))?;
        gateway.list_grant_types().await.map_err(|e| e.to_string())
    }

    /// Create a grant type
    pub async fn create_grant_type(&self, payload: GrantTypePayload) -> Result<GrantType, String> {
        let gateway = gateway().map_err(|e| format!("Failed to get client: {e}"))?;
        gateway
            .create_grant_type(&payload)
            .await
            .map_err(|e| e.to_string())
    }

    /// Update a grant type
    pub async fn update_grant_type(
        &self,
        id: i64,
        payload: GrantTypePayload,
    ) -> Result<GrantType, String> {
        let gateway = gateway().map_err(|e| format!("Failed to get client: {e}"))?;
        gateway
            .update_grant_type(id, &payload)
            .await
            .map_err(|e| e.to_string())
    }

    /// Delete a grant type
    pub async fn delete_grant_type(&self, id: i64) -> Result<(), String> {
        let gateway = gateway().map_err(|e| format!("Failed to get client: {e}"))?;
        gateway
            .delete_grant_type(id)
            .await
            .map_err(|e| e.to_string())
    }

    /// List applications, optionally filtered by workflow status
    pub async fn list_applications(
        &self,
        status: Option<ApplicationStatus>,
    ) -> Result<Paginated<GrantApplication>, String> {
        let gateway = gateway().map_err(|e| format!("Failed to get client: {e}"))?;
        gateway
            .list_applications(status)
            .await
            .map_err(|e| e.to_string())
    }

    /// Fetch a single application
    pub async fn get_application(&self, id: i64) -> Result<GrantApplication, String> {
        let gateway = gateway().map_err(|e| format!("Failed to get client: {e}"))?;
        gateway.get_application(id).await.map_err(|e| e.to_string())
    }

    /// Create an application draft
    pub async fn create_application(
        &self,
        payload: ApplicationPayload,
    ) -> Result<GrantApplication, String> {
        let gateway = gateway().map_err(|e| format!("Failed to get client: {e}"))?;
        gateway
            .create_application(&payload)
            .await
            .map_err(|e| e.to_string())
    }

    /// Update an application draft
    pub async fn update_application(
        &self,
        id: i64,
        payload: ApplicationPayload,
    ) -> Result<GrantApplication, String> {
        let gateway = gateway().map_err(|e| format!("Failed to get client: {e}"))?;
        gateway
            .update_application(id, &payload)
            .await
            .map_err(|e| e.to_string())
    }

    /// Submit a draft for review
    pub async fn submit_application(&self, id: i64) -> Result<GrantApplication, String> {
        let gateway = gateway().map_err(|e| format!("Failed to get client: {e}"))?;
        gateway
            .submit_application(id)
            .await
            .map_err(|e| e.to_string())
    }

    /// List closeout requests for an application
    pub async fn list_closeout_requests(
        &self,
        application: i64,
    ) -> Result<Paginated<CloseoutRequest>, String> {
        let gateway = gateway().map_err(|e| format!("Failed to get client: {e}"))?;
        gateway
            .list_closeout_requests(application)
            .await
            .map_err(|e| e.to_string())
    }

    /// Request closeout of a completed grant
    pub async fn request_closeout(
        &self,
        application: i64,
        payload: CloseoutPayload,
    ) -> Result<CloseoutRequest, String> {
        let gateway = gateway().map_err(|e| format!("Failed to get client: {e}"))?;
        gateway
            .request_closeout(application, &payload)
            .await
            .map_err(|e| e.to_string())
    }
}

impl Default for GrantApiService {
    fn default() -> Self {
        Self::new()
    }
}
