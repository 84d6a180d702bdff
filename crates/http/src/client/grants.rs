//! Grants API client methods: donors, grant types, applications, reviews,
//! disbursements, and closeout

use super::gateway::AuthGateway;
use crate::error::ApiError;
use crate::types::{
    ApplicationPayload, ApplicationStatus, CloseoutPayload, CloseoutRequest, Disbursement,
    DisbursementPayload, Donor, DonorPayload, GrantApplication, GrantType, GrantTypePayload,
    Paginated, Review, ReviewPayload,
};

impl AuthGateway {
    /// List donors
    pub async fn list_donors(&self) -> Result<Paginated<Donor>, ApiError> {
        self.get("/api/grants/donors/").await
    }

    /// Fetch a single donor
    pub async fn get_donor(&self, id: i64) -> Result<Donor, ApiError> {
        self.get(&format!("/api/grants/donors/{id}/")).await
    }

    /// Create a donor
    pub async fn create_donor(&self, payload: &DonorPayload) -> Result<Donor, ApiError> {
        self.post_json("/api/grants/donors/", payload).await
    }

    /// Update a donor
    pub async fn update_donor(&self, id: i64, payload: &DonorPayload) -> Result<Donor, ApiError> {
        self.put_json(&format!("/api/grants/donors/{id}/"), payload)
            .await
    }

    /// Delete a donor
    pub async fn delete_donor(&self, id: i64) -> Result<(), ApiError> {
        self.delete(&format!("/api/grants/donors/{id}/")).await
    }

    /// List grant types
    pub async fn list_grant_types(&self) -> Result<Paginated<GrantType>, ApiError> {
        self.get("/api/grants/grant-types/").await
    }

    /// Create a grant type
    pub async fn create_grant_type(
        &self,
        payload: &GrantTypePayload,
    ) -> Result<GrantType, ApiError> {
        self.post_json("/api/grants/grant-types/", payload).await
    }

    /// Update a grant type
    pub async fn update_grant_type(
        &self,
        id: i64,
        payload: &GrantTypePayload,
    ) -> Result<GrantType, ApiError> {
        self.put_json(&format!("/api/grants/grant-types/{id}/"), payload)
            .await
    }

    /// Delete a grant type
    pub async fn delete_grant_type(&self, id: i64) -> Result<(), ApiError> {
        self.delete(&format!("/api/grants/grant-types/{id}/")).await
    }

    /// List applications, optionally filtered by workflow status
    pub async fn list_applications(
        &self,
        status: Option<ApplicationStatus>,
    ) -> Result<Paginated<GrantApplication>, ApiError> {
        let path = match status {
            Some(status) => format!("/api/grants/applications/?status={}", status.as_str()),
            None => "/api/grants/applications/".to_string(),
        };
        self.get(&path).await
    }

    /// Fetch a single application
    pub async fn get_application(&self, id: i64) -> Result<GrantApplication, ApiError> {
        self.get(&format!("/api/grants/applications/{id}/")).await
    }

    /// Create an application draft
    pub async fn create_application(
        &self,
        payload: &ApplicationPayload,
    ) -> Result<GrantApplication, ApiError> {
        self.post_json("/api/grants/applications/", payload).await
    }

    /// Update an application draft
    pub async fn update_application(
        &self,
        id: i64,
        payload: &ApplicationPayload,
    ) -> Result<GrantApplication, ApiError> {
        self.put_json(&format!("/api/grants/applications/{id}/"), payload)
            .await
    }

    /// Submit a draft for review; the server owns the status transition
    pub async fn submit_application(&self, id: i64) -> Result<GrantApplication, ApiError> {
        self.execute(
            &format!("/api/grants/applications/{id}/submit/"),
            super::RequestOptions::method(reqwest::Method::POST),
        )
        .await
    }

    /// List reviews filed against an application
    pub async fn list_reviews(&self, application: i64) -> Result<Paginated<Review>, ApiError> {
        self.get(&format!("/api/grants/applications/{application}/reviews/"))
            .await
    }

    /// File a review
    pub async fn create_review(
        &self,
        application: i64,
        payload: &ReviewPayload,
    ) -> Result<Review, ApiError> {
        self.post_json(
            &format!("/api/grants/applications/{application}/reviews/"),
            payload,
        )
        .await
    }

    /// List all disbursements
    pub async fn list_disbursements(&self) -> Result<Paginated<Disbursement>, ApiError> {
        self.get("/api/grants/disbursements/").await
    }

    /// List disbursements released against one application
    pub async fn list_application_disbursements(
        &self,
        application: i64,
    ) -> Result<Paginated<Disbursement>, ApiError> {
        self.get(&format!(
            "/api/grants/disbursements/?application={application}"
        ))
        .await
    }

    /// Record a disbursement
    pub async fn create_disbursement(
        &self,
        payload: &DisbursementPayload,
    ) -> Result<Disbursement, ApiError> {
        self.post_json("/api/grants/disbursements/", payload).await
    }

    /// List closeout requests for an application
    pub async fn list_closeout_requests(
        &self,
        application: i64,
    ) -> Result<Paginated<CloseoutRequest>, ApiError> {
        self.get(&format!("/api/grants/applications/{application}/closeout/"))
            .await
    }

    /// Request closeout of a completed grant
    pub async fn request_closeout(
        &self,
        application: i64,
        payload: &CloseoutPayload,
    ) -> Result<CloseoutRequest, ApiError> {
        self.post_json(
            &format!("/api/grants/applications/{application}/closeout/"),
            payload,
        )
        .await
    }
}
