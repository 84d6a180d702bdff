//! Request and response types for the grants API
//!
//! Monetary amounts travel as decimal strings; budget arithmetic is owned by
//! the server and never reproduced client-side.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Cached profile fields returned at login
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub user_id: i64,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organisation_name: Option<String>,
    /// Server-side role name, e.g. "admin" or "subgrantee"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// Login request
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Login response; both tokens are issued together
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access: String,
    pub refresh: String,
    pub user: UserProfile,
}

/// Token refresh request
#[derive(Debug, Serialize, Deserialize)]
pub struct RefreshRequest {
    pub refresh: String,
}

/// Token refresh response; the refresh token is not rotated client-side
#[derive(Debug, Serialize, Deserialize)]
pub struct RefreshResponse {
    pub access: String,
}

/// Paginated list envelope used by every collection endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub count: u64,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<T>,
}

/// Donor funding one or more grant types
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Donor {
    pub id: i64,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    pub active: bool,
}

/// Payload for creating or updating a donor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DonorPayload {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

/// Grant type offered under a donor's programme
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrantType {
    pub id: i64,
    pub donor: i64,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Ceiling for a single award, as a decimal string
    pub max_amount: String,
    pub duration_months: u32,
}

/// Payload for creating or updating a grant type
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrantTypePayload {
    pub donor: i64,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub max_amount: String,
    pub duration_months: u32,
}

/// Application workflow states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    Draft,
    Submitted,
    UnderReview,
    Approved,
    Rejected,
    Closed,
}

impl ApplicationStatus {
    /// Wire name, as used in query-string filters
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Submitted => "submitted",
            Self::UnderReview => "under_review",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
            Self::Closed => "closed",
        }
    }
}

/// Grant application
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrantApplication {
    pub id: i64,
    pub grant_type: i64,
    pub organisation_name: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    pub requested_amount: String,
    pub status: ApplicationStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submitted_at: Option<DateTime<Utc>>,
}

/// Payload for creating or updating an application draft
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationPayload {
    pub grant_type: i64,
    pub organisation_name: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    pub requested_amount: String,
}

/// Reviewer recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewRecommendation {
    Approve,
    Reject,
    Revise,
}

/// Scored review of an application
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: i64,
    pub application: i64,
    pub reviewer: i64,
    /// Aggregate score assigned server-side from the scoring rubric
    pub score: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
    pub recommendation: ReviewRecommendation,
    pub created_at: DateTime<Utc>,
}

/// Payload for submitting a review
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewPayload {
    pub score: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
    pub recommendation: ReviewRecommendation,
}

/// Funds released against an approved application
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Disbursement {
    pub id: i64,
    pub application: i64,
    pub amount: String,
    pub currency: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    pub disbursed_at: DateTime<Utc>,
}

/// Payload for recording a disbursement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisbursementPayload {
    pub application: i64,
    pub amount: String,
    pub currency: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
}

/// Report workflow states; transitions are decided server-side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    Draft,
    Submitted,
    Accepted,
    ReturnedForRevision,
}

/// Narrative progress report for a reporting period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressReport {
    pub id: i64,
    pub application: i64,
    pub period_start: NaiveDate,
    pub period_end: NaiveDate,
    pub narrative: String,
    pub status: ReportStatus,
}

/// Payload for filing a progress report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressReportPayload {
    pub application: i64,
    pub period_start: NaiveDate,
    pub period_end: NaiveDate,
    pub narrative: String,
}

/// Financial report for a reporting period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialReport {
    pub id: i64,
    pub application: i64,
    pub period_start: NaiveDate,
    pub period_end: NaiveDate,
    pub amount_spent: String,
    /// Remaining balance as computed by the server
    pub balance: String,
    pub status: ReportStatus,
}

/// Payload for filing a financial report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinancialReportPayload {
    pub application: i64,
    pub period_start: NaiveDate,
    pub period_end: NaiveDate,
    pub amount_spent: String,
}

/// Closeout request states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CloseoutStatus {
    Requested,
    Approved,
    Declined,
}

/// Request to close out a completed grant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CloseoutRequest {
    pub id: i64,
    pub application: i64,
    pub reason: String,
    pub status: CloseoutStatus,
    pub requested_at: DateTime<Utc>,
}

/// Payload for requesting closeout
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CloseoutPayload {
    pub reason: String,
}

/// Subgrantee organisation profile captured at intake
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubgranteeProfile {
    pub organisation_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registration_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_person: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}
