//! Reporting API client methods

use super::gateway::AuthGateway;
use crate::error::ApiError;
use crate::types::{
    FinancialReport, FinancialReportPayload, Paginated, ProgressReport, ProgressReportPayload,
};

impl AuthGateway {
    /// List progress reports, optionally scoped to one application
    pub async fn list_progress_reports(
        &self,
        application: Option<i64>,
    ) -> Result<Paginated<ProgressReport>, ApiError> {
        let path = match application {
            Some(id) => format!("/api/grants/reports/progress/?application={id}"),
            None => "/api/grants/reports/progress/".to_string(),
        };
        self.get(&path).await
    }

    /// File a progress report
    pub async fn create_progress_report(
        &self,
        payload: &ProgressReportPayload,
    ) -> Result<ProgressReport, ApiError> {
        self.post_json("/api/grants/reports/progress/", payload)
            .await
    }

    /// Update a progress report still in draft
    pub async fn update_progress_report(
        &self,
        id: i64,
        payload: &ProgressReportPayload,
    ) -> Result<ProgressReport, ApiError> {
        self.put_json(&format!("/api/grants/reports/progress/{id}/"), payload)
            .await
    }

    /// List financial reports, optionally scoped to one application
    pub async fn list_financial_reports(
        &self,
        application: Option<i64>,
    ) -> Result<Paginated<FinancialReport>, ApiError> {
        let path = match application {
            Some(id) => format!("/api/grants/reports/financial/?application={id}"),
            None => "/api/grants/reports/financial/".to_string(),
        };
        self.get(&path).await
    }

    /// File a financial report; spend totals are validated server-side
    pub async fn create_financial_report(
        &self,
        payload: &FinancialReportPayload,
    ) -> Result<FinancialReport, ApiError> {
        self.post_json("/api/grants/reports/financial/", payload)
            .await
    }

    /// Update a financial report still in draft
    pub async fn update_financial_report(
        &self,
        id: i64,
        payload: &FinancialReportPayload,
    ) -> Result<FinancialReport, ApiError> {
        self.put_json(&format!("/api/grants/reports/financial/{id}/"), payload)
            .await
    }
}
