//! Progress and financial reporting API service

use grantflow_http::types::{
    FinancialReport, FinancialReportPayload, Paginated, ProgressReport, ProgressReportPayload,
};

use crate::client::gateway;

/// Progress and financial reporting API service
#[derive(Clone)]
pub struct ReportApiService;

impl ReportApiService {
    /// Create a new report API service
    pub fn new() -> Self {
        Self
    }

    /// List progress reports, optionally scoped to one application
    pub async fn list_progress(
        &self,
        application: Option<i64>,
    ) -> Result<Paginated<ProgressReport>, String> {
        let gateway = gateway().map_err(|e| format!("Failed to get client: {e}"))?;
        gateway
            .list_progress_reports(application)
            .await
            .map_err(|e| e.to_string())
    }

    /// File a progress report
    pub async fn create_progress(
        &self,
        payload: ProgressReportPayload,
    ) -> Result<ProgressReport, String> {
        let gateway = gateway().map_err(|e| format!("Failed to get client: {e}"))?;
        gateway
            .create_progress_report(&payload)
            .await
            .map_err(|e| e.to_string())
    }

    /// Update a progress report still in draft
    pub async fn update_progress(
        &self,
        id: i64,
        payload: ProgressReportPayload,
    ) -> Result<ProgressReport, String> {
        let gateway = gateway().map_err(|e| format!("Failed to get client: {e}"))?;
        gateway
            .update_progress_report(id, &payload)
            .await
            .map_err(|e| e.to_string())
    }

    /// List financial reports, optionally scoped to one application
    pub async fn list_financial(
        &self,
        application: Option<i64>,
    ) -> Result<Paginated<FinancialReport>, String> {
        let gateway = gateway().map_err(|e| format!("Failed to get client: {e}"))?;
        gateway
            .list_financial_reports(application)
            .await
            .map_err(|e| e.to_string())
    }

    /// File a financial report
    pub async fn create_financial(
        &self,
        payload: FinancialReportPayload,
    ) -> Result<FinancialReport, String> {
        let gateway = gateway().map_err(|e| format!("Failed to get client: {e}"))?;
        gateway
            .create_financial_report(&payload)
            .await
            .map_err(|e| e.to_string())
    }

    /// Update a financial report still in draft
    pub async fn update_financial(
        &self,
        id: i64,
        payload: FinancialReportPayload,
    ) -> Result<FinancialReport, String> {
        let gateway = gateway().map_err(|e| format!("Failed to get client: {e}"))?;
        gateway
            .update_financial_report(id, &payload)
            .await
            .map_err(|e| e.to_string())
    }
}

impl Default for ReportApiService {
    fn default() -> Self {
        Self::new()
    }
}
