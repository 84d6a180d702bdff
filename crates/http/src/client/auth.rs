//! Authentication API client methods

use super::{ApiError, PortalClient};
use crate::types::{LoginRequest, LoginResponse};

impl PortalClient {
    /// Log in to the self-service portal; the server issues both tokens
    pub async fn login(&self, email: String, password: String) -> Result<LoginResponse, ApiError> {
        let req = self
            .request(reqwest::Method::POST, "/api/authentication/login/")
            .json(&LoginRequest { email, password });
        self.execute(req).await
    }

    /// Log in to the admin area
    pub async fn admin_login(
        &self,
        email: String,
        password: String,
    ) -> Result<LoginResponse, ApiError> {
        let req = self
            .request(reqwest::Method::POST, "/api/authentication/admin/login/")
            .json(&LoginRequest { email, password });
        self.execute(req).await
    }
}
