// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio, solo hace requests HTTP. Los viewmodels
// dependen del trait `BloodBankApi` para poder probarse sin navegador.
// ============================================================================

use gloo_net::http::{Request, Response};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::config::CONFIG;
use crate::models::{
    DonorLoginResponse, DonorRegistration, HospitalRegistration, LoginRequest, NewBloodRequest,
};
use crate::utils::constants::*;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),

    #[error("HTTP {status}: {message}")]
    Rejected { status: u16, message: String },

    #[error("parse error: {0}")]
    Parse(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

impl ApiError {
    /// True when the backend answered with a non-2xx status
    pub fn is_rejection(&self) -> bool {
        matches!(self, ApiError::Rejected { .. })
    }
}

/// Backend surface consumed by the forms and dashboards
#[allow(async_fn_in_trait)]
pub trait BloodBankApi {
    async fn register_donor(&self, registration: &DonorRegistration) -> Result<(), ApiError>;

    async fn login_donor(&self, credentials: &LoginRequest) -> Result<DonorLoginResponse, ApiError>;

    /// Returns the response body untouched
    async fn register_hospital(&self, registration: &HospitalRegistration) -> Result<Value, ApiError>;

    async fn login_hospital(&self, credentials: &LoginRequest) -> Result<Value, ApiError>;

    async fn submit_blood_request(
        &self,
        token: Option<&str>,
        request: &NewBloodRequest,
    ) -> Result<(), ApiError>;
}

#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_base_url(CONFIG.backend_url())
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    async fn post_json<B: Serialize>(
        &self,
        endpoint: &str,
        body: &B,
        token: Option<&str>,
    ) -> Result<Response, ApiError> {
        let url = self.url(endpoint);
        let mut builder = Request::post(&url);
        if let Some(token) = token {
            builder = builder.header("Authorization", &format!("Bearer {}", token));
        }

        let response = builder
            .json(body)
            .map_err(|e| ApiError::Serialization(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            let status = response.status();
            log::warn!("⚠️ [API] POST {} -> HTTP {}", endpoint, status);
            return Err(ApiError::Rejected {
                status,
                message: response.status_text(),
            });
        }

        log::info!("✅ [API] POST {} -> HTTP {}", endpoint, response.status());
        Ok(response)
    }
}

impl BloodBankApi for ApiClient {
    async fn register_donor(&self, registration: &DonorRegistration) -> Result<(), ApiError> {
        log::info!("📝 [API] Registering donor {}", registration.email);
        self.post_json(ENDPOINT_DONOR_REGISTER, registration, None)
            .await
            .map(|_| ())
    }

    async fn login_donor(&self, credentials: &LoginRequest) -> Result<DonorLoginResponse, ApiError> {
        log::info!("🔐 [API] Donor login for {}", credentials.email);
        self.post_json(ENDPOINT_DONOR_LOGIN, credentials, None)
            .await?
            .json::<DonorLoginResponse>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }

    async fn register_hospital(&self, registration: &HospitalRegistration) -> Result<Value, ApiError> {
        log::info!("🏥 [API] Registering hospital {}", registration.name);
        self.post_json(ENDPOINT_HOSPITAL_REGISTER, registration, None)
            .await?
            .json::<Value>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }

    async fn login_hospital(&self, credentials: &LoginRequest) -> Result<Value, ApiError> {
        log::info!("🔐 [API] Hospital login for {}", credentials.email);
        self.post_json(ENDPOINT_HOSPITAL_LOGIN, credentials, None)
            .await?
            .json::<Value>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }

    async fn submit_blood_request(
        &self,
        token: Option<&str>,
        request: &NewBloodRequest,
    ) -> Result<(), ApiError> {
        if token.is_none() {
            log::warn!("⚠️ [API] Blood request without a hospital token");
        }
        log::info!("🩸 [API] Requesting {} units of {}", request.quantity, request.blood_group);
        self.post_json(ENDPOINT_BLOOD_REQUESTS, request, token)
            .await
            .map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_join_without_double_slash() {
        let client = ApiClient::with_base_url("http://localhost:8000/");
        assert_eq!(client.url(ENDPOINT_DONOR_LOGIN), "http://localhost:8000/donor/login");
        assert_eq!(client.url(ENDPOINT_BLOOD_REQUESTS), "http://localhost:8000/requests/donors");
    }

    #[test]
    fn only_http_failures_are_rejections() {
        assert!(ApiError::Rejected { status: 401, message: "Unauthorized".into() }.is_rejection());
        assert!(!ApiError::Network("offline".into()).is_rejection());
        assert!(!ApiError::Parse("eof".into()).is_rejection());
    }
}
