use crate::models::{HealthStatus, PredictionRequest, PredictionResponse};
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;
use validator::Validate;

/// Errors that can occur when talking to the estimator backend
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned status {0}")]
    Status(StatusCode),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    #[error("Invalid request: {0}")]
    Validation(#[from] validator::ValidationErrors),
}

/// Estimator API client
///
/// Wraps the backend endpoints used by the page:
/// - lookup lists for the dropdowns (`/suburbs`, `/types`)
/// - price prediction (`/predict`)
/// - health probe (`/health-check`)
#[derive(Debug, Clone)]
pub struct EstimatorApi {
    base_url: String,
    client: Client,
}

impl EstimatorApi {
    /// Create a new client rooted at `base_url` (e.g. `http://host/api`)
    ///
    /// `timeout` of `None` leaves requests unbounded.
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self, ApiError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            base_url: base_url.into(),
            client: builder.build()?,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Fetch the raw JSON payload of a lookup endpoint
    ///
    /// The payload shape is left to the caller since the backend may send
    /// either a bare array or an object wrapping one.
    pub async fn get_lookup(&self, endpoint: &str) -> Result<Value, ApiError> {
        let url = self.url(endpoint);

        tracing::debug!("Fetching lookup from: {}", url);

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(ApiError::Status(response.status()));
        }

        Ok(response.json().await?)
    }

    /// Submit a prediction request
    pub async fn predict(&self, request: &PredictionRequest) -> Result<PredictionResponse, ApiError> {
        request.validate()?;

        let url = self.url("predict");

        tracing::debug!("Posting prediction request to: {}", url);

        let response = self.client.post(&url).json(request).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_else(|_| "Unable to read body".to_string());
            tracing::debug!("Prediction rejected: {} - {}", status, body);
            return Err(ApiError::Status(status));
        }

        let json: Value = response.json().await?;

        serde_json::from_value(json)
            .map_err(|e| ApiError::InvalidResponse(format!("Failed to parse prediction: {}", e)))
    }

    /// Probe whether the backend has its model artifacts loaded
    pub async fn health_check(&self) -> Result<HealthStatus, ApiError> {
        let url = self.url("health-check");

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(ApiError::Status(response.status()));
        }

        let json: Value = response.json().await?;

        serde_json::from_value(json)
            .map_err(|e| ApiError::InvalidResponse(format!("Failed to parse health status: {}", e)))
    }
}
