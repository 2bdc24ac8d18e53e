use serde::Deserialize;

/// Response of the predict endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct PredictionResponse {
    pub predicted_price: f64,
}

/// Response of the health-check endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
}

impl HealthStatus {
    /// The backend reports "OK" once its model artifacts are loaded
    pub fn is_ok(&self) -> bool {
        self.status.eq_ignore_ascii_case("ok")
    }
}
