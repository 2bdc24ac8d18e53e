use crate::core::form::{build_request, FormError};
use crate::core::view::PageView;
use crate::models::{FormData, PredictionResponse};
use crate::services::{ApiError, EstimatorApi};
use thiserror::Error;

/// Errors that can occur while handling a form submission
#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error("Invalid form: {0}")]
    Invalid(#[from] FormError),

    #[error("Prediction request failed: {0}")]
    Request(#[from] ApiError),
}

impl SubmissionError {
    pub fn user_message(&self) -> &'static str {
        match self {
            SubmissionError::Invalid(e) => e.user_message(),
            SubmissionError::Request(_) => "Failed to get prediction. Please try again.",
        }
    }
}

/// Render a price the way a browser prints a JSON number
///
/// Integral values carry no fractional part (`750000`), the rest use their
/// shortest decimal form (`750000.25`). Magnitudes of at least `1e21` or
/// below `1e-6` switch to exponent form (`1e+21`, `1e-7`).
pub fn format_price(price: f64) -> String {
    if price == 0.0 {
        "0".to_string()
    } else if price.is_nan() {
        "NaN".to_string()
    } else if price.is_infinite() {
        if price > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else if price.abs() >= 1e21 || price.abs() < 1e-6 {
        exponent_form(price)
    } else {
        price.to_string()
    }
}

// `{:e}` prints `1e21`; browsers print `1e+21`
fn exponent_form(price: f64) -> String {
    let formatted = format!("{:e}", price);
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => format!("{}e+{}", mantissa, exponent),
        _ => formatted,
    }
}

pub fn result_text(price: f64) -> String {
    format!("Predicted Price: ${}", format_price(price))
}

/// Validate, submit and render one prediction
///
/// Validation failures are alerted without touching the network. Request
/// failures are logged and alerted, leaving the previous result in place.
pub async fn handle_submission<V>(
    api: &EstimatorApi,
    form: &FormData,
    view: &mut V,
) -> Result<PredictionResponse, SubmissionError>
where
    V: PageView + ?Sized,
{
    let outcome = submit(api, form).await;

    match &outcome {
        Ok(response) => {
            tracing::info!("Predicted price: {}", response.predicted_price);
            view.show_result(&result_text(response.predicted_price));
        }
        Err(SubmissionError::Invalid(e)) => {
            tracing::debug!("Submission blocked: {}", e);
            view.alert(e.user_message());
        }
        Err(e @ SubmissionError::Request(_)) => {
            tracing::error!("Error making prediction: {}", e);
            view.alert(e.user_message());
        }
    }

    outcome
}

async fn submit(api: &EstimatorApi, form: &FormData) -> Result<PredictionResponse, SubmissionError> {
    let request = build_request(form)?;

    tracing::debug!(
        "Submitting prediction: suburb={}, type={}, rooms={}",
        request.suburb,
        request.property_type,
        request.rooms
    );

    Ok(api.predict(&request).await?)
}
