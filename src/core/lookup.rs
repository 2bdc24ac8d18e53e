use crate::core::view::PageView;
use crate::models::LookupSpec;
use crate::services::{ApiError, EstimatorApi};
use serde_json::Value;
use thiserror::Error;

/// Errors that can occur while loading a dropdown
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("Lookup request failed: {0}")]
    Request(#[from] ApiError),

    #[error("Invalid lookup data format: {0}")]
    InvalidFormat(Value),
}

impl LookupError {
    /// Alert text shown for a failed load of the list named `label`
    pub fn user_message(&self, label: &str) -> String {
        match self {
            LookupError::Request(_) => format!("Failed to load {}.", label),
            LookupError::InvalidFormat(_) => format!("Failed to load {}. Invalid data format.", label),
        }
    }
}

/// Extract the option values from a lookup payload
///
/// Accepts a bare array or an object with the list under `field`. An
/// object without that key yields an empty list. Returns `None` when the
/// payload is neither, or when an entry is not a scalar.
pub fn resolve_options(payload: &Value, field: &str) -> Option<Vec<String>> {
    let entries: &[Value] = match payload {
        Value::Array(items) => items.as_slice(),
        Value::Object(map) => match map.get(field) {
            Some(Value::Array(items)) => items.as_slice(),
            Some(Value::Null) | None => &[],
            Some(_) => return None,
        },
        _ => return None,
    };

    entries
        .iter()
        .map(|entry| match entry {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        })
        .collect()
}

/// Append the sentinel after the backend values
///
/// Always appended, even when the backend already lists the same value.
pub fn with_sentinel(mut values: Vec<String>, sentinel: &str) -> Vec<String> {
    values.push(sentinel.to_string());
    values
}

/// Fetch one lookup list and return the options to render, sentinel included
pub async fn load_lookup(api: &EstimatorApi, spec: &LookupSpec) -> Result<Vec<String>, LookupError> {
    let payload = api.get_lookup(&spec.endpoint).await?;

    match resolve_options(&payload, &spec.field) {
        Some(values) if !values.is_empty() => Ok(with_sentinel(values, &spec.sentinel)),
        _ => Err(LookupError::InvalidFormat(payload)),
    }
}

/// Render the outcome of a lookup load into the page
///
/// Returns the number of options appended.
pub fn apply_lookup<V>(view: &mut V, spec: &LookupSpec, outcome: Result<Vec<String>, LookupError>) -> usize
where
    V: PageView + ?Sized,
{
    match outcome {
        Ok(options) => {
            for option in &options {
                view.append_option(spec.dropdown, option);
            }
            tracing::info!("Loaded {} {} options", options.len(), spec.label);
            options.len()
        }
        Err(e) => {
            match &e {
                LookupError::InvalidFormat(payload) => {
                    tracing::error!("Invalid {} data format: {}", spec.label, payload);
                }
                LookupError::Request(err) => {
                    tracing::error!("Error loading {}: {}", spec.label, err);
                }
            }
            view.alert(&e.user_message(&spec.label));
            0
        }
    }
}
