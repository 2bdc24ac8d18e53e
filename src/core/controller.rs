use crate::config::Settings;
use crate::core::lookup::{apply_lookup, load_lookup};
use crate::core::submission::{handle_submission, SubmissionError};
use crate::core::view::PageView;
use crate::models::{FormData, LookupSpec, PredictionResponse};
use crate::services::{ApiError, EstimatorApi};
use std::time::Duration;

/// Option counts appended by a page load, zero for a failed list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLoad {
    pub suburbs: usize,
    pub types: usize,
}

/// Drives the estimator page: fills the dropdowns on load and handles
/// form submissions
#[derive(Debug, Clone)]
pub struct PageController {
    api: EstimatorApi,
    suburbs: LookupSpec,
    types: LookupSpec,
}

impl PageController {
    pub fn new(api: EstimatorApi, suburbs: LookupSpec, types: LookupSpec) -> Self {
        Self { api, suburbs, types }
    }

    /// Build a controller with the stock "Other" / "Unit" sentinels
    pub fn with_default_sentinels(api: EstimatorApi) -> Self {
        Self::new(api, LookupSpec::suburbs("Other"), LookupSpec::types("Unit"))
    }

    pub fn from_settings(settings: &Settings) -> Result<Self, ApiError> {
        let api = EstimatorApi::new(
            settings.api.base_url.clone(),
            settings.api.timeout_secs.map(Duration::from_secs),
        )?;

        Ok(Self::new(
            api,
            LookupSpec::suburbs(settings.lookups.suburb_sentinel.clone()),
            LookupSpec::types(settings.lookups.type_sentinel.clone()),
        ))
    }

    pub fn api(&self) -> &EstimatorApi {
        &self.api
    }

    /// Load both dropdowns
    ///
    /// The two requests run concurrently and fail independently.
    pub async fn load<V>(&self, view: &mut V) -> PageLoad
    where
        V: PageView + ?Sized,
    {
        let (suburbs, types) = tokio::join!(
            load_lookup(&self.api, &self.suburbs),
            load_lookup(&self.api, &self.types),
        );

        PageLoad {
            suburbs: apply_lookup(view, &self.suburbs, suburbs),
            types: apply_lookup(view, &self.types, types),
        }
    }

    /// Handle one form submission
    pub async fn submit<V>(&self, form: &FormData, view: &mut V) -> Result<PredictionResponse, SubmissionError>
    where
        V: PageView + ?Sized,
    {
        handle_submission(&self.api, form, view).await
    }
}
