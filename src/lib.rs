//! Home Price Estimator - form controller for the Melbourne home price API
//!
//! Fills the suburb and property type dropdowns from the backend, validates
//! the prediction form and renders the predicted price into a [`PageView`].

pub mod config;
pub mod core;
pub mod models;
pub mod services;

// Re-export commonly used types
pub use crate::core::{MemoryView, PageController, PageLoad, PageView};
pub use crate::models::{Dropdown, FormData, FormField, LookupSpec, PredictionRequest, PredictionResponse};
pub use crate::services::{ApiError, EstimatorApi};
