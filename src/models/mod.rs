// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Dropdown, FormField, LookupSpec};
pub use requests::{FormData, PredictionRequest};
pub use responses::{HealthStatus, PredictionResponse};
