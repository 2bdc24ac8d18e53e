use crate::models::domain::FormField;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use validator::Validate;

/// Request body for the predict endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct PredictionRequest {
    pub rooms: i64,
    pub bedroom: i64,
    pub bathroom: i64,
    pub carpark: i64,
    pub landsize: f64,
    pub buildingarea: f64,
    #[validate(length(min = 1))]
    pub suburb: String,
    #[validate(length(min = 1))]
    #[serde(rename = "type")]
    pub property_type: String,
}

/// Submitted form values keyed by input name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData {
    values: HashMap<String, String>,
}

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a value by input name, replacing any previous one
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    /// Builder-style variant of [`FormData::insert`] keyed by field
    pub fn with(mut self, field: FormField, value: impl Into<String>) -> Self {
        self.insert(field.input_name(), value);
        self
    }

    /// Raw value of a field, `None` when absent or empty
    pub fn get(&self, field: FormField) -> Option<&str> {
        self.values
            .get(field.input_name())
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Fields that are absent or empty, in form order
    pub fn missing_fields(&self) -> Vec<FormField> {
        FormField::ALL
            .into_iter()
            .filter(|f| self.get(*f).is_none())
            .collect()
    }
}

impl<K, V> FromIterator<(K, V)> for FormData
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut form = FormData::new();
        for (name, value) in iter {
            form.insert(name, value);
        }
        form
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_value_counts_as_missing() {
        let form = FormData::new()
            .with(FormField::Rooms, "3")
            .with(FormField::Suburb, "");

        assert_eq!(form.get(FormField::Rooms), Some("3"));
        assert_eq!(form.get(FormField::Suburb), None);
        assert_eq!(form.missing_fields().len(), 7);
    }

    #[test]
    fn test_type_serializes_under_wire_name() {
        let req = PredictionRequest {
            rooms: 3,
            bedroom: 2,
            bathroom: 1,
            carpark: 1,
            landsize: 500.0,
            buildingarea: 200.0,
            suburb: "A".to_string(),
            property_type: "House".to_string(),
        };

        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["type"], "House");
        assert!(json.get("property_type").is_none());
        assert!(req.validate().is_ok());
    }
}
