use crate::models::{FormData, FormField, PredictionRequest};
use thiserror::Error;

/// Reasons a form submission is rejected before reaching the network
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormError {
    #[error("Missing fields: {0:?}")]
    MissingFields(Vec<FormField>),

    #[error("Field {0:?} is not a number")]
    InvalidNumber(FormField),

    #[error("Land size {landsize} is smaller than building area {buildingarea}")]
    LandSmallerThanBuilding { landsize: f64, buildingarea: f64 },
}

impl FormError {
    pub fn user_message(&self) -> &'static str {
        match self {
            FormError::MissingFields(_) => "Please fill out all the fields.",
            FormError::InvalidNumber(_) => "Please enter valid numbers for all numeric fields.",
            FormError::LandSmallerThanBuilding { .. } => {
                "Land size cannot be smaller than building area. Please correct the input."
            }
        }
    }
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Parse the leading integer of `raw`, ignoring anything after it
///
/// `"3"` and `"3.7"` both give 3, `"abc"` gives `None`.
pub fn parse_int_prefix(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let bytes = s.as_bytes();

    let sign = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let digits = count_digits(&bytes[sign..]);
    if digits == 0 {
        return None;
    }

    s[..sign + digits].parse().ok()
}

/// Parse the leading decimal number of `raw`, ignoring anything after it
///
/// Accepts an optional sign, fraction and exponent. Non-finite results are
/// rejected since they cannot be sent as JSON.
pub fn parse_float_prefix(raw: &str) -> Option<f64> {
    let s = raw.trim_start();
    let bytes = s.as_bytes();

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        end += 1 + frac_digits;
    }
    if int_digits + frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    s[..end].parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Validate the form and coerce it into a prediction request
///
/// Checks run in order: every field present, land and building area
/// numeric, land not smaller than building, remaining counts numeric.
pub fn build_request(form: &FormData) -> Result<PredictionRequest, FormError> {
    let missing = form.missing_fields();
    if !missing.is_empty() {
        return Err(FormError::MissingFields(missing));
    }

    let value = move |field: FormField| form.get(field).unwrap_or_default();
    let float = move |field: FormField| parse_float_prefix(value(field)).ok_or(FormError::InvalidNumber(field));
    let int = move |field: FormField| parse_int_prefix(value(field)).ok_or(FormError::InvalidNumber(field));

    let landsize = float(FormField::Landsize)?;
    let buildingarea = float(FormField::BuildingArea)?;
    if landsize < buildingarea {
        return Err(FormError::LandSmallerThanBuilding { landsize, buildingarea });
    }

    Ok(PredictionRequest {
        rooms: int(FormField::Rooms)?,
        bedroom: int(FormField::Bedroom)?,
        bathroom: int(FormField::Bathroom)?,
        carpark: int(FormField::Carpark)?,
        landsize,
        buildingarea,
        suburb: value(FormField::Suburb).to_string(),
        property_type: value(FormField::Type).to_string(),
    })
}
