//! Inbound request payloads and their validation rules.

use serde::{Deserialize, Serialize};

use crate::model::chat::Language;

/// Request payload for the chat endpoint. `query` stays optional at the serde
/// level so the handler can answer a missing field with its own error body
/// instead of a deserialization failure.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub query: Option<String>,
    #[serde(default)]
    pub language: Language,
}

/// A single rejected field, reported back to the client inside the
/// `details` array of a validation error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// Request payload for creating a soil measurement. The numeric bounds mirror
/// the ranges the dashboard's entry form advertises.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSoilMeasurement {
    pub ph: f64,
    pub temperature: f64,
    pub nitrogen: f64,
    pub phosphorus: f64,
    pub potassium: f64,
    #[serde(default)]
    pub humidity: Option<f64>,
    #[serde(default)]
    pub location: Option<String>,
}

impl NewSoilMeasurement {
    /// Checks every numeric field against its documented range and collects
    /// all violations so the client can highlight each offending input.
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();

        check_range(&mut errors, "ph", self.ph, 0.0, 14.0);
        check_range(&mut errors, "temperature", self.temperature, -50.0, 70.0);
        check_range(&mut errors, "nitrogen", self.nitrogen, 0.0, 200.0);
        check_range(&mut errors, "phosphorus", self.phosphorus, 0.0, 200.0);
        check_range(&mut errors, "potassium", self.potassium, 0.0, 200.0);
        if let Some(humidity) = self.humidity {
            check_range(&mut errors, "humidity", humidity, 0.0, 100.0);
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

fn check_range(errors: &mut Vec<FieldError>, field: &str, value: f64, min: f64, max: f64) {
    if !value.is_finite() || value < min || value > max {
        errors.push(FieldError::new(
            field,
            format!("must be between {min} and {max}"),
        ));
    }
}
