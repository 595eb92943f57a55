use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A manually logged soil reading. Records are append-only: once created they
/// are never updated or deleted, and per-user reads preserve insertion order
/// (the dashboard charts index into the list by position).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SoilMeasurement {
    pub id: String,
    pub user_id: String,
    pub ph: f64,
    pub temperature: f64,
    pub nitrogen: f64,
    pub phosphorus: f64,
    pub potassium: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub humidity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub created_at: DateTime<Utc>,
}
