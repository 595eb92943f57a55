use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Structured diagnosis returned by the plant-vision provider, and the shape
/// the degraded fallback object mimics when the provider is unavailable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlantDiagnosis {
    pub plant_name: String,
    #[serde(default)]
    pub is_healthy: bool,
    #[serde(default)]
    pub diseases: Vec<String>,
    #[serde(default)]
    pub recommendations: Vec<String>,
}

/// A stored detection result. As with chat history, the contract declares
/// persistence but the plant route does not currently write it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiseaseDetection {
    pub id: String,
    pub user_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plant_type: Option<String>,
    pub disease_info: PlantDiagnosis,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendations: Option<Vec<String>>,
    pub created_at: DateTime<Utc>,
}
