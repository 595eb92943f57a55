//! Plant doctor: image diagnosis and text advice with degraded fallbacks.

use common::model::disease::PlantDiagnosis;
use log::warn;

use super::openrouter::OpenRouter;
use super::Outcome;

const VISION_MODEL: &str = "openai/gpt-4o-mini";
const TEXT_MODEL: &str = "openai/gpt-oss-20b:free";

const VISION_PROMPT: &str =
    "Analyze this plant image and provide JSON { plantName, isHealthy, diseases, recommendations }";
const TEXT_SYSTEM_PROMPT: &str = "You are a plant doctor.";

const TEXT_FALLBACK_TIP: &str =
    "🌿 Plant Doctor Tip: Ensure sunlight, avoid overwatering, and check leaves for early signs of pests.";
const GENERIC_CARE_TIP: &str =
    "General tip: Ensure sunlight, proper watering, and neem oil for pests.";

/// Plant analysis adapter over the completion API.
#[derive(Clone)]
pub struct PlantDoctor {
    api: OpenRouter,
}

impl PlantDoctor {
    pub fn new(api: OpenRouter) -> Self {
        Self { api }
    }

    /// Diagnoses a plant photo. Infallible by design: when the vision call or
    /// the JSON parse fails, the farmer gets the fixed limited-analysis
    /// object instead of an error.
    pub async fn diagnose_image(&self, image: &[u8]) -> PlantDiagnosis {
        match self.api.vision_json(VISION_MODEL, VISION_PROMPT, image).await {
            Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
                warn!("vision response was not the expected JSON shape: {e}");
                limited_diagnosis("Unclear image analysis")
            }),
            Err(reason) => {
                warn!("vision completion failed, serving limited diagnosis: {reason}");
                limited_diagnosis("Unable to perform detailed analysis")
            }
        }
    }

    /// Text-only advice for queries without a photo.
    pub async fn advise_text(&self, query: &str) -> Outcome {
        match self.api.chat(TEXT_MODEL, TEXT_SYSTEM_PROMPT, query).await {
            Ok(text) => Outcome::Live(text),
            Err(reason) => {
                warn!("plant text completion failed, serving fallback tip: {reason}");
                Outcome::Degraded {
                    text: TEXT_FALLBACK_TIP.to_string(),
                    reason,
                }
            }
        }
    }
}

fn limited_diagnosis(disease_placeholder: &str) -> PlantDiagnosis {
    PlantDiagnosis {
        plant_name: "Plant (Analysis Limited)".to_string(),
        is_healthy: false,
        diseases: vec![disease_placeholder.to_string()],
        recommendations: vec![GENERIC_CARE_TIP.to_string()],
    }
}
