//! Chat advisor with keyword-triggered canned fallback.
//!
//! The live path asks the completion API with a system prompt chosen by the
//! requested language. When the provider is unreachable, rate-limited, or not
//! configured at all, the farmer still gets a useful reply: a fixed tip picked
//! by scanning the query for "soil", "pest", then "water", in that priority
//! order. The ordering is a product decision; do not reorder it.

use common::model::chat::Language;
use log::warn;

use super::openrouter::OpenRouter;
use super::Outcome;

const CHAT_MODEL: &str = "openai/gpt-oss-20b:free";

const SOIL_TIP: &str =
    "🌱 Tip: Enhance soil fertility by using compost, crop rotation, and organic manure.";
const PEST_TIP: &str =
    "🐛 Tip: Use natural pest repellents like neem oil or intercropping with pest-resistant plants.";
const WATER_TIP: &str =
    "💧 Tip: Conserve water using drip irrigation and mulching to retain soil moisture.";
const GENERIC_TIP: &str =
    "🤖 Our AI systems are busy. General tip: Practice sustainable farming with organic inputs and smart irrigation.";

const BUSY_PREFIX: &str = "Apologies, our AI systems are busy. ";
const NO_KEY_PREFIX: &str = "Please add your OpenRouter API key for reliable access. ";

/// Agricultural chat adapter over the completion API.
#[derive(Clone)]
pub struct ChatAdvisor {
    api: OpenRouter,
}

impl ChatAdvisor {
    pub fn new(api: OpenRouter) -> Self {
        Self { api }
    }

    /// Answers a farmer's question, degrading to a canned tip on any provider
    /// failure. Never returns an error; the chat endpoint must always have
    /// natural-language text to show.
    pub async fn advise(&self, query: &str, language: Language) -> Outcome {
        match self.api.chat(CHAT_MODEL, system_prompt(language), query).await {
            Ok(text) => Outcome::Live(text),
            Err(reason) => {
                warn!("chat completion failed, serving fallback tip: {reason}");
                let prefix = if reason.is_missing_credential() {
                    NO_KEY_PREFIX
                } else {
                    BUSY_PREFIX
                };
                Outcome::Degraded {
                    text: format!("{prefix}{}", fallback_tip(query)),
                    reason,
                }
            }
        }
    }
}

fn system_prompt(language: Language) -> &'static str {
    match language {
        Language::Hi => "आप एक विशेषज्ञ कृषि सलाहकार हैं जो भारतीय किसानों की मदद करते हैं।",
        Language::Ta => "நீங்கள் இந்திய விவசாயிகளுக்கு உதவும் ஒரு நிபுண விவசாய ஆலோசகர்.",
        Language::En => "You are an expert agricultural advisor helping Indian farmers.",
    }
}

/// Picks the canned tip for a failed live call. Keyword checks short-circuit
/// in soil > pest > water priority.
fn fallback_tip(query: &str) -> &'static str {
    let query = query.to_lowercase();
    if query.contains("soil") {
        SOIL_TIP
    } else if query.contains("pest") {
        PEST_TIP
    } else if query.contains("water") {
        WATER_TIP
    } else {
        GENERIC_TIP
    }
}
