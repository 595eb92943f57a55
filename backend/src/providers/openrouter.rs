//! Low-level client for the OpenAI-compatible chat-completions API.
//!
//! Owns transport details only: request serialization, credential handling,
//! HTTP status mapping, and extraction of the first completion's text. The
//! fallback policies live with the adapters in `chat` and `plant`.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

use super::ProviderError;

/// Placeholder returned when the provider answers with an empty completion.
const EMPTY_COMPLETION_PLACEHOLDER: &str = "No response from OpenRouter.";

/// Shared handle to the completion API. Cloning is cheap; the underlying
/// reqwest client pools connections internally.
#[derive(Clone)]
pub struct OpenRouter {
    client: Client,
    api_key: Option<String>,
    api_base: String,
}

#[derive(Deserialize)]
struct CompletionDto {
    #[serde(default)]
    choices: Vec<ChoiceDto>,
}

#[derive(Deserialize)]
struct ChoiceDto {
    message: MessageDto,
}

#[derive(Deserialize)]
struct MessageDto {
    content: Option<String>,
}

impl OpenRouter {
    /// `api_key = None` builds a client that fails every call with
    /// [`ProviderError::MissingCredential`] before touching the network.
    pub fn new(api_key: Option<String>, api_base: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            api_base,
        }
    }

    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }

    /// Plain text completion: one system turn plus one user turn.
    pub async fn chat(
        &self,
        model: &str,
        system: &str,
        user: &str,
    ) -> Result<String, ProviderError> {
        let body = json!({
            "model": model,
            "messages": [
                { "role": "system", "content": system },
                { "role": "user", "content": user },
            ],
        });
        self.complete(body).await
    }

    /// Vision completion: the image goes inline as a base64 data URL and the
    /// provider is asked for a JSON object response.
    pub async fn vision_json(
        &self,
        model: &str,
        prompt: &str,
        image: &[u8],
    ) -> Result<String, ProviderError> {
        let data_url = format!("data:image/jpeg;base64,{}", BASE64.encode(image));
        let body = json!({
            "model": model,
            "messages": [{
                "role": "user",
                "content": [
                    { "type": "text", "text": prompt },
                    { "type": "image_url", "image_url": { "url": data_url } },
                ],
            }],
            "response_format": { "type": "json_object" },
            "max_tokens": 800,
        });
        self.complete(body).await
    }

    async fn complete(&self, body: serde_json::Value) -> Result<String, ProviderError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(ProviderError::MissingCredential)?;

        let response = self
            .client
            .post(format!("{}/chat/completions", self.api_base))
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Status(status));
        }

        let completion: CompletionDto = response
            .json()
            .await
            .map_err(|e| ProviderError::Decode(e.to_string()))?;

        let content = completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|text| !text.is_empty());

        Ok(content.unwrap_or_else(|| EMPTY_COMPLETION_PLACEHOLDER.to_string()))
    }
}
