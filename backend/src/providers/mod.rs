//! Outbound provider adapters and their failure-substitution policies.
//!
//! Each adapter wraps one external HTTP dependency:
//! - `openrouter` talks to the OpenAI-compatible completion API and is shared
//!   by the chat advisor and the plant doctor.
//! - `chat` and `plant` turn provider failures into canned, farmer-readable
//!   guidance so the AI endpoints never surface a raw error.
//! - `weather` maps the OpenWeather forecast and fails hard on provider
//!   errors; the weather panel shows a generic failure message instead of
//!   made-up data.

pub mod chat;
pub mod openrouter;
pub mod plant;
pub mod weather;

use thiserror::Error;

/// Why an outbound call could not produce a live answer.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("no API credential configured")]
    MissingCredential,
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("provider returned status {0}")]
    Status(reqwest::StatusCode),
    #[error("could not decode provider response: {0}")]
    Decode(String),
}

impl ProviderError {
    /// True when the failure is the absence of a credential rather than a
    /// transient provider problem. The chat fallback prefixes its canned tip
    /// differently for the two cases.
    pub fn is_missing_credential(&self) -> bool {
        matches!(self, Self::MissingCredential)
    }
}

/// Result of an AI-backed call that recovers locally instead of failing.
///
/// `Degraded` keeps the underlying [`ProviderError`] so callers and tests can
/// tell a degraded-but-200 reply from a live one without string-sniffing.
#[derive(Debug)]
pub enum Outcome {
    Live(String),
    Degraded {
        text: String,
        reason: ProviderError,
    },
}

impl Outcome {
    /// The reply text, whichever way it was produced.
    pub fn into_text(self) -> String {
        match self {
            Self::Live(text) | Self::Degraded { text, .. } => text,
        }
    }
}
