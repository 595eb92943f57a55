use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Advisory languages supported by the chat endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Hi,
    Ta,
}

/// A stored question/answer exchange. The data contract declares chat history
/// persistence, but the chat route does not currently write it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: String,
    pub user_id: String,
    pub message: String,
    pub response: String,
    pub language: Language,
    pub created_at: DateTime<Utc>,
}
