use serde::{Deserialize, Serialize};

/// Placeholder identity record. No route authenticates against it; the
/// deployment runs every request as the fixed `default-user`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    pub password: String,
}
