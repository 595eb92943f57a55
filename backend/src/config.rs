//! Environment-driven server configuration, read once at startup.

use std::env;
use std::fmt::Display;
use std::str::FromStr;

use log::{info, warn};

/// OpenWeather key shipped with the app so the weather panel works out of the
/// box; deployments override it with `OPENWEATHER_API_KEY`.
const BUNDLED_OPENWEATHER_KEY: &str = "cd81c0ca27ba43bead299707e76f33a0";

const DEFAULT_OPENROUTER_BASE: &str = "https://openrouter.ai/api/v1";

/// Runtime configuration for the backend process.
#[derive(Debug, Clone)]
pub struct Config {
    /// Interface the HTTP server binds to.
    pub host: String,
    /// Port the HTTP server listens on.
    pub port: u16,
    /// Credential for the chat/vision provider. `None` means the AI endpoints
    /// run in degraded mode only.
    pub openrouter_api_key: Option<String>,
    /// Base URL of the OpenAI-compatible completion API.
    pub openrouter_api_base: String,
    /// Credential for the forecast provider.
    pub openweather_api_key: String,
}

impl Config {
    /// Reads the recognised environment variables, logging which defaults were
    /// taken so misconfigured deployments are visible in the startup output.
    pub fn from_env() -> Self {
        let openrouter_api_key = env::var("OPENROUTER_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());
        if openrouter_api_key.is_none() {
            warn!("OPENROUTER_API_KEY not set; AI endpoints will serve canned fallback tips");
        }

        Self {
            host: "0.0.0.0".to_string(),
            port: load_or("PORT", 5000),
            openrouter_api_key,
            openrouter_api_base: env::var("OPENROUTER_API_BASE")
                .unwrap_or_else(|_| DEFAULT_OPENROUTER_BASE.to_string()),
            openweather_api_key: env::var("OPENWEATHER_API_KEY")
                .unwrap_or_else(|_| BUNDLED_OPENWEATHER_KEY.to_string()),
        }
    }
}

fn load_or<T>(key: &str, default: T) -> T
where
    T: FromStr + Display + Copy,
    T::Err: Display,
{
    match env::var(key) {
        Ok(raw) => match raw.parse() {
            Ok(value) => value,
            Err(e) => {
                warn!("Invalid {key} value {raw:?} ({e}), using default {default}");
                default
            }
        },
        Err(_) => {
            info!("{key} not set, using default {default}");
            default
        }
    }
}
