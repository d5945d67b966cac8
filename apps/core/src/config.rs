use std::env;

use tracing::warn;

/// Environment variable holding the model API key. `API_KEY` is accepted
/// as an alias.
pub const API_KEY_VAR: &str = "GEMINI_API_KEY";
const API_KEY_ALIAS_VAR: &str = "API_KEY";
const MODEL_VAR: &str = "INSIGHTLEX_MODEL";
const API_BASE_VAR: &str = "INSIGHTLEX_API_BASE";

const DEFAULT_MODEL: &str = "gemini-3-flash-preview";
const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com";

/// Runtime configuration, read once from the process environment at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Credential for the model endpoint. A missing key is not fatal here;
    /// the failure surfaces when the first analysis is attempted.
    pub api_key: Option<String>,
    /// Model identifier used in the request path.
    pub model: String,
    /// Base URL of the model endpoint. Overridable for tests.
    pub api_base: String,
}

impl AppConfig {
    /// Reads the configuration from the environment.
    pub fn from_env() -> Self {
        let api_key = env::var(API_KEY_VAR)
            .or_else(|_| env::var(API_KEY_ALIAS_VAR))
            .ok()
            .filter(|key| !key.trim().is_empty());

        if api_key.is_none() {
            warn!(
                "{} is not set; analysis requests will fail until it is provided",
                API_KEY_VAR
            );
        }

        let model = env::var(MODEL_VAR)
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let api_base = env::var(API_BASE_VAR)
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(|value| value.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

        Self {
            api_key,
            model,
            api_base,
        }
    }
}
