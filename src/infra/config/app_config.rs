use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct AppConfig {
    pub logging: LogConfig,
    pub firm: FirmConfig,
    pub handoff: HandoffConfig,
    pub assistant: AssistantConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LogConfig {
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FirmConfig {
    pub name: String,
}

impl Default for FirmConfig {
    fn default() -> Self {
        Self {
            name: "Silva & Associados".to_owned(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandoffConfig {
    /// Messaging link the encoded payload is appended to.
    pub base_url: String,
    pub submit_delay_ms: u64,
}

impl Default for HandoffConfig {
    fn default() -> Self {
        Self {
            base_url: "https://wa.me/5588999734988".to_owned(),
            submit_delay_ms: 1_000,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AssistantConfig {
    pub endpoint: String,
    pub model: String,
    /// Environment variable holding the API key.
    pub api_key_env: String,
    /// Used only when the environment variable is unset.
    pub api_key: Option<String>,
    pub request_timeout_ms: u64,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://generativelanguage.googleapis.com/v1beta".to_owned(),
            model: "gemini-2.5-flash".to_owned(),
            api_key_env: "API_KEY".to_owned(),
            api_key: None,
            request_timeout_ms: 30_000,
        }
    }
}

impl AssistantConfig {
    /// Resolves the API key: environment first, then the config file value.
    /// Blank values count as absent.
    pub fn resolve_api_key(&self) -> Option<String> {
        let non_blank = |key: String| {
            let key = key.trim();
            (!key.is_empty()).then(|| key.to_owned())
        };

        std::env::var(&self.api_key_env)
            .ok()
            .and_then(non_blank)
            .or_else(|| self.api_key.clone().and_then(non_blank))
    }
}
