use serde::Deserialize;

use crate::infra::config::{AppConfig, AssistantConfig, FirmConfig, HandoffConfig, LogConfig};

#[derive(Debug, Deserialize, Default)]
pub struct FileConfig {
    pub logging: Option<FileLogConfig>,
    pub firm: Option<FileFirmConfig>,
    pub handoff: Option<FileHandoffConfig>,
    pub assistant: Option<FileAssistantConfig>,
}

impl FileConfig {
    pub fn merge_into(self, config: &mut AppConfig) {
        if let Some(logging) = self.logging {
            logging.merge_into(&mut config.logging);
        }

        if let Some(firm) = self.firm {
            firm.merge_into(&mut config.firm);
        }

        if let Some(handoff) = self.handoff {
            handoff.merge_into(&mut config.handoff);
        }

        if let Some(assistant) = self.assistant {
            assistant.merge_into(&mut config.assistant);
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileLogConfig {
    pub level: Option<String>,
}

impl FileLogConfig {
    fn merge_into(self, config: &mut LogConfig) {
        if let Some(level) = self.level {
            config.level = level;
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileFirmConfig {
    pub name: Option<String>,
}

impl FileFirmConfig {
    fn merge_into(self, config: &mut FirmConfig) {
        if let Some(name) = self.name {
            config.name = name;
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileHandoffConfig {
    pub base_url: Option<String>,
    pub submit_delay_ms: Option<u64>,
}

impl FileHandoffConfig {
    fn merge_into(self, config: &mut HandoffConfig) {
        if let Some(base_url) = self.base_url {
            config.base_url = base_url;
        }

        if let Some(delay_ms) = self.submit_delay_ms {
            config.submit_delay_ms = delay_ms;
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileAssistantConfig {
    pub endpoint: Option<String>,
    pub model: Option<String>,
    pub api_key_env: Option<String>,
    pub api_key: Option<String>,
    pub request_timeout_ms: Option<u64>,
}

impl FileAssistantConfig {
    fn merge_into(self, config: &mut AssistantConfig) {
        if let Some(endpoint) = self.endpoint {
            config.endpoint = endpoint;
        }

        if let Some(model) = self.model {
            config.model = model;
        }

        if let Some(api_key_env) = self.api_key_env {
            config.api_key_env = api_key_env;
        }

        if self.api_key.is_some() {
            config.api_key = self.api_key;
        }

        if let Some(timeout_ms) = self.request_timeout_ms {
            config.request_timeout_ms = timeout_ms;
        }
    }
}
