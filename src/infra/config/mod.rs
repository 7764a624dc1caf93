mod app_config;
mod file_config;
mod loader;

pub use app_config::{AppConfig, AssistantConfig, FirmConfig, HandoffConfig, LogConfig};
pub use loader::load;
