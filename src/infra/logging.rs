use std::path::Path;

use tracing_subscriber::EnvFilter;

use crate::infra::{config::LogConfig, error::AppError};

const LOG_FILE_PREFIX: &str = "lexdesk.log";

/// Routes tracing output to a daily log file so prompts on stdout stay clean.
/// `RUST_LOG` overrides the configured level.
pub fn init(config: &LogConfig, log_dir: &Path) -> Result<(), AppError> {
    let appender = tracing_appender::rolling::daily(log_dir, LOG_FILE_PREFIX);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level)),
        )
        .with_target(true)
        .with_ansi(false)
        .with_writer(appender)
        .try_init()
        .map_err(AppError::LoggingInit)
}
