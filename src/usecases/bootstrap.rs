use std::path::Path;

use crate::{
    assistant::{gemini::GeminiBackend, persona},
    infra::{self, error::AppError, storage_layout::StorageLayout},
    usecases::{chat_turn::ChatController, context::AppContext},
};

/// Loads config, prepares directories, and starts file logging.
pub fn bootstrap(config_path: Option<&Path>) -> Result<AppContext, AppError> {
    let context = build_context(config_path)?;
    context.layout.ensure_dirs()?;
    infra::logging::init(&context.config.logging, &context.layout.log_dir)?;

    tracing::info!(
        firm = %context.config.firm.name,
        model = %context.config.assistant.model,
        "lexdesk bootstrapped"
    );

    Ok(context)
}

/// Wires the chat controller to the Gemini backend with the firm's persona.
pub fn compose_chat(context: &AppContext) -> Result<ChatController<GeminiBackend>, AppError> {
    let backend = GeminiBackend::new(&context.config.assistant)?;
    Ok(ChatController::new(
        backend,
        persona::session_config(&context.config.firm.name),
    ))
}

fn build_context(config_path: Option<&Path>) -> Result<AppContext, AppError> {
    let config = infra::config::load(config_path)?;
    let layout = StorageLayout::resolve()?;

    Ok(AppContext::new(config, layout))
}
