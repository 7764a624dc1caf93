//! Use case layer: application workflows and orchestration.

pub mod bootstrap;
pub mod chat_shell;
pub mod chat_turn;
pub mod context;
pub mod contracts;
pub mod guided_contact;
pub mod submit_contact;
pub mod terminal;

/// Returns the usecases module name for smoke checks.
pub fn module_name() -> &'static str {
    "usecases"
}
