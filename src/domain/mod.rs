//! Domain layer: form and conversation state with their rules.

pub mod chat_message;
pub mod chat_session;
pub mod contact_form;
pub mod handoff;
pub mod practice_area;
pub mod submission;

/// Returns the domain module name for smoke checks.
pub fn module_name() -> &'static str {
    "domain"
}
