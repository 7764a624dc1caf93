//! AI backend integration: Gemini client and assistant persona.

pub mod gemini;
pub mod persona;

/// Returns the assistant module name for smoke checks.
pub fn module_name() -> &'static str {
    "assistant"
}
