#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    User,
    Assistant,
}

/// One transcript entry. Never mutated after it is appended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub speaker: Speaker,
    pub text: String,
    pub is_error: bool,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::User,
            text: text.into(),
            is_error: false,
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::Assistant,
            text: text.into(),
            is_error: false,
        }
    }

    /// Assistant entry flagged for error styling.
    pub fn assistant_error(text: impl Into<String>) -> Self {
        Self {
            is_error: true,
            ..Self::assistant(text)
        }
    }
}
