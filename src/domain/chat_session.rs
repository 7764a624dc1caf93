//! Transcript and turn state for one assistant conversation.

use super::chat_message::ChatMessage;

pub const GREETING: &str = "Olá! Sou o assistente virtual da Silva & Associados. Como posso ajudar você hoje com dúvidas gerais sobre nossos serviços?";

/// Substituted when the backend answers with nothing usable.
pub const EMPTY_REPLY_FALLBACK: &str = "Desculpe, não consegui gerar uma resposta no momento.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChatTurnState {
    #[default]
    Idle,
    AwaitingReply,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnRejected {
    /// Text is empty after trimming.
    EmptyText,
    /// A previous turn has not resolved yet.
    AwaitingReply,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatSession {
    messages: Vec<ChatMessage>,
    turn: ChatTurnState,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::with_greeting(GREETING)
    }
}

impl ChatSession {
    pub fn with_greeting(greeting: impl Into<String>) -> Self {
        Self {
            messages: vec![ChatMessage::assistant(greeting)],
            turn: ChatTurnState::Idle,
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn last_message(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn turn(&self) -> ChatTurnState {
        self.turn
    }

    pub fn is_pending(&self) -> bool {
        self.turn == ChatTurnState::AwaitingReply
    }

    /// `Idle -> AwaitingReply`: appends the trimmed user text and returns it.
    /// Rejections leave the transcript and state untouched.
    pub fn begin_user_turn(&mut self, text: &str) -> Result<String, TurnRejected> {
        if self.is_pending() {
            return Err(TurnRejected::AwaitingReply);
        }

        let text = text.trim();
        if text.is_empty() {
            return Err(TurnRejected::EmptyText);
        }

        self.messages.push(ChatMessage::user(text));
        self.turn = ChatTurnState::AwaitingReply;
        Ok(text.to_owned())
    }

    /// `AwaitingReply -> Idle` with the backend's reply. Returns false when no
    /// turn was pending.
    pub fn record_reply(&mut self, text: &str) -> bool {
        let reply = if text.trim().is_empty() {
            EMPTY_REPLY_FALLBACK
        } else {
            text
        };

        self.resolve(ChatMessage::assistant(reply))
    }

    /// `AwaitingReply -> Idle` with an error entry.
    pub fn record_failure(&mut self, apology: &str) -> bool {
        self.resolve(ChatMessage::assistant_error(apology))
    }

    fn resolve(&mut self, message: ChatMessage) -> bool {
        if !self.is_pending() {
            return false;
        }

        self.messages.push(message);
        self.turn = ChatTurnState::Idle;
        true
    }
}
