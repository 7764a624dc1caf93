//! Use case for running assistant conversation turns.
//!
//! `ChatController` owns one `ChatSession` and the backend context for it. A
//! turn is started with the user's text and resolved with exactly one assistant
//! entry; while a turn is pending every new submission is rejected.

use crate::{
    domain::chat_session::{ChatSession, TurnRejected},
    infra::secrets::redact_text,
    usecases::contracts::{AssistantBackend, AssistantSourceError, SessionConfig, SessionHandle},
};

pub const BACKEND_UNAVAILABLE_MESSAGE: &str = "Erro: Não foi possível conectar ao serviço de IA. Por favor, verifique a configuração da chave de API.";

pub const TECHNICAL_FAILURE_MESSAGE: &str = "Desculpe, tive um problema técnico. Tente novamente.";

const ASSISTANT_UNAVAILABLE: &str = "ASSISTANT_UNAVAILABLE";
const ASSISTANT_TURN_FAILED: &str = "ASSISTANT_TURN_FAILED";

/// Lifecycle of the backend session behind the transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionContext {
    NotCreated,
    Ready(SessionHandle),
    /// Creation failed; sends short-circuit for the rest of the session.
    Unavailable,
}

/// How a resolved turn ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    Replied,
    Failed,
    Unavailable,
}

pub struct ChatController<B: AssistantBackend> {
    backend: B,
    session_config: SessionConfig,
    session: ChatSession,
    context: SessionContext,
    pending_text: Option<String>,
}

impl<B: AssistantBackend> ChatController<B> {
    pub fn new(backend: B, session_config: SessionConfig) -> Self {
        Self::with_session(backend, session_config, ChatSession::default())
    }

    pub fn with_session(backend: B, session_config: SessionConfig, session: ChatSession) -> Self {
        Self {
            backend,
            session_config,
            session,
            context: SessionContext::NotCreated,
            pending_text: None,
        }
    }

    pub fn session(&self) -> &ChatSession {
        &self.session
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn context(&self) -> SessionContext {
        self.context
    }

    #[cfg(test)]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Creates the backend session on first use and returns its handle.
    ///
    /// Later calls return the same handle without touching the backend. A
    /// failed creation is remembered and yields `None` from then on.
    pub fn ensure_session_context(&mut self) -> Option<SessionHandle> {
        match self.context {
            SessionContext::Ready(handle) => Some(handle),
            SessionContext::Unavailable => None,
            SessionContext::NotCreated => {
                match self.backend.create_session(&self.session_config) {
                    Ok(handle) => {
                        tracing::debug!(session = handle.0, "assistant session created");
                        self.context = SessionContext::Ready(handle);
                        Some(handle)
                    }
                    Err(error) => {
                        tracing::warn!(
                            code = ASSISTANT_UNAVAILABLE,
                            error = %error,
                            "assistant session could not be created"
                        );
                        self.context = SessionContext::Unavailable;
                        None
                    }
                }
            }
        }
    }

    /// Starts a turn: appends the user entry and marks the session pending.
    /// Call `resolve_pending_turn` to obtain the assistant entry.
    pub fn begin_turn(&mut self, text: &str) -> Result<(), TurnRejected> {
        let text = self.session.begin_user_turn(text)?;
        self.pending_text = Some(text);
        Ok(())
    }

    /// Sends the pending text to the backend and appends the reply or an
    /// error entry. Returns `None` when no turn is pending.
    pub fn resolve_pending_turn(&mut self) -> Option<TurnOutcome> {
        let text = self.pending_text.take()?;
        Some(self.dispatch(&text))
    }

    /// Runs a whole turn: `begin_turn` followed by `resolve_pending_turn`.
    pub fn submit_user_text(&mut self, text: &str) -> Result<TurnOutcome, TurnRejected> {
        let text = self.session.begin_user_turn(text)?;
        Ok(self.dispatch(&text))
    }

    fn dispatch(&mut self, text: &str) -> TurnOutcome {
        let Some(handle) = self.ensure_session_context() else {
            self.session.record_failure(BACKEND_UNAVAILABLE_MESSAGE);
            return TurnOutcome::Unavailable;
        };

        match self.backend.send(handle, text) {
            Ok(reply) => {
                self.session.record_reply(&reply);
                TurnOutcome::Replied
            }
            Err(error) => {
                report_turn_failure(&error);
                self.session.record_failure(TECHNICAL_FAILURE_MESSAGE);
                TurnOutcome::Failed
            }
        }
    }
}

fn report_turn_failure(error: &AssistantSourceError) {
    tracing::error!(
        code = ASSISTANT_TURN_FAILED,
        error = %redact_text(&error.to_string()),
        "assistant turn failed"
    );
}
