//! Seams between the use cases and the AI backend integration.

/// Opaque reference to conversational state held by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionHandle(pub u64);

/// Configuration supplied once, when a backend session is created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub system_instruction: String,
}

/// Errors reported by a backend implementation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssistantSourceError {
    /// No API key is configured; sessions cannot be created.
    MissingCredential,
    /// The handle does not belong to this backend.
    UnknownSession,
    /// The request never produced an HTTP response (DNS, TLS, timeout).
    Transport(String),
    /// The service answered with a non-success status.
    Status(u16),
    /// The response body could not be interpreted.
    MalformedResponse(String),
}

impl std::fmt::Display for AssistantSourceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingCredential => f.write_str("assistant API key is not configured"),
            Self::UnknownSession => f.write_str("assistant session handle is unknown"),
            Self::Transport(details) => write!(f, "assistant transport failed: {details}"),
            Self::Status(code) => write!(f, "assistant service returned HTTP {code}"),
            Self::MalformedResponse(details) => {
                write!(f, "assistant response was malformed: {details}")
            }
        }
    }
}

impl std::error::Error for AssistantSourceError {}

/// Conversational AI backend.
///
/// A session keeps prior turns so each `send` is answered in context.
pub trait AssistantBackend {
    /// Creates a session configured with the given persona.
    ///
    /// # Errors
    /// Returns `AssistantSourceError::MissingCredential` when no key is set.
    fn create_session(
        &mut self,
        config: &SessionConfig,
    ) -> Result<SessionHandle, AssistantSourceError>;

    /// Sends one user utterance and returns the generated reply text.
    fn send(
        &mut self,
        session: SessionHandle,
        message: &str,
    ) -> Result<String, AssistantSourceError>;
}

impl<T: AssistantBackend + ?Sized> AssistantBackend for Box<T> {
    fn create_session(
        &mut self,
        config: &SessionConfig,
    ) -> Result<SessionHandle, AssistantSourceError> {
        (**self).create_session(config)
    }

    fn send(
        &mut self,
        session: SessionHandle,
        message: &str,
    ) -> Result<String, AssistantSourceError> {
        (**self).send(session, message)
    }
}
