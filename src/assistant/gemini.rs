use std::{collections::HashMap, time::Duration};

use serde::{Deserialize, Serialize};
use tokio::runtime::{Builder, Runtime};

use crate::{
    infra::{config::AssistantConfig, error::AppError},
    usecases::contracts::{AssistantBackend, AssistantSourceError, SessionConfig, SessionHandle},
};

const API_KEY_HEADER: &str = "x-goog-api-key";
const USER_ROLE: &str = "user";
const MODEL_ROLE: &str = "model";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

impl Content {
    fn text(role: &str, text: &str) -> Self {
        Self {
            role: Some(role.to_owned()),
            parts: vec![Part {
                text: Some(text.to_owned()),
            }],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    system_instruction: Content,
    contents: &'a [Content],
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug)]
struct GeminiSession {
    system_instruction: String,
    /// Completed user/model turns, oldest first.
    history: Vec<Content>,
}

/// `AssistantBackend` over the Gemini `generateContent` REST API.
///
/// Each session keeps its own turn history and sends it in full with every
/// request. The async client is driven by a private current-thread runtime so
/// callers stay synchronous.
pub struct GeminiBackend {
    rt: Runtime,
    client: reqwest::Client,
    endpoint: String,
    model: String,
    api_key: Option<String>,
    sessions: HashMap<SessionHandle, GeminiSession>,
    next_session_id: u64,
}

impl GeminiBackend {
    pub fn new(config: &AssistantConfig) -> Result<Self, AppError> {
        Self::with_api_key(config, config.resolve_api_key())
    }

    pub fn with_api_key(config: &AssistantConfig, api_key: Option<String>) -> Result<Self, AppError> {
        let rt = Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|error| AppError::AssistantClient {
                details: format!("failed to initialize async runtime: {error}"),
            })?;

        let mut builder = reqwest::Client::builder();
        if config.request_timeout_ms > 0 {
            builder = builder.timeout(Duration::from_millis(config.request_timeout_ms));
        }
        let client = builder.build().map_err(|error| AppError::AssistantClient {
            details: format!("failed to build HTTP client: {error}"),
        })?;

        Ok(Self {
            rt,
            client,
            endpoint: config.endpoint.trim_end_matches('/').to_owned(),
            model: config.model.clone(),
            api_key,
            sessions: HashMap::new(),
            next_session_id: 1,
        })
    }

    fn request_url(&self) -> String {
        format!("{}/models/{}:generateContent", self.endpoint, self.model)
    }
}

impl AssistantBackend for GeminiBackend {
    fn create_session(
        &mut self,
        config: &SessionConfig,
    ) -> Result<SessionHandle, AssistantSourceError> {
        if self.api_key.is_none() {
            return Err(AssistantSourceError::MissingCredential);
        }

        let handle = SessionHandle(self.next_session_id);
        self.next_session_id += 1;
        self.sessions.insert(
            handle,
            GeminiSession {
                system_instruction: config.system_instruction.clone(),
                history: Vec::new(),
            },
        );

        tracing::debug!(session = handle.0, model = %self.model, "gemini session created");
        Ok(handle)
    }

    fn send(
        &mut self,
        session: SessionHandle,
        message: &str,
    ) -> Result<String, AssistantSourceError> {
        let api_key = self
            .api_key
            .clone()
            .ok_or(AssistantSourceError::MissingCredential)?;
        let url = self.request_url();
        let state = self
            .sessions
            .get_mut(&session)
            .ok_or(AssistantSourceError::UnknownSession)?;

        let user_turn = Content::text(USER_ROLE, message);
        let mut contents = state.history.clone();
        contents.push(user_turn.clone());

        let body = GenerateContentRequest {
            system_instruction: Content {
                role: None,
                parts: vec![Part {
                    text: Some(state.system_instruction.clone()),
                }],
            },
            contents: &contents,
        };

        let client = &self.client;
        let response = self.rt.block_on(async {
            let response = client
                .post(&url)
                .header(API_KEY_HEADER, api_key)
                .json(&body)
                .send()
                .await
                .map_err(|error| AssistantSourceError::Transport(error.to_string()))?;

            let status = response.status();
            if !status.is_success() {
                return Err(AssistantSourceError::Status(status.as_u16()));
            }

            response
                .json::<GenerateContentResponse>()
                .await
                .map_err(|error| AssistantSourceError::MalformedResponse(error.to_string()))
        })?;

        let reply = reply_text(&response);
        // Empty model turns are rejected by the API on replay.
        if !reply.trim().is_empty() {
            state.history.push(user_turn);
            state.history.push(Content::text(MODEL_ROLE, &reply));
        }

        tracing::debug!(
            session = session.0,
            turns = state.history.len() / 2,
            reply_chars = reply.chars().count(),
            "gemini reply received"
        );
        Ok(reply)
    }
}

/// Concatenates the text parts of the first candidate. Empty when the
/// service returned no usable text.
fn reply_text(response: &GenerateContentResponse) -> String {
    response
        .candidates
        .first()
        .and_then(|candidate| candidate.content.as_ref())
        .map(|content| {
            content
                .parts
                .iter()
                .filter_map(|part| part.text.as_deref())
                .collect::<String>()
        })
        .unwrap_or_default()
}
