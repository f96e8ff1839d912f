use crate::types::ChatResponse;
use async_trait::async_trait;
use std::sync::Arc;

use super::endpoint::EndpointBackend;

pub const UNRECOGNIZED_REPLY: &str = "Sorry, I couldn't understand that.";
pub const FAILED_REPLY: &str =
    "I'm sorry, I couldn't process your request. Please try again later.";

// ============================================
// Error Types
// ============================================

#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("chat request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("chat endpoint returned a malformed body: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type ChatResult<T> = Result<T, ChatError>;

// ============================================
// Backend seam
// ============================================

/// One request/response exchange with a chat service.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait ChatBackend {
    async fn exchange(&self, message: &str) -> ChatResult<ChatResponse>;
}

/// What the transcript should show for one send.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReplyOutcome {
    Answer(String),
    /// The body parsed but carried no usable `response`.
    Unrecognized,
    /// Transport error or a body that was not JSON.
    Failed,
}

impl ReplyOutcome {
    pub fn into_text(self) -> String {
        match self {
            ReplyOutcome::Answer(text) => text,
            ReplyOutcome::Unrecognized => UNRECOGNIZED_REPLY.to_string(),
            ReplyOutcome::Failed => FAILED_REPLY.to_string(),
        }
    }
}

impl From<ChatResult<ChatResponse>> for ReplyOutcome {
    fn from(result: ChatResult<ChatResponse>) -> Self {
        match result {
            Ok(ChatResponse {
                response: Some(text),
            }) => ReplyOutcome::Answer(text),
            Ok(ChatResponse { response: None }) => ReplyOutcome::Unrecognized,
            Err(err) => {
                tracing::debug!(error = %err, "chat exchange failed");
                ReplyOutcome::Failed
            }
        }
    }
}

/// Cheap to clone; every clone shares the same backend.
#[derive(Clone)]
pub struct ChatClient {
    backend: Arc<dyn ChatBackend>,
}

impl ChatClient {
    pub fn new(backend: impl ChatBackend + 'static) -> Self {
        Self {
            backend: Arc::new(backend),
        }
    }

    pub fn for_endpoint(endpoint: impl Into<String>) -> Self {
        Self::new(EndpointBackend::new(endpoint))
    }

    /// Send one message. Never fails: errors become `ReplyOutcome::Failed`.
    pub async fn reply(&self, message: &str) -> ReplyOutcome {
        self.backend.exchange(message).await.into()
    }
}
