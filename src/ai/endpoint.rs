use super::{ChatBackend, ChatResult};
use crate::types::{ChatRequest, ChatResponse};
use async_trait::async_trait;
use reqwest::Client;

/// Posts `{"message": ...}` as JSON to a fixed chat endpoint.
pub struct EndpointBackend {
    client: Client,
    endpoint: String,
}

impl EndpointBackend {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

/// Parse a reply body. Anything that is not JSON is an error; any JSON value
/// is accepted and reduced to its `response` field.
pub fn decode_reply(body: &str) -> ChatResult<ChatResponse> {
    let value: serde_json::Value = serde_json::from_str(body)?;
    Ok(ChatResponse::from_value(&value))
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl ChatBackend for EndpointBackend {
    async fn exchange(&self, message: &str) -> ChatResult<ChatResponse> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&ChatRequest { message })
            .send()
            .await?;

        // Status is informational only; the body decides the outcome.
        let status = response.status();
        if !status.is_success() {
            tracing::debug!(%status, endpoint = %self.endpoint, "chat endpoint returned error status");
        }

        let body = response.text().await?;
        decode_reply(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::{EndpointBackend, decode_reply};
    use crate::ai::ChatError;

    #[test]
    fn keeps_configured_endpoint() {
        let backend = EndpointBackend::new("http://127.0.0.1:5001/api/chat");
        assert_eq!(backend.endpoint(), "http://127.0.0.1:5001/api/chat");
    }

    #[test]
    fn decodes_reply_bodies() {
        assert_eq!(
            decode_reply(r#"{"response":"hi"}"#).unwrap().response.as_deref(),
            Some("hi")
        );
        assert!(decode_reply("{}").unwrap().response.is_none());
        assert!(matches!(
            decode_reply("Internal Server Error"),
            Err(ChatError::Decode(_))
        ));
        assert!(matches!(decode_reply(""), Err(ChatError::Decode(_))));
    }
}
