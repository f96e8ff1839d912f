use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

impl Sender {
    /// Class attached to a rendered message, e.g. `user-message`.
    pub fn css_class(self) -> &'static str {
        match self {
            Sender::User => "user-message",
            Sender::Bot => "bot-message",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub text: String,
    pub sender: Sender,
}

impl Message {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sender: Sender::User,
        }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sender: Sender::Bot,
        }
    }
}

/// Body posted to the chat endpoint: `{"message": "..."}`.
#[derive(Debug, Serialize)]
pub struct ChatRequest<'a> {
    pub message: &'a str,
}

/// Reply from the chat endpoint. Only a non-empty string `response` counts
/// as usable; every other shape leaves it `None`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChatResponse {
    pub response: Option<String>,
}

impl ChatResponse {
    pub fn from_value(value: &Value) -> Self {
        let response = value
            .get("response")
            .and_then(Value::as_str)
            .filter(|text| !text.is_empty())
            .map(str::to_owned);
        Self { response }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_serializes_message_field() {
        let body = serde_json::to_value(ChatRequest { message: "hello" }).unwrap();
        assert_eq!(body, json!({ "message": "hello" }));
    }

    #[test]
    fn response_field_is_extracted() {
        let parsed = ChatResponse::from_value(&json!({ "response": "hi", "model": "falcon" }));
        assert_eq!(parsed.response.as_deref(), Some("hi"));
    }

    #[test]
    fn unusable_response_shapes_are_empty() {
        for value in [
            json!({}),
            json!({ "response": "" }),
            json!({ "response": null }),
            json!({ "response": 42 }),
            json!(null),
            json!([]),
            json!("response"),
        ] {
            assert_eq!(ChatResponse::from_value(&value), ChatResponse::default(), "{value}");
        }
    }

    #[test]
    fn sender_classes() {
        assert_eq!(Sender::User.css_class(), "user-message");
        assert_eq!(Sender::Bot.css_class(), "bot-message");
    }
}
