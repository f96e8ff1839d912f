/// Chat client for the widget
///
/// This module forwards one user message to the configured chat endpoint and
/// turns whatever comes back into the text the transcript should show.
///
/// # Architecture
///
/// - `client` - `ChatClient`, the backend seam and the reply outcome
/// - `endpoint` - HTTP backend posting `{"message": ...}` with reqwest
///
/// # Usage
///
/// ```rust,no_run
/// use falcon_chat::ai::ChatClient;
///
/// # async fn example() {
/// let client = ChatClient::for_endpoint("http://127.0.0.1:5001/api/chat");
/// let reply = client.reply("Hello!").await.into_text();
/// # let _ = reply;
/// # }
/// ```
mod client;
mod endpoint;

pub use client::{
    ChatBackend, ChatClient, ChatError, ChatResult, FAILED_REPLY, ReplyOutcome,
    UNRECOGNIZED_REPLY,
};
pub use endpoint::{EndpointBackend, decode_reply};
