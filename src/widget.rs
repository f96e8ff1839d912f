use crate::ai::ReplyOutcome;
use crate::types::Message;

/// Transcript and typing indicator for one page session.
///
/// Sends are not serialized: a second `submit` while a reply is outstanding
/// is accepted, and replies land in whatever order `receive` is called.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChatSession {
    messages: Vec<Message>,
    typing: bool,
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn is_typing(&self) -> bool {
        self.typing
    }

    /// Render the user's text and raise the typing indicator.
    ///
    /// Returns the text to send, or `None` for empty/whitespace-only input,
    /// in which case nothing changes.
    pub fn submit(&mut self, raw: &str) -> Option<String> {
        if raw.trim().is_empty() {
            return None;
        }
        self.messages.push(Message::user(raw));
        self.typing = true;
        Some(raw.to_string())
    }

    /// Render the bot side of a finished exchange and hide the indicator.
    pub fn receive(&mut self, outcome: ReplyOutcome) {
        self.messages.push(Message::bot(outcome.into_text()));
        self.typing = false;
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }
}
