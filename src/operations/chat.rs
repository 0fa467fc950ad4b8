// Chat Modal
// Simulated one-sided conversation with a gallery profile

use chrono::{DateTime, Local};
use tracing::debug;

use crate::utilities::InputLine;

/// A message the user sent
#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub text: String,
    pub sent_at: DateTime<Local>,
}

impl ChatMessage {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sent_at: Local::now(),
        }
    }

    pub fn time_label(&self) -> String {
        format_time(&self.sent_at)
    }
}

/// Wall-clock label shown under messages
pub fn format_time(at: &DateTime<Local>) -> String {
    at.format("%H:%M:%S").to_string()
}

#[derive(Debug, Clone)]
pub struct ChatSession {
    profile_name: String,
    messages: Vec<ChatMessage>,
    pub input: InputLine,
}

impl ChatSession {
    pub fn new(profile_name: impl Into<String>) -> Self {
        Self {
            profile_name: profile_name.into(),
            messages: Vec::new(),
            input: InputLine::new(),
        }
    }

    pub fn profile_name(&self) -> &str {
        &self.profile_name
    }

    pub fn title(&self) -> String {
        format!("Chat with {}", self.profile_name)
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// "Start a conversation" is shown until the first message
    pub fn show_placeholder(&self) -> bool {
        self.messages.is_empty()
    }

    /// Send the trimmed input; blank input is ignored and left in place
    pub fn send(&mut self) -> Option<&ChatMessage> {
        if self.input.is_blank() {
            return None;
        }
        let text = self.input.take().trim().to_string();
        debug!(to = %self.profile_name, "chat message sent");
        self.messages.push(ChatMessage::new(text));
        self.messages.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_and_placeholder() {
        let chat = ChatSession::new("Emma");
        assert_eq!(chat.title(), "Chat with Emma");
        assert!(chat.show_placeholder());
    }

    #[test]
    fn test_send_trims_and_clears_input() {
        let mut chat = ChatSession::new("Emma");
        "  hello there ".chars().for_each(|c| chat.input.insert(c));

        let sent = chat.send().map(|m| m.text.clone());
        assert_eq!(sent.as_deref(), Some("hello there"));
        assert_eq!(chat.input.value(), "");
        assert!(!chat.show_placeholder());
    }

    #[test]
    fn test_blank_input_is_ignored() {
        let mut chat = ChatSession::new("Emma");
        chat.input.insert(' ');
        assert!(chat.send().is_none());
        assert!(chat.messages().is_empty());
        assert_eq!(chat.input.value(), " ");
    }

    #[test]
    fn test_time_label_format() {
        let message = ChatMessage::new("hi");
        let label = message.time_label();
        assert_eq!(label.len(), 8);
        assert_eq!(label.matches(':').count(), 2);
    }
}
