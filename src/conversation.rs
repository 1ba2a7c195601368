use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Local};

use crate::intent::ResponseData;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Assistant,
}

/// One transcript entry. Immutable once stored; owned by the
/// `Conversation` alone.
#[derive(Debug, Clone)]
pub struct Message {
    pub id: String,
    pub text: String,
    pub sender: Sender,
    pub timestamp: DateTime<Local>,
    pub data: Option<ResponseData>,
    pub show_chart: bool,
    pub show_comparison: bool,
    pub suggestions: Vec<String>,
}

static NEXT_SEQ: AtomicU64 = AtomicU64::new(0);

/// Creation-time id: unix millis plus a session-monotonic sequence so
/// messages created in the same millisecond stay distinct.
fn next_id() -> String {
    let seq = NEXT_SEQ.fetch_add(1, Ordering::Relaxed);
    format!("{}-{}", Local::now().timestamp_millis(), seq)
}

impl Message {
    pub fn user(text: &str) -> Self {
        Self {
            id: next_id(),
            text: text.to_string(),
            sender: Sender::User,
            timestamp: Local::now(),
            data: None,
            show_chart: false,
            show_comparison: false,
            suggestions: Vec::new(),
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            id: next_id(),
            text: text.into(),
            sender: Sender::Assistant,
            timestamp: Local::now(),
            data: None,
            show_chart: false,
            show_comparison: false,
            suggestions: Vec::new(),
        }
    }
}

/// Append-only message sequence plus the single pending-reply flag.
/// All mutation happens on the main event loop.
pub struct Conversation {
    messages: Vec<Message>,
    pending: bool,
}

impl Conversation {
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
            pending: false,
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Starts a user turn: stores the trimmed text and enters the
    /// pending state. Rejects blank input and rejects a new turn while
    /// a reply is still pending. Returns the stored text on success.
    pub fn begin_turn(&mut self, text: &str) -> Option<String> {
        let trimmed = text.trim();
        if trimmed.is_empty() || self.pending {
            return None;
        }
        self.pending = true;
        let message = Message::user(trimmed);
        let stored = message.text.clone();
        self.messages.push(message);
        Some(stored)
    }

    /// Finishes the turn begun by `begin_turn` with the assistant reply.
    pub fn complete_turn(&mut self, reply: Message) {
        self.messages.push(reply);
        self.pending = false;
    }

    /// Appends an assistant notice (voice errors and the like) without
    /// touching the pending flag.
    pub fn push_notice(&mut self, notice: Message) {
        self.messages.push(notice);
    }

    /// Replaces the whole transcript with a single greeting. Used once,
    /// when the location outcome arrives.
    pub fn reset_with(&mut self, greeting: Message) {
        self.messages.clear();
        self.messages.push(greeting);
    }

    pub fn latest_assistant(&self) -> Option<&Message> {
        self.messages.iter().rev().find(|m| m.sender == Sender::Assistant)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turn_appends_user_then_assistant() {
        let mut conv = Conversation::new();
        let stored = conv.begin_turn("  hello  ");
        assert_eq!(stored.as_deref(), Some("hello"));
        assert!(conv.is_pending());
        assert_eq!(conv.messages().len(), 1);
        assert_eq!(conv.messages()[0].sender, Sender::User);
        assert_eq!(conv.messages()[0].text, "hello");

        conv.complete_turn(Message::assistant("hi there"));
        assert!(!conv.is_pending());
        assert_eq!(conv.messages().len(), 2);
        assert_eq!(conv.messages()[1].sender, Sender::Assistant);
    }

    #[test]
    fn test_blank_input_is_rejected() {
        let mut conv = Conversation::new();
        assert!(conv.begin_turn("").is_none());
        assert!(conv.begin_turn("   ").is_none());
        assert!(conv.messages().is_empty());
        assert!(!conv.is_pending());
    }

    #[test]
    fn test_submit_while_pending_is_noop() {
        let mut conv = Conversation::new();
        assert!(conv.begin_turn("first").is_some());
        assert!(conv.begin_turn("second").is_none());
        assert_eq!(conv.messages().len(), 1);
        assert!(conv.is_pending());
    }

    #[test]
    fn test_reset_with_replaces_history() {
        let mut conv = Conversation::new();
        conv.push_notice(Message::assistant("old"));
        conv.push_notice(Message::assistant("older"));
        conv.reset_with(Message::assistant("greeting"));
        assert_eq!(conv.messages().len(), 1);
        assert_eq!(conv.messages()[0].text, "greeting");
    }

    #[test]
    fn test_notice_keeps_pending_flag() {
        let mut conv = Conversation::new();
        conv.begin_turn("query");
        conv.push_notice(Message::assistant("voice failed"));
        assert!(conv.is_pending());
        assert_eq!(conv.messages().len(), 2);
    }

    #[test]
    fn test_latest_assistant_skips_user_turns() {
        let mut conv = Conversation::new();
        conv.push_notice(Message::assistant("greeting"));
        conv.begin_turn("question");
        assert_eq!(conv.latest_assistant().map(|m| m.text.as_str()), Some("greeting"));
        conv.complete_turn(Message::assistant("answer"));
        assert_eq!(conv.latest_assistant().map(|m| m.text.as_str()), Some("answer"));
    }

    #[test]
    fn test_message_ids_are_unique() {
        let a = Message::user("a");
        let b = Message::user("b");
        assert_ne!(a.id, b.id);
    }
}
