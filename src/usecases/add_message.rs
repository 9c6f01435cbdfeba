//! Use case for appending a message to the mockup conversation.

use crate::domain::{
    editor_state::EditorState,
    message::{Message, MessageKind, LIKE_GLYPH},
};

/// Wall-clock source for message ids and display timestamps.
pub trait Clock {
    /// Milliseconds since the Unix epoch.
    fn now_unix_ms(&self) -> i64;
    /// Current time formatted for display, e.g. "10:07 AM".
    fn display_time(&self) -> String;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_unix_ms(&self) -> i64 {
        chrono::Local::now().timestamp_millis()
    }

    fn display_time(&self) -> String {
        chrono::Local::now().format("%I:%M %p").to_string()
    }
}

/// What to append.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NewMessage {
    /// Body from the composer draft, stored as typed.
    Text { draft: String },
    /// Body is an inline image reference.
    Image { data_uri: String },
    /// Body is the fixed like glyph.
    Like,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddMessageOutcome {
    Added { id: String },
    /// A text request whose draft trimmed to nothing; the conversation is
    /// untouched and the draft is kept.
    IgnoredEmptyDraft,
}

/// Appends a message sent by the current default side's participant, with a
/// fresh id, the formatted current time, and no reactions.
pub fn add_message(
    state: &mut EditorState,
    clock: &dyn Clock,
    request: NewMessage,
) -> AddMessageOutcome {
    let (text, kind) = match request {
        NewMessage::Text { draft } => {
            if draft.trim().is_empty() {
                return AddMessageOutcome::IgnoredEmptyDraft;
            }
            (draft, MessageKind::Text)
        }
        NewMessage::Image { data_uri } => (data_uri, MessageKind::Image),
        NewMessage::Like => (LIKE_GLYPH.to_owned(), MessageKind::Like),
    };

    let id = state.next_message_id(clock.now_unix_ms());
    let message = Message {
        id: id.clone(),
        text,
        sender_id: state.sender_for_current_side().id.clone(),
        timestamp: clock.display_time(),
        side: state.side(),
        reactions: vec![],
        kind,
    };
    state.push_message(message);

    AddMessageOutcome::Added { id }
}
