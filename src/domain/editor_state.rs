use super::message::{seed_messages, Message};
use super::participant::{MessageSide, Participant};

/// Scroll margin - number of rows to keep visible above/below the cursor before scrolling.
const SCROLL_MARGIN: usize = 3;

/// The conversation being fabricated: the participant pair, the message
/// sequence, and the transient editing focus.
///
/// Messages are append-only; no reordering operation exists. The participant
/// pair has fixed cardinality 2 for the lifetime of the process and is only
/// ever replaced wholesale (reset) or edited field-by-field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorState {
    participants: [Participant; 2],
    messages: Vec<Message>,
    selected_message_id: Option<String>,
    side: MessageSide,
    scroll_offset: usize,
    last_issued_id_ms: i64,
}

impl EditorState {
    pub fn new(participants: [Participant; 2]) -> Self {
        Self {
            participants,
            messages: seed_messages(),
            selected_message_id: None,
            side: MessageSide::Left,
            scroll_offset: 0,
            last_issued_id_ms: 0,
        }
    }

    pub fn participants(&self) -> &[Participant; 2] {
        &self.participants
    }

    pub fn participant(&self, index: usize) -> Option<&Participant> {
        self.participants.get(index)
    }

    pub fn participant_mut(&mut self, index: usize) -> Option<&mut Participant> {
        self.participants.get_mut(index)
    }

    /// Replaces the pair wholesale (reset to defaults).
    pub fn set_participants(&mut self, participants: [Participant; 2]) {
        self.participants = participants;
    }

    /// The default sender side for new messages.
    pub fn side(&self) -> MessageSide {
        self.side
    }

    pub fn toggle_side(&mut self) {
        self.side = self.side.toggled();
    }

    pub fn sender_for_current_side(&self) -> &Participant {
        &self.participants[self.side.participant_index()]
    }

    /// Resolves a sender id to its participant, defaulting to the first
    /// participant when the id no longer resolves. A stale id is display
    /// fallback territory, not an error.
    pub fn resolve_sender(&self, sender_id: &str) -> &Participant {
        self.participants
            .iter()
            .find(|participant| participant.id == sender_id)
            .unwrap_or(&self.participants[0])
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn message(&self, id: &str) -> Option<&Message> {
        self.messages.iter().find(|message| message.id == id)
    }

    pub fn message_mut(&mut self, id: &str) -> Option<&mut Message> {
        self.messages.iter_mut().find(|message| message.id == id)
    }

    /// Appends to the tail; insertion order is display order.
    pub fn push_message(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// Removes the message with `id`, clearing the selection if it pointed at
    /// the removed message. Returns false (no-op) when the id is unknown.
    pub fn remove_message(&mut self, id: &str) -> bool {
        let Some(index) = self.messages.iter().position(|message| message.id == id) else {
            return false;
        };

        self.messages.remove(index);
        if self.selected_message_id.as_deref() == Some(id) {
            self.selected_message_id = None;
        }
        true
    }

    /// Issues a fresh message id from the creation timestamp, bumping past
    /// the previously issued id when the clock has not advanced.
    pub fn next_message_id(&mut self, now_ms: i64) -> String {
        let issued = if now_ms > self.last_issued_id_ms {
            now_ms
        } else {
            self.last_issued_id_ms + 1
        };
        self.last_issued_id_ms = issued;
        issued.to_string()
    }

    pub fn selected_message_id(&self) -> Option<&str> {
        self.selected_message_id.as_deref()
    }

    pub fn selected_message(&self) -> Option<&Message> {
        self.selected_message_id
            .as_deref()
            .and_then(|id| self.message(id))
    }

    /// Position of the selected message in display order.
    pub fn selected_index(&self) -> Option<usize> {
        self.selected_message_id
            .as_deref()
            .and_then(|id| self.messages.iter().position(|message| message.id == id))
    }

    pub fn clear_selection(&mut self) {
        self.selected_message_id = None;
    }

    /// Selects the next message (moves down in the list).
    pub fn select_next(&mut self) {
        if self.messages.is_empty() {
            return;
        }

        let index = match self.selected_index() {
            None => 0,
            Some(idx) if idx + 1 < self.messages.len() => idx + 1,
            Some(idx) => idx,
        };
        self.selected_message_id = Some(self.messages[index].id.clone());
    }

    /// Selects the previous message (moves up in the list).
    pub fn select_previous(&mut self) {
        if self.messages.is_empty() {
            return;
        }

        let index = match self.selected_index() {
            None => self.messages.len() - 1,
            Some(0) => 0,
            Some(idx) => idx - 1,
        };
        self.selected_message_id = Some(self.messages[index].id.clone());
    }

    /// Returns the current scroll offset for the message list.
    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Updates the scroll offset so the row at `row_index` stays visible with
    /// SCROLL_MARGIN rows of context, given `viewport_height` visible rows.
    pub fn update_scroll_offset(&mut self, row_index: usize, viewport_height: usize) {
        if viewport_height == 0 {
            return;
        }

        let effective_margin = SCROLL_MARGIN.min(viewport_height / 2);

        // If cursor is too close to the top, scroll up
        if row_index < self.scroll_offset + effective_margin {
            self.scroll_offset = row_index.saturating_sub(effective_margin);
        }

        // If cursor is too close to the bottom, scroll down
        let visible_bottom = self.scroll_offset + viewport_height;
        if row_index + effective_margin >= visible_bottom {
            self.scroll_offset =
                (row_index + effective_margin + 1).saturating_sub(viewport_height);
        }
    }
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new(super::participant::default_participants())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::message::MessageKind;

    fn message(id: &str, text: &str) -> Message {
        Message {
            id: id.to_owned(),
            text: text.to_owned(),
            sender_id: "user-1".to_owned(),
            timestamp: "10:05 AM".to_owned(),
            side: MessageSide::Left,
            reactions: vec![],
            kind: MessageKind::Text,
        }
    }

    #[test]
    fn starts_with_seed_conversation_and_left_side() {
        let state = EditorState::default();

        assert_eq!(state.messages().len(), 2);
        assert_eq!(state.side(), MessageSide::Left);
        assert_eq!(state.selected_message_id(), None);
    }

    #[test]
    fn push_message_appends_in_display_order() {
        let mut state = EditorState::default();

        state.push_message(message("3", "first"));
        state.push_message(message("4", "second"));

        let ids: Vec<&str> = state.messages().iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn remove_message_is_idempotent() {
        let mut state = EditorState::default();

        assert!(state.remove_message("1"));
        assert!(!state.remove_message("1"));
        assert_eq!(state.messages().len(), 1);
    }

    #[test]
    fn remove_message_clears_matching_selection() {
        let mut state = EditorState::default();
        state.select_next();
        assert_eq!(state.selected_message_id(), Some("1"));

        state.remove_message("1");

        assert_eq!(state.selected_message_id(), None);
    }

    #[test]
    fn remove_message_keeps_unrelated_selection() {
        let mut state = EditorState::default();
        state.select_previous();
        assert_eq!(state.selected_message_id(), Some("2"));

        state.remove_message("1");

        assert_eq!(state.selected_message_id(), Some("2"));
    }

    #[test]
    fn select_next_initializes_to_first_then_stops_at_tail() {
        let mut state = EditorState::default();

        state.select_next();
        assert_eq!(state.selected_message_id(), Some("1"));

        state.select_next();
        state.select_next();
        assert_eq!(state.selected_message_id(), Some("2"));
    }

    #[test]
    fn select_previous_initializes_to_last_then_stops_at_head() {
        let mut state = EditorState::default();

        state.select_previous();
        assert_eq!(state.selected_message_id(), Some("2"));

        state.select_previous();
        state.select_previous();
        assert_eq!(state.selected_message_id(), Some("1"));
    }

    #[test]
    fn toggle_side_flips_default_sender() {
        let mut state = EditorState::default();
        assert_eq!(state.sender_for_current_side().id, "user-1");

        state.toggle_side();

        assert_eq!(state.side(), MessageSide::Right);
        assert_eq!(state.sender_for_current_side().id, "user-2");
    }

    #[test]
    fn resolve_sender_falls_back_to_first_participant() {
        let state = EditorState::default();

        assert_eq!(state.resolve_sender("user-2").id, "user-2");
        assert_eq!(state.resolve_sender("no-such-id").id, "user-1");
    }

    #[test]
    fn next_message_id_bumps_past_stalled_clock() {
        let mut state = EditorState::default();

        let first = state.next_message_id(1_000);
        let second = state.next_message_id(1_000);
        let third = state.next_message_id(5_000);

        assert_eq!(first, "1000");
        assert_eq!(second, "1001");
        assert_eq!(third, "5000");
    }

    #[test]
    fn scroll_offset_follows_cursor_near_bottom() {
        let mut state = EditorState::default();

        state.update_scroll_offset(18, 10);

        assert!(state.scroll_offset() > 0);
    }

    #[test]
    fn scroll_offset_stays_put_when_cursor_in_safe_zone() {
        let mut state = EditorState::default();

        state.update_scroll_offset(2, 10);

        assert_eq!(state.scroll_offset(), 0);
    }

    #[test]
    fn scroll_offset_ignores_zero_viewport() {
        let mut state = EditorState::default();
        state.update_scroll_offset(18, 10);
        let offset = state.scroll_offset();

        state.update_scroll_offset(0, 0);

        assert_eq!(state.scroll_offset(), offset);
    }
}
