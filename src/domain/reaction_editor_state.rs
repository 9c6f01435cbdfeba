//! State for the per-message reaction editor.

use super::composer_state::ComposerState;
use super::message::{Message, REACTION_EMOJIS};

/// Editing focus for the reactions of one message: the active emoji from the
/// fixed vocabulary and the comma-separated reactor-name field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReactionEditorState {
    message_id: String,
    emoji_index: usize,
    names: ComposerState,
}

impl ReactionEditorState {
    /// Opens the editor on `message`, loading the name list of the first
    /// vocabulary emoji.
    pub fn open_for(message: &Message) -> Self {
        let mut state = Self {
            message_id: message.id.clone(),
            emoji_index: 0,
            names: ComposerState::default(),
        };
        state.load_names(message);
        state
    }

    pub fn message_id(&self) -> &str {
        &self.message_id
    }

    pub fn emoji(&self) -> &'static str {
        REACTION_EMOJIS[self.emoji_index]
    }

    pub fn emoji_index(&self) -> usize {
        self.emoji_index
    }

    pub fn names(&self) -> &ComposerState {
        &self.names
    }

    pub fn names_mut(&mut self) -> &mut ComposerState {
        &mut self.names
    }

    /// Moves to the next vocabulary emoji, reloading its names from `message`.
    pub fn cycle_next(&mut self, message: &Message) {
        self.emoji_index = (self.emoji_index + 1) % REACTION_EMOJIS.len();
        self.load_names(message);
    }

    /// Moves to the previous vocabulary emoji, reloading its names from `message`.
    pub fn cycle_previous(&mut self, message: &Message) {
        self.emoji_index = (self.emoji_index + REACTION_EMOJIS.len() - 1) % REACTION_EMOJIS.len();
        self.load_names(message);
    }

    fn load_names(&mut self, message: &Message) {
        let names = message
            .reaction(self.emoji())
            .map(|group| group.names.join(", "))
            .unwrap_or_default();
        self.names.set_text(names);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::message::seed_messages;

    #[test]
    fn opens_on_first_vocabulary_emoji_with_its_names() {
        let messages = seed_messages();

        let editor = ReactionEditorState::open_for(&messages[0]);

        assert_eq!(editor.emoji(), "😍");
        assert_eq!(editor.names().text(), "Thảo Bùi, Lê Khanh, Kim Tuyến");
    }

    #[test]
    fn cycling_reloads_names_for_the_new_emoji() {
        let messages = seed_messages();
        let mut editor = ReactionEditorState::open_for(&messages[0]);

        editor.cycle_next(&messages[0]);

        assert_eq!(editor.emoji(), "OK");
        assert_eq!(editor.names().text(), "PHAN XUAN");
    }

    #[test]
    fn cycling_wraps_around_the_vocabulary() {
        let messages = seed_messages();
        let mut editor = ReactionEditorState::open_for(&messages[0]);

        editor.cycle_previous(&messages[0]);

        assert_eq!(editor.emoji(), "👍");
        assert_eq!(editor.names().text(), "");
    }

    #[test]
    fn emoji_without_group_loads_empty_field() {
        let messages = seed_messages();

        let editor = ReactionEditorState::open_for(&messages[1]);

        assert_eq!(editor.names().text(), "");
    }
}
