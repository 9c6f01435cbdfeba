//! Use case for editing the reaction groups of a message.

use crate::domain::{
    editor_state::EditorState,
    message::{ReactionGroup, QUICK_REACT_NAME},
};

/// Emoji applied by the one-key reaction shortcut.
const QUICK_REACT_EMOJI: &str = "❤️";

/// Parses a comma-separated reactor-name field: entries are trimmed and
/// empty entries dropped.
pub fn parse_reactor_names(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

/// Replaces the reaction group for `emoji` on the given message with the
/// names parsed from `names_raw`. An empty name list deletes the group
/// instead of storing it empty, keeping at most one group per emoji. An
/// unknown message id is a silent no-op. Returns whether a message matched.
pub fn update_reaction(
    state: &mut EditorState,
    message_id: &str,
    emoji: &str,
    names_raw: &str,
) -> bool {
    let Some(message) = state.message_mut(message_id) else {
        return false;
    };

    let names = parse_reactor_names(names_raw);
    message.reactions.retain(|group| group.emoji != emoji);
    if !names.is_empty() {
        message.reactions.push(ReactionGroup::new(emoji, names));
    }
    true
}

/// The ❤️ shortcut: stamps the fixed default reactor name onto the message.
pub fn quick_react(state: &mut EditorState, message_id: &str) -> bool {
    update_reaction(state, message_id, QUICK_REACT_EMOJI, QUICK_REACT_NAME)
}
