//! Use case for removing a message from the conversation.

use crate::domain::editor_state::EditorState;

/// Removes the message with `id`. An unknown id is a silent no-op — the
/// best-effort UI policy for stale references — so repeated deletes are
/// idempotent. Returns whether a message was removed.
pub fn delete_message(state: &mut EditorState, id: &str) -> bool {
    state.remove_message(id)
}
