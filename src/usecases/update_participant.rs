//! Use case for editing one field of one participant.

use thiserror::Error;

use crate::domain::editor_state::EditorState;

/// Discrete field updates; the participant id is never editable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParticipantUpdate {
    SetName(String),
    SetAvatar(String),
    SetOnline(bool),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UpdateParticipantError {
    #[error("participant index {0} is out of range (expected 0 or 1)")]
    InvalidIndex(usize),
}

/// Applies `update` to the participant at `index`. The pair never grows:
/// an index outside {0, 1} is an explicit failure, not an extension.
pub fn update_participant(
    state: &mut EditorState,
    index: usize,
    update: ParticipantUpdate,
) -> Result<(), UpdateParticipantError> {
    let Some(participant) = state.participant_mut(index) else {
        return Err(UpdateParticipantError::InvalidIndex(index));
    };

    match update {
        ParticipantUpdate::SetName(name) => participant.name = name,
        ParticipantUpdate::SetAvatar(avatar) => participant.avatar = avatar,
        ParticipantUpdate::SetOnline(is_online) => participant.is_online = is_online,
    }
    Ok(())
}
