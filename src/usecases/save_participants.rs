//! Use cases for persisting and resetting the participant configuration.
//!
//! Store failures never propagate past this boundary: every outcome is
//! converted into a toast for the shell to display.

use thiserror::Error;

use crate::domain::{
    editor_state::EditorState,
    notification::Toast,
    participant::{default_participants, Participant},
};

/// Errors surfaced by a participant store on write.
#[derive(Debug, Error)]
pub enum SaveError {
    /// The serialized blob is over the store's size limit. Large inline
    /// avatar images are the usual culprit; the store keeps its previous
    /// value.
    #[error("participant blob of {size} bytes exceeds the {quota}-byte quota")]
    QuotaExceeded { size: usize, quota: usize },
    #[error("failed to serialize participants: {0}")]
    Serialize(#[source] serde_json::Error),
    #[error("failed to write participant blob: {0}")]
    Write(#[source] std::io::Error),
}

/// The single-key blob store holding the participant pair.
pub trait ParticipantStore {
    /// Persists the pair under the store's well-known key.
    fn save(&mut self, participants: &[Participant; 2]) -> Result<(), SaveError>;

    /// Loads the saved pair. A missing or unparseable blob is absorbed into
    /// the hardcoded default pair; this never fails upward.
    fn load(&self) -> [Participant; 2];

    /// Deletes the well-known key. A key that was never written is success.
    fn reset(&mut self) -> Result<(), SaveError>;
}

/// Writes the current pair to the store, reporting the outcome as a toast.
/// Quota failures get their own message so the user knows to shrink the
/// avatar rather than retry.
pub fn save_participants(store: &mut dyn ParticipantStore, state: &EditorState) -> Toast {
    match store.save(state.participants()) {
        Ok(()) => {
            tracing::info!("participant configuration saved");
            Toast::success("Participant profiles saved")
        }
        Err(SaveError::QuotaExceeded { size, quota }) => {
            tracing::warn!(size, quota, "participant blob over store quota");
            Toast::error("Avatar image too large to save. Use a smaller image.")
        }
        Err(error) => {
            tracing::warn!(error = %error, "failed to save participant configuration");
            Toast::error("Failed to save participant profiles")
        }
    }
}

/// Restores the hardcoded default pair in memory and deletes the persisted
/// key, reporting the outcome as a toast.
pub fn reset_participants(store: &mut dyn ParticipantStore, state: &mut EditorState) -> Toast {
    state.set_participants(default_participants());

    match store.reset() {
        Ok(()) => {
            tracing::info!("participant configuration reset");
            Toast::success("Participants reset to defaults")
        }
        Err(error) => {
            tracing::warn!(error = %error, "failed to delete participant blob");
            Toast::error("Failed to clear the saved profiles")
        }
    }
}
