//! File-backed participant store: one JSON blob under a well-known key in
//! the app's config directory.

use std::{fs, io, path::PathBuf};

use crate::domain::participant::{default_participants, Participant};
use crate::infra::storage_layout::StorageLayout;
use crate::usecases::save_participants::{ParticipantStore, SaveError};

/// Size limit for the serialized blob, in the ballpark browsers give a
/// single origin. Inline data-URI avatars are what runs into it.
pub const SAVE_QUOTA_BYTES: usize = 5 * 1024 * 1024;

#[derive(Debug, Clone)]
pub struct FileParticipantStore {
    path: PathBuf,
}

impl FileParticipantStore {
    pub fn new(layout: &StorageLayout) -> Self {
        Self {
            path: layout.participants_file(),
        }
    }

    #[cfg(test)]
    pub fn at(path: PathBuf) -> Self {
        Self { path }
    }
}

impl ParticipantStore for FileParticipantStore {
    fn save(&mut self, participants: &[Participant; 2]) -> Result<(), SaveError> {
        let blob = serde_json::to_string(participants).map_err(SaveError::Serialize)?;
        if blob.len() > SAVE_QUOTA_BYTES {
            // Checked before touching the file so the previous blob survives.
            return Err(SaveError::QuotaExceeded {
                size: blob.len(),
                quota: SAVE_QUOTA_BYTES,
            });
        }

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(SaveError::Write)?;
        }
        fs::write(&self.path, blob).map_err(SaveError::Write)
    }

    fn load(&self) -> [Participant; 2] {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(error) if error.kind() == io::ErrorKind::NotFound => {
                tracing::debug!("no saved participant blob, using defaults");
                return default_participants();
            }
            Err(error) => {
                tracing::warn!(error = %error, "failed to read participant blob, using defaults");
                return default_participants();
            }
        };

        parse_blob(&raw).unwrap_or_else(|reason| {
            tracing::warn!(reason, "discarding unusable participant blob");
            default_participants()
        })
    }

    fn reset(&mut self) -> Result<(), SaveError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(error) => Err(SaveError::Write(error)),
        }
    }
}

fn parse_blob(raw: &str) -> Result<[Participant; 2], &'static str> {
    let parsed: Vec<Participant> = serde_json::from_str(raw).map_err(|_| "malformed JSON")?;
    <[Participant; 2]>::try_from(parsed).map_err(|_| "expected exactly two participants")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> FileParticipantStore {
        FileParticipantStore::at(dir.path().join("participants.json"))
    }

    fn pair_named(first: &str, second: &str) -> [Participant; 2] {
        let mut pair = default_participants();
        pair[0].name = first.to_owned();
        pair[1].name = second.to_owned();
        pair
    }

    #[test]
    fn save_then_load_round_trips_the_pair() {
        let dir = tempfile::tempdir().expect("temp dir must be creatable");
        let mut store = store_in(&dir);
        let pair = pair_named("Một", "Hai");

        store.save(&pair).expect("save must succeed");

        assert_eq!(store.load(), pair);
    }

    #[test]
    fn load_returns_defaults_when_nothing_was_saved() {
        let dir = tempfile::tempdir().expect("temp dir must be creatable");
        let store = store_in(&dir);

        assert_eq!(store.load(), default_participants());
    }

    #[test]
    fn load_absorbs_malformed_json_into_defaults() {
        let dir = tempfile::tempdir().expect("temp dir must be creatable");
        let store = store_in(&dir);
        fs::write(dir.path().join("participants.json"), "{not json")
            .expect("blob must be writable");

        assert_eq!(store.load(), default_participants());
    }

    #[test]
    fn load_absorbs_wrong_cardinality_into_defaults() {
        let dir = tempfile::tempdir().expect("temp dir must be creatable");
        let store = store_in(&dir);
        fs::write(
            dir.path().join("participants.json"),
            r#"[{"id": "x", "name": "only one", "avatar": "", "isOnline": false}]"#,
        )
        .expect("blob must be writable");

        assert_eq!(store.load(), default_participants());
    }

    #[test]
    fn oversized_blob_fails_with_quota_and_keeps_previous_value() {
        let dir = tempfile::tempdir().expect("temp dir must be creatable");
        let mut store = store_in(&dir);
        let saved = pair_named("Giữ", "Nguyên");
        store.save(&saved).expect("save must succeed");

        let mut oversized = saved.clone();
        oversized[0].avatar = format!("data:image/png;base64,{}", "A".repeat(SAVE_QUOTA_BYTES));

        let error = store.save(&oversized).expect_err("save must hit the quota");

        assert!(matches!(error, SaveError::QuotaExceeded { .. }));
        assert_eq!(store.load(), saved);
    }

    #[test]
    fn reset_removes_the_key_and_is_idempotent() {
        let dir = tempfile::tempdir().expect("temp dir must be creatable");
        let mut store = store_in(&dir);
        store
            .save(&default_participants())
            .expect("save must succeed");

        store.reset().expect("reset must succeed");
        assert!(!dir.path().join("participants.json").exists());

        store.reset().expect("second reset must also succeed");
        assert_eq!(store.load(), default_participants());
    }
}
