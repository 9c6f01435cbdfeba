//! In-memory test doubles for the infra contracts.

use anyhow::Result;

use crate::domain::participant::{default_participants, Participant};
use crate::infra::config::AppConfig;
use crate::infra::contracts::ConfigAdapter;
use crate::infra::participant_store::SAVE_QUOTA_BYTES;
use crate::usecases::save_participants::{ParticipantStore, SaveError};

#[derive(Debug, Clone, Default)]
pub struct StubConfigAdapter;

impl ConfigAdapter for StubConfigAdapter {
    fn load(&self) -> Result<AppConfig> {
        Ok(AppConfig::default())
    }
}

/// Single-key blob store held in memory, with a configurable quota.
#[derive(Debug, Clone)]
pub struct InMemoryParticipantStore {
    blob: Option<String>,
    quota: usize,
}

impl Default for InMemoryParticipantStore {
    fn default() -> Self {
        Self {
            blob: None,
            quota: SAVE_QUOTA_BYTES,
        }
    }
}

impl InMemoryParticipantStore {
    pub fn with_quota(quota: usize) -> Self {
        Self {
            blob: None,
            quota,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.blob.is_none()
    }
}

impl ParticipantStore for InMemoryParticipantStore {
    fn save(&mut self, participants: &[Participant; 2]) -> Result<(), SaveError> {
        let blob = serde_json::to_string(participants).map_err(SaveError::Serialize)?;
        if blob.len() > self.quota {
            return Err(SaveError::QuotaExceeded {
                size: blob.len(),
                quota: self.quota,
            });
        }

        self.blob = Some(blob);
        Ok(())
    }

    fn load(&self) -> [Participant; 2] {
        self.blob
            .as_deref()
            .and_then(|raw| serde_json::from_str::<Vec<Participant>>(raw).ok())
            .and_then(|parsed| <[Participant; 2]>::try_from(parsed).ok())
            .unwrap_or_else(default_participants)
    }

    fn reset(&mut self) -> Result<(), SaveError> {
        self.blob = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stub_config_returns_defaults() {
        let adapter = StubConfigAdapter;
        let config = adapter.load().expect("stub config must load");

        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn in_memory_store_round_trips() {
        let mut store = InMemoryParticipantStore::default();
        let mut pair = default_participants();
        pair[0].name = "edited".to_owned();

        store.save(&pair).expect("save must succeed");

        assert_eq!(store.load(), pair);
    }
}
