use std::path::Path;

use crate::{
    infra::{
        self, config::FileConfigAdapter, contracts::ConfigAdapter, error::AppError,
        participant_store::FileParticipantStore, storage_layout::StorageLayout,
    },
    ui,
    usecases::{
        add_message::SystemClock,
        context::AppContext,
        contracts::{AppEventSource, ShellOrchestrator},
        shell::DefaultShellOrchestrator,
    },
};

pub fn bootstrap(config_path: Option<&Path>) -> Result<AppContext, AppError> {
    let context = build_context(config_path)?;
    infra::logging::init(&context.config.logging)?;

    Ok(context)
}

fn build_context(config_path: Option<&Path>) -> Result<AppContext, AppError> {
    let config_adapter = FileConfigAdapter::new(config_path);
    let config = config_adapter.load().map_err(AppError::Other)?;
    let layout = StorageLayout::resolve()?;

    Ok(AppContext::new(config, layout))
}

pub struct ShellComposition {
    pub event_source: Box<dyn AppEventSource>,
    pub orchestrator: Box<dyn ShellOrchestrator>,
}

/// Wires the production shell: file-backed participant store, system clock,
/// crossterm events.
pub fn compose_shell(context: &AppContext) -> ShellComposition {
    let store = FileParticipantStore::new(&context.layout);
    let orchestrator = DefaultShellOrchestrator::new(store, SystemClock, &context.config);

    ShellComposition {
        event_source: Box::new(ui::CrosstermEventSource::default()),
        orchestrator: Box::new(orchestrator),
    }
}
