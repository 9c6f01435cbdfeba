use anyhow::Result;

use crate::{
    cli::{Cli, Command},
    domain, infra, ui,
    usecases::{self, bootstrap, save_participants::ParticipantStore},
};

pub fn run(cli: Cli) -> Result<()> {
    match cli.command_or_default() {
        Command::Run => {
            let context = bootstrap::bootstrap(cli.config.as_deref())?;

            tracing::debug!(
                ui = ui::module_name(),
                domain = domain::module_name(),
                usecases = usecases::module_name(),
                infra = infra::module_name(),
                "module boundaries loaded"
            );

            let mut shell = bootstrap::compose_shell(&context);
            ui::shell::start(
                &context,
                shell.event_source.as_mut(),
                shell.orchestrator.as_mut(),
            )?
        }
        Command::Reset => {
            if let Err(error) = bootstrap::bootstrap(cli.config.as_deref()) {
                tracing::warn!(
                    error = ?error,
                    "reset fallback: bootstrap failed, continuing with local cleanup"
                );
            }

            let layout = infra::storage_layout::StorageLayout::resolve()?;
            let mut store = infra::participant_store::FileParticipantStore::new(&layout);
            store.reset()?;

            tracing::info!("participant blob removed");
            println!("Participant configuration reset. The editor will start with the default pair.");
        }
    }

    Ok(())
}
