//! Use case layer: editing operations and application workflows.

pub mod add_message;
pub mod bootstrap;
pub mod context;
pub mod contracts;
pub mod delete_message;
pub mod save_participants;
pub mod shell;
pub mod update_participant;
pub mod update_reaction;
pub mod upload_image;

/// Returns the usecases module name for smoke checks.
pub fn module_name() -> &'static str {
    "usecases"
}
