//! Domain layer: core entities and business rules.

pub mod composer_state;
pub mod editor_state;
pub mod events;
pub mod message;
pub mod notification;
pub mod participant;
pub mod reaction_editor_state;
pub mod shell_state;

/// Returns the domain module name for smoke checks.
pub fn module_name() -> &'static str {
    "domain"
}
