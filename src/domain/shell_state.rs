use super::composer_state::{ComposerMode, ComposerState};
use super::editor_state::EditorState;
use super::notification::{Toast, ToastState};
use super::participant::{default_participants, Participant};
use super::reaction_editor_state::ReactionEditorState;

/// Which part of the editor owns key input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActivePane {
    #[default]
    Messages,
    Participants,
    Composer,
    ReactionEditor,
}

/// Top-level TUI state: the conversation under edit plus the interaction
/// state around it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellState {
    running: bool,
    active_pane: ActivePane,
    chat_title: String,
    editor: EditorState,
    composer: ComposerState,
    composer_mode: ComposerMode,
    participant_cursor: usize,
    reaction_editor: Option<ReactionEditorState>,
    toast: ToastState,
}

impl ShellState {
    pub fn new(chat_title: String, toast_ticks: u32, participants: [Participant; 2]) -> Self {
        Self {
            running: true,
            active_pane: ActivePane::Messages,
            chat_title,
            editor: EditorState::new(participants),
            composer: ComposerState::default(),
            composer_mode: ComposerMode::Message,
            participant_cursor: 0,
            reaction_editor: None,
            toast: ToastState::new(toast_ticks),
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn active_pane(&self) -> ActivePane {
        self.active_pane
    }

    pub fn set_active_pane(&mut self, pane: ActivePane) {
        self.active_pane = pane;
    }

    pub fn chat_title(&self) -> &str {
        &self.chat_title
    }

    pub fn editor(&self) -> &EditorState {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut EditorState {
        &mut self.editor
    }

    pub fn composer(&self) -> &ComposerState {
        &self.composer
    }

    pub fn composer_mut(&mut self) -> &mut ComposerState {
        &mut self.composer
    }

    pub fn composer_mode(&self) -> ComposerMode {
        self.composer_mode
    }

    /// Focuses the composer in `mode`. Switching modes discards the previous
    /// prompt text; re-entering the message mode keeps the pending draft.
    pub fn open_composer(&mut self, mode: ComposerMode) {
        if self.composer_mode != mode {
            self.composer.clear();
        }
        self.composer_mode = mode;
        self.active_pane = ActivePane::Composer;
    }

    /// Focuses the composer in `mode` with the field prefilled.
    pub fn open_composer_with(&mut self, mode: ComposerMode, prefill: &str) {
        self.composer.set_text(prefill);
        self.composer_mode = mode;
        self.active_pane = ActivePane::Composer;
    }

    /// Leaves the composer without committing. Prompt modes discard their
    /// text; a message draft is kept for later.
    pub fn cancel_composer(&mut self) {
        if self.composer_mode != ComposerMode::Message {
            self.composer.clear();
        }
        self.active_pane = self.composer_home_pane();
    }

    /// Leaves the composer after a successful commit, clearing the field.
    pub fn finish_composer(&mut self) {
        self.composer.clear();
        self.active_pane = self.composer_home_pane();
    }

    fn composer_home_pane(&self) -> ActivePane {
        match self.composer_mode {
            ComposerMode::Message | ComposerMode::ImagePath => ActivePane::Messages,
            ComposerMode::AvatarPath(_) | ComposerMode::ParticipantName(_) => {
                ActivePane::Participants
            }
        }
    }

    pub fn participant_cursor(&self) -> usize {
        self.participant_cursor
    }

    pub fn set_participant_cursor(&mut self, index: usize) {
        self.participant_cursor = index.min(1);
    }

    pub fn reaction_editor(&self) -> Option<&ReactionEditorState> {
        self.reaction_editor.as_ref()
    }

    pub fn reaction_editor_mut(&mut self) -> Option<&mut ReactionEditorState> {
        self.reaction_editor.as_mut()
    }

    /// Opens the reaction editor on the selected message. Returns false when
    /// nothing is selected.
    pub fn open_reaction_editor(&mut self) -> bool {
        let Some(message) = self.editor.selected_message() else {
            return false;
        };

        self.reaction_editor = Some(ReactionEditorState::open_for(message));
        self.active_pane = ActivePane::ReactionEditor;
        true
    }

    pub fn close_reaction_editor(&mut self) {
        self.reaction_editor = None;
        self.active_pane = ActivePane::Messages;
    }

    pub fn toast(&self) -> Option<&Toast> {
        self.toast.current()
    }

    pub fn show_toast(&mut self, toast: Toast) {
        self.toast.show(toast);
    }

    pub fn tick_toast(&mut self) {
        self.toast.tick();
    }
}

impl Default for ShellState {
    fn default() -> Self {
        Self::new("Group Chat".to_owned(), 30, default_participants())
    }
}
