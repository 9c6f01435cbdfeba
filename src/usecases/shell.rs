//! The shell orchestrator: routes events into editing operations.

use anyhow::Result;

use crate::{
    domain::{
        composer_state::ComposerMode,
        events::{AppEvent, KeyInput},
        notification::Toast,
        shell_state::{ActivePane, ShellState},
    },
    infra::config::AppConfig,
};

use super::{
    add_message::{add_message, AddMessageOutcome, Clock, NewMessage},
    contracts::ShellOrchestrator,
    delete_message::delete_message,
    save_participants::{reset_participants, save_participants, ParticipantStore},
    update_participant::{update_participant, ParticipantUpdate},
    update_reaction::{quick_react, update_reaction},
    upload_image::{DecodeQueue, DecodeResult, DecodedImage, ImageTarget},
};

pub struct DefaultShellOrchestrator<S, C>
where
    S: ParticipantStore,
    C: Clock,
{
    state: ShellState,
    store: S,
    clock: C,
    decode_queue: DecodeQueue,
}

impl<S, C> DefaultShellOrchestrator<S, C>
where
    S: ParticipantStore,
    C: Clock,
{
    /// Loads the saved participant pair (defaults when absent) and seeds the
    /// shell state from the config.
    pub fn new(store: S, clock: C, config: &AppConfig) -> Self {
        let participants = store.load();
        let state = ShellState::new(
            config.editor.chat_title.clone(),
            config.editor.toast_ticks,
            participants,
        );

        Self {
            state,
            store,
            clock,
            decode_queue: DecodeQueue::new(),
        }
    }

    fn handle_key(&mut self, key: KeyInput) {
        match self.state.active_pane() {
            ActivePane::Messages => self.handle_messages_key(key),
            ActivePane::Participants => self.handle_participants_key(key),
            ActivePane::Composer => self.handle_composer_key(key),
            ActivePane::ReactionEditor => self.handle_reaction_editor_key(key),
        }
    }

    fn handle_messages_key(&mut self, key: KeyInput) {
        match key.key.as_str() {
            "j" | "down" => self.state.editor_mut().select_next(),
            "k" | "up" => self.state.editor_mut().select_previous(),
            "esc" => self.state.editor_mut().clear_selection(),
            "d" => {
                if let Some(id) = self.selected_message_id() {
                    delete_message(self.state.editor_mut(), &id);
                }
            }
            "e" => {
                self.state.open_reaction_editor();
            }
            "H" => {
                if let Some(id) = self.selected_message_id() {
                    quick_react(self.state.editor_mut(), &id);
                }
            }
            "L" => {
                add_message(self.state.editor_mut(), &self.clock, NewMessage::Like);
            }
            "i" => self.state.open_composer(ComposerMode::Message),
            "u" => self.state.open_composer(ComposerMode::ImagePath),
            "tab" => self.state.editor_mut().toggle_side(),
            "p" => self.state.set_active_pane(ActivePane::Participants),
            "q" => self.state.stop(),
            _ => {}
        }
    }

    fn handle_participants_key(&mut self, key: KeyInput) {
        match key.key.as_str() {
            "j" | "down" => self.state.set_participant_cursor(1),
            "k" | "up" => self.state.set_participant_cursor(0),
            "n" => {
                let index = self.state.participant_cursor();
                let name = self
                    .state
                    .editor()
                    .participant(index)
                    .map(|participant| participant.name.clone())
                    .unwrap_or_default();
                self.state
                    .open_composer_with(ComposerMode::ParticipantName(index), &name);
            }
            "a" => {
                let index = self.state.participant_cursor();
                self.state.open_composer(ComposerMode::AvatarPath(index));
            }
            "o" => {
                let index = self.state.participant_cursor();
                let is_online = self
                    .state
                    .editor()
                    .participant(index)
                    .map(|participant| participant.is_online)
                    .unwrap_or(true);
                if let Err(error) = update_participant(
                    self.state.editor_mut(),
                    index,
                    ParticipantUpdate::SetOnline(!is_online),
                ) {
                    tracing::warn!(error = %error, "online toggle targeted a missing participant");
                }
            }
            "w" => {
                let toast = save_participants(&mut self.store, self.state.editor());
                self.state.show_toast(toast);
            }
            "R" => {
                let toast = reset_participants(&mut self.store, self.state.editor_mut());
                self.state.show_toast(toast);
            }
            "esc" | "p" => self.state.set_active_pane(ActivePane::Messages),
            "q" => self.state.stop(),
            _ => {}
        }
    }

    fn handle_composer_key(&mut self, key: KeyInput) {
        match key.key.as_str() {
            "enter" => self.commit_composer(),
            "esc" => self.state.cancel_composer(),
            "backspace" => self.state.composer_mut().delete_char_before(),
            "delete" => self.state.composer_mut().delete_char_at(),
            "left" => self.state.composer_mut().move_cursor_left(),
            "right" => self.state.composer_mut().move_cursor_right(),
            "home" => self.state.composer_mut().move_cursor_home(),
            "end" => self.state.composer_mut().move_cursor_end(),
            _ => {
                if let Some(ch) = key.as_char() {
                    self.state.composer_mut().insert_char(ch);
                }
            }
        }
    }

    fn commit_composer(&mut self) {
        match self.state.composer_mode() {
            ComposerMode::Message => {
                let draft = self.state.composer().text().to_owned();
                let outcome = add_message(
                    self.state.editor_mut(),
                    &self.clock,
                    NewMessage::Text { draft },
                );
                // Draft clears on append only; the composer stays focused
                // for consecutive messages.
                if matches!(outcome, AddMessageOutcome::Added { .. }) {
                    self.state.composer_mut().clear();
                }
            }
            ComposerMode::ImagePath => {
                if let Some(path) = self.composer_path() {
                    self.decode_queue.spawn_decode(path, ImageTarget::Message);
                    self.state.finish_composer();
                }
            }
            ComposerMode::AvatarPath(index) => {
                if let Some(path) = self.composer_path() {
                    self.decode_queue
                        .spawn_decode(path, ImageTarget::Avatar(index));
                    self.state.finish_composer();
                }
            }
            ComposerMode::ParticipantName(index) => {
                let name = self.state.composer().text().to_owned();
                if let Err(error) = update_participant(
                    self.state.editor_mut(),
                    index,
                    ParticipantUpdate::SetName(name),
                ) {
                    tracing::warn!(error = %error, "name edit targeted a missing participant");
                }
                self.state.finish_composer();
            }
        }
    }

    fn composer_path(&self) -> Option<std::path::PathBuf> {
        let trimmed = self.state.composer().text().trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(std::path::PathBuf::from(trimmed))
    }

    fn handle_reaction_editor_key(&mut self, key: KeyInput) {
        match key.key.as_str() {
            "enter" | "esc" => self.state.close_reaction_editor(),
            "up" => self.cycle_reaction_emoji(false),
            "down" | "tab" => self.cycle_reaction_emoji(true),
            "left" => self.with_reaction_names(|names| names.move_cursor_left()),
            "right" => self.with_reaction_names(|names| names.move_cursor_right()),
            "home" => self.with_reaction_names(|names| names.move_cursor_home()),
            "end" => self.with_reaction_names(|names| names.move_cursor_end()),
            "backspace" => {
                self.with_reaction_names(|names| names.delete_char_before());
                self.apply_reaction_edit();
            }
            "delete" => {
                self.with_reaction_names(|names| names.delete_char_at());
                self.apply_reaction_edit();
            }
            _ => {
                if let Some(ch) = key.as_char() {
                    self.with_reaction_names(|names| {
                        names.insert_char(ch);
                    });
                    self.apply_reaction_edit();
                }
            }
        }
    }

    fn with_reaction_names(
        &mut self,
        edit: impl FnOnce(&mut crate::domain::composer_state::ComposerState),
    ) {
        if let Some(editor) = self.state.reaction_editor_mut() {
            edit(editor.names_mut());
        }
    }

    /// Pushes the current name field into the message, live. Every keystroke
    /// in the editor is immediately reflected in the rendered pills.
    fn apply_reaction_edit(&mut self) {
        let Some((message_id, emoji, raw)) = self.state.reaction_editor().map(|editor| {
            (
                editor.message_id().to_owned(),
                editor.emoji(),
                editor.names().text().to_owned(),
            )
        }) else {
            return;
        };

        update_reaction(self.state.editor_mut(), &message_id, emoji, &raw);
    }

    fn cycle_reaction_emoji(&mut self, forward: bool) {
        let Some(message_id) = self
            .state
            .reaction_editor()
            .map(|editor| editor.message_id().to_owned())
        else {
            return;
        };
        let Some(message) = self.state.editor().message(&message_id).cloned() else {
            return;
        };

        if let Some(editor) = self.state.reaction_editor_mut() {
            if forward {
                editor.cycle_next(&message);
            } else {
                editor.cycle_previous(&message);
            }
        }
    }

    fn selected_message_id(&self) -> Option<String> {
        self.state
            .editor()
            .selected_message_id()
            .map(ToOwned::to_owned)
    }

    fn apply_finished_decodes(&mut self) {
        for result in self.decode_queue.drain() {
            self.apply_decode_result(result);
        }
    }

    fn apply_decode_result(&mut self, result: DecodeResult) {
        match result {
            Ok(DecodedImage {
                target: ImageTarget::Message,
                data_uri,
            }) => {
                add_message(
                    self.state.editor_mut(),
                    &self.clock,
                    NewMessage::Image { data_uri },
                );
            }
            Ok(DecodedImage {
                target: ImageTarget::Avatar(index),
                data_uri,
            }) => {
                if let Err(error) = update_participant(
                    self.state.editor_mut(),
                    index,
                    ParticipantUpdate::SetAvatar(data_uri),
                ) {
                    tracing::warn!(error = %error, "decoded avatar targeted a missing participant");
                }
            }
            Err(failure) => {
                tracing::warn!(
                    path = %failure.path.display(),
                    reason = %failure.reason,
                    "image decode failed"
                );
                self.state
                    .show_toast(Toast::error(format!("Could not read image: {}", failure.reason)));
            }
        }
    }
}

impl<S, C> ShellOrchestrator for DefaultShellOrchestrator<S, C>
where
    S: ParticipantStore,
    C: Clock,
{
    fn state(&self) -> &ShellState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut ShellState {
        &mut self.state
    }

    fn handle_event(&mut self, event: AppEvent) -> Result<()> {
        self.apply_finished_decodes();

        match event {
            AppEvent::Tick => self.state.tick_toast(),
            AppEvent::QuitRequested => self.state.stop(),
            AppEvent::InputKey(key) => self.handle_key(key),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{message::MessageKind, notification::ToastKind, participant::MessageSide},
        infra::stubs::InMemoryParticipantStore,
        test_support::FixedClock,
        usecases::upload_image::DecodeFailure,
    };

    fn orchestrator() -> DefaultShellOrchestrator<InMemoryParticipantStore, FixedClock> {
        DefaultShellOrchestrator::new(
            InMemoryParticipantStore::default(),
            FixedClock::at(1_700_000_000_000, "10:07 AM"),
            &AppConfig::default(),
        )
    }

    fn key(key: &str) -> AppEvent {
        AppEvent::InputKey(KeyInput::new(key, false))
    }

    fn press(
        orchestrator: &mut DefaultShellOrchestrator<InMemoryParticipantStore, FixedClock>,
        keys: &[&str],
    ) {
        for k in keys {
            orchestrator.handle_event(key(k)).expect("key must be handled");
        }
    }

    #[test]
    fn stops_on_quit_event() {
        let mut orchestrator = orchestrator();

        orchestrator
            .handle_event(AppEvent::QuitRequested)
            .expect("event must be handled");

        assert!(!orchestrator.state().is_running());
    }

    #[test]
    fn q_quits_in_messages_pane_but_types_in_composer() {
        let mut orchestrator = orchestrator();

        press(&mut orchestrator, &["i", "q"]);

        assert!(orchestrator.state().is_running());
        assert_eq!(orchestrator.state().composer().text(), "q");
    }

    #[test]
    fn composing_and_committing_appends_a_text_message() {
        let mut orchestrator = orchestrator();

        press(&mut orchestrator, &["i", "h", "i", "enter"]);

        let state = orchestrator.state();
        assert_eq!(state.editor().messages().len(), 3);
        assert_eq!(state.editor().messages()[2].text, "hi");
        assert_eq!(state.composer().text(), "");
    }

    #[test]
    fn committing_an_empty_draft_appends_nothing_and_keeps_focus() {
        let mut orchestrator = orchestrator();

        press(&mut orchestrator, &["i", "enter"]);

        let state = orchestrator.state();
        assert_eq!(state.editor().messages().len(), 2);
        assert_eq!(state.active_pane(), ActivePane::Composer);
    }

    #[test]
    fn tab_toggles_the_default_side_for_new_messages() {
        let mut orchestrator = orchestrator();

        press(&mut orchestrator, &["tab", "i", "h", "i", "enter"]);

        let appended = &orchestrator.state().editor().messages()[2];
        assert_eq!(appended.side, MessageSide::Right);
        assert_eq!(appended.sender_id, "user-2");
    }

    #[test]
    fn delete_key_removes_the_selected_message() {
        let mut orchestrator = orchestrator();

        press(&mut orchestrator, &["j", "d"]);

        let ids: Vec<&str> = orchestrator
            .state()
            .editor()
            .messages()
            .iter()
            .map(|m| m.id.as_str())
            .collect();
        assert_eq!(ids, vec!["2"]);
    }

    #[test]
    fn like_key_appends_a_like_sticker() {
        let mut orchestrator = orchestrator();

        press(&mut orchestrator, &["L"]);

        let appended = &orchestrator.state().editor().messages()[2];
        assert_eq!(appended.kind, MessageKind::Like);
    }

    #[test]
    fn quick_react_applies_the_heart_shortcut_to_the_selection() {
        let mut orchestrator = orchestrator();

        press(&mut orchestrator, &["j", "j", "H"]);

        let message = orchestrator
            .state()
            .editor()
            .message("2")
            .expect("seed message must exist");
        assert!(message.reaction("❤️").is_some());
    }

    #[test]
    fn reaction_editor_typing_updates_the_message_live() {
        let mut orchestrator = orchestrator();

        // Select the second seed message and type one reactor name.
        press(&mut orchestrator, &["j", "j", "e", "B", "o", "b"]);

        let message = orchestrator
            .state()
            .editor()
            .message("2")
            .expect("seed message must exist");
        assert_eq!(
            message.reaction("😍").map(|group| group.names.clone()),
            Some(vec!["Bob".to_owned()])
        );

        // Clearing the field removes the group again.
        press(
            &mut orchestrator,
            &["backspace", "backspace", "backspace", "enter"],
        );
        let message = orchestrator
            .state()
            .editor()
            .message("2")
            .expect("seed message must exist");
        assert!(message.reaction("😍").is_none());
    }

    #[test]
    fn save_key_persists_the_pair_and_toasts_success() {
        let mut orchestrator = orchestrator();

        press(&mut orchestrator, &["p", "w"]);

        assert!(!orchestrator.store.is_empty());
        assert_eq!(
            orchestrator.state().toast().map(|toast| toast.kind),
            Some(ToastKind::Success)
        );
    }

    #[test]
    fn reset_key_restores_defaults_and_clears_the_store() {
        let mut orchestrator = orchestrator();
        press(&mut orchestrator, &["p", "w", "R"]);

        assert!(orchestrator.store.is_empty());
        assert_eq!(
            orchestrator.state().toast().map(|toast| toast.kind),
            Some(ToastKind::Success)
        );
    }

    #[test]
    fn toast_dismisses_after_configured_ticks() {
        let mut orchestrator = orchestrator();
        press(&mut orchestrator, &["p", "w"]);
        assert!(orchestrator.state().toast().is_some());

        for _ in 0..AppConfig::default().editor.toast_ticks {
            orchestrator
                .handle_event(AppEvent::Tick)
                .expect("tick must be handled");
        }

        assert!(orchestrator.state().toast().is_none());
    }

    #[test]
    fn decoded_message_image_is_appended_on_the_next_event() {
        let mut orchestrator = orchestrator();
        orchestrator.decode_queue.push_for_test(Ok(DecodedImage {
            target: ImageTarget::Message,
            data_uri: "data:image/png;base64,AAAA".to_owned(),
        }));

        orchestrator
            .handle_event(AppEvent::Tick)
            .expect("tick must be handled");

        let appended = &orchestrator.state().editor().messages()[2];
        assert_eq!(appended.kind, MessageKind::Image);
        assert_eq!(appended.text, "data:image/png;base64,AAAA");
    }

    #[test]
    fn decoded_avatar_is_applied_by_index_lookup() {
        let mut orchestrator = orchestrator();
        orchestrator.decode_queue.push_for_test(Ok(DecodedImage {
            target: ImageTarget::Avatar(0),
            data_uri: "data:image/png;base64,AAAA".to_owned(),
        }));

        orchestrator
            .handle_event(AppEvent::Tick)
            .expect("tick must be handled");

        let state = orchestrator.state();
        assert_eq!(
            state.editor().participants()[0].avatar,
            "data:image/png;base64,AAAA"
        );
        assert_eq!(state.editor().messages().len(), 2);
    }

    #[test]
    fn decode_failure_surfaces_as_an_error_toast() {
        let mut orchestrator = orchestrator();
        orchestrator.decode_queue.push_for_test(Err(DecodeFailure {
            path: "/tmp/missing.png".into(),
            reason: "No such file or directory".to_owned(),
        }));

        orchestrator
            .handle_event(AppEvent::Tick)
            .expect("tick must be handled");

        assert_eq!(
            orchestrator.state().toast().map(|toast| toast.kind),
            Some(ToastKind::Error)
        );
    }

    #[test]
    fn avatar_path_prompt_spawns_decode_for_the_chosen_participant() {
        let mut file = tempfile::NamedTempFile::with_suffix(".png")
            .expect("temp file must be creatable");
        use std::io::Write as _;
        file.write_all(&[0x89, b'P', b'N', b'G']).expect("bytes written");
        let path = file.path().to_string_lossy().to_string();

        let mut orchestrator = orchestrator();
        press(&mut orchestrator, &["p", "j", "a"]);
        for ch in path.chars() {
            let key_name = ch.to_string();
            press(&mut orchestrator, &[key_name.as_str()]);
        }
        press(&mut orchestrator, &["enter"]);

        // Wait for the worker, then let the next event apply the result.
        let deadline = std::time::Instant::now() + std::time::Duration::from_secs(5);
        while orchestrator.state().editor().participants()[1]
            .avatar
            .starts_with("https://")
            && std::time::Instant::now() < deadline
        {
            orchestrator
                .handle_event(AppEvent::Tick)
                .expect("tick must be handled");
            std::thread::yield_now();
        }

        assert!(orchestrator.state().editor().participants()[1]
            .avatar
            .starts_with("data:image/png;base64,"));
    }
}
