use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};

use crate::{
    domain::events::{AppEvent, KeyInput},
    usecases::contracts::AppEventSource,
};

const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(100);

#[derive(Default)]
pub struct CrosstermEventSource;

impl AppEventSource for CrosstermEventSource {
    fn next_event(&mut self) -> Result<Option<AppEvent>> {
        if !event::poll(EVENT_POLL_TIMEOUT)? {
            return Ok(Some(AppEvent::Tick));
        }

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                return Ok(None);
            }

            let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

            // Ctrl-C quits from any pane, including mid-composition. Plain
            // 'q' is pane-dependent and handled by the orchestrator.
            if key.code == KeyCode::Char('c') && ctrl {
                return Ok(Some(AppEvent::QuitRequested));
            }

            return Ok(map_key_code(key.code, ctrl).map(AppEvent::InputKey));
        }

        Ok(None)
    }
}

fn map_key_code(code: KeyCode, ctrl: bool) -> Option<KeyInput> {
    let key = match code {
        KeyCode::Char(ch) => ch.to_string(),
        KeyCode::Enter => "enter".to_owned(),
        KeyCode::Esc => "esc".to_owned(),
        KeyCode::Backspace => "backspace".to_owned(),
        KeyCode::Delete => "delete".to_owned(),
        KeyCode::Left => "left".to_owned(),
        KeyCode::Right => "right".to_owned(),
        KeyCode::Up => "up".to_owned(),
        KeyCode::Down => "down".to_owned(),
        KeyCode::Home => "home".to_owned(),
        KeyCode::End => "end".to_owned(),
        KeyCode::Tab => "tab".to_owned(),
        _ => return None,
    };

    Some(KeyInput::new(key, ctrl))
}

#[cfg(test)]
pub struct MockEventSource {
    queue: std::collections::VecDeque<AppEvent>,
}

#[cfg(test)]
impl MockEventSource {
    pub fn from(events: Vec<AppEvent>) -> Self {
        Self {
            queue: events.into(),
        }
    }
}

#[cfg(test)]
impl AppEventSource for MockEventSource {
    fn next_event(&mut self) -> Result<Option<AppEvent>> {
        Ok(self.queue.pop_front())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn characters_map_to_single_char_inputs() {
        let input = map_key_code(KeyCode::Char('ạ'), false).expect("char must map");

        assert_eq!(input, KeyInput::new("ạ", false));
    }

    #[test]
    fn editing_keys_map_to_named_inputs() {
        assert_eq!(
            map_key_code(KeyCode::Enter, false),
            Some(KeyInput::new("enter", false))
        );
        assert_eq!(
            map_key_code(KeyCode::Backspace, false),
            Some(KeyInput::new("backspace", false))
        );
        assert_eq!(
            map_key_code(KeyCode::Tab, false),
            Some(KeyInput::new("tab", false))
        );
    }

    #[test]
    fn unmapped_keys_are_dropped() {
        assert_eq!(map_key_code(KeyCode::F(5), false), None);
    }
}
