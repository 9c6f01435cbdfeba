//! Composer input field rendering.

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::domain::shell_state::{ActivePane, ShellState};

use super::styles;

/// Placeholder shown while the composer is idle and empty.
const PLACEHOLDER_TEXT: &str = "Press 'i' to compose, 'u' to attach an image...";

/// Renders the composer bar; the prompt label follows the active mode.
pub fn render_composer(frame: &mut Frame<'_>, area: Rect, state: &ShellState) {
    let is_focused = state.active_pane() == ActivePane::Composer;
    let border_style = if is_focused {
        styles::active_panel_border_style()
    } else {
        styles::inactive_panel_border_style()
    };

    let prompt = prompt_label(state);
    let line = build_input_line(state, &prompt, is_focused);

    let paragraph = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style),
    );
    frame.render_widget(paragraph, area);

    if is_focused {
        // Border (1) + prompt cells + the display width of the text left of
        // the cursor; saturating to survive absurdly long drafts.
        let cursor_x = area
            .x
            .saturating_add(1)
            .saturating_add(prompt.width().min(u16::MAX as usize) as u16)
            .saturating_add(cursor_cell_offset(state).min(u16::MAX as usize) as u16);
        let cursor_y = area.y.saturating_add(1);
        frame.set_cursor_position((cursor_x, cursor_y));
    }
}

fn prompt_label(state: &ShellState) -> String {
    format!("{} > ", state.composer_mode().prompt())
}

/// Display width of the draft up to the cursor, in terminal cells.
fn cursor_cell_offset(state: &ShellState) -> usize {
    state
        .composer()
        .text()
        .chars()
        .take(state.composer().cursor_position())
        .collect::<String>()
        .width()
}

fn build_input_line(state: &ShellState, prompt: &str, is_focused: bool) -> Line<'static> {
    let prompt_span = Span::styled(prompt.to_owned(), styles::input_prompt_style());

    if !is_focused && state.composer().is_empty() {
        return Line::from(vec![
            prompt_span,
            Span::styled(PLACEHOLDER_TEXT.to_owned(), styles::input_placeholder_style()),
        ]);
    }

    Line::from(vec![
        prompt_span,
        Span::styled(
            state.composer().text().to_owned(),
            styles::input_text_style(),
        ),
    ])
}
