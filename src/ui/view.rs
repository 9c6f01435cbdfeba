use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListState, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::domain::{
    message::REACTION_EMOJIS,
    reaction_editor_state::ReactionEditorState,
    shell_state::{ActivePane, ShellState},
};

use super::composer::render_composer;
use super::message_rendering::build_message_rows;
use super::styles;

pub fn render(frame: &mut Frame<'_>, state: &mut ShellState) {
    let [content_area, status_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .areas(frame.area());

    let [panel_area, preview_area] = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(34), Constraint::Percentage(66)])
        .areas(content_area);

    render_control_panel(frame, panel_area, state);
    render_preview(frame, preview_area, state);

    let status = Paragraph::new(status_line(state));
    frame.render_widget(status, status_area);

    render_toast(frame, state);
}

fn render_control_panel(frame: &mut Frame<'_>, area: Rect, state: &ShellState) {
    let is_active = matches!(
        state.active_pane(),
        ActivePane::Participants | ActivePane::ReactionEditor
    );
    let border_style = if is_active {
        styles::active_panel_border_style()
    } else {
        styles::inactive_panel_border_style()
    };

    let inner_width = area.width.saturating_sub(2) as usize;
    let panel = Paragraph::new(control_panel_lines(state, inner_width)).block(
        Block::default()
            .title("Setup")
            .borders(Borders::ALL)
            .border_style(border_style),
    );
    frame.render_widget(panel, area);
}

fn control_panel_lines(state: &ShellState, width: usize) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(Span::styled(
        "Participants".to_owned(),
        styles::section_title_style(),
    ))];

    for (index, participant) in state.editor().participants().iter().enumerate() {
        let cursor = if state.active_pane() == ActivePane::Participants
            && state.participant_cursor() == index
        {
            "\u{25B8} "
        } else {
            "  "
        };

        let mut spans = vec![
            Span::raw(cursor.to_owned()),
            Span::styled(participant.name.clone(), styles::sender_name_style()),
        ];
        if participant.is_online {
            spans.push(Span::styled(" \u{25CF}", styles::online_dot_style()));
        }
        lines.push(Line::from(spans));

        lines.push(Line::from(vec![
            Span::raw("    ".to_owned()),
            Span::styled(
                truncate_reference(&participant.avatar, width.saturating_sub(4)),
                styles::hint_style(),
            ),
        ]));
    }
    lines.push(Line::default());

    let mut side_spans = vec![Span::styled(
        "Sender: ".to_owned(),
        styles::section_title_style(),
    )];
    for (index, participant) in state.editor().participants().iter().enumerate() {
        let is_active_side = state.editor().side().participant_index() == index;
        side_spans.push(Span::styled(
            format!(" {} ", short_name(&participant.name)),
            styles::side_badge_style(is_active_side),
        ));
        side_spans.push(Span::raw(" "));
    }
    lines.push(Line::from(side_spans));
    lines.push(Line::default());

    if let Some(editor) = state.reaction_editor() {
        lines.extend(reaction_editor_lines(editor));
    }

    lines.extend(hint_lines(state));
    lines
}

fn reaction_editor_lines(editor: &ReactionEditorState) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(Span::styled(
        "Reactions".to_owned(),
        styles::section_title_style(),
    ))];

    let mut vocabulary = vec![Span::raw("  ".to_owned())];
    for (index, emoji) in REACTION_EMOJIS.iter().enumerate() {
        let style = if index == editor.emoji_index() {
            styles::side_badge_style(true)
        } else {
            styles::reaction_pill_style(emoji)
        };
        vocabulary.push(Span::styled(format!(" {} ", emoji), style));
    }
    lines.push(Line::from(vocabulary));

    lines.push(Line::from(vec![
        Span::styled("  reactors: ".to_owned(), styles::input_prompt_style()),
        Span::styled(editor.names().text().to_owned(), styles::input_text_style()),
    ]));
    lines.push(Line::default());
    lines
}

fn hint_lines(state: &ShellState) -> Vec<Line<'static>> {
    let hints: &[&str] = match state.active_pane() {
        ActivePane::Messages => &[
            "j/k select | e reactions | d delete",
            "i compose | u image | L like | H heart",
            "Tab side | p participants | q quit",
        ],
        ActivePane::Participants => &[
            "j/k pick | n name | a avatar | o online",
            "w save | R reset | Esc back",
        ],
        ActivePane::Composer => &["Enter commit | Esc cancel"],
        ActivePane::ReactionEditor => &["Up/Down emoji | type names | Enter done"],
    };

    hints
        .iter()
        .map(|hint| Line::from(Span::styled((*hint).to_owned(), styles::hint_style())))
        .collect()
}

/// Last word of the display name, the way chat side pickers abbreviate.
fn short_name(name: &str) -> &str {
    name.split_whitespace().last().unwrap_or(name)
}

fn truncate_reference(reference: &str, max_width: usize) -> String {
    if reference.width() <= max_width {
        return reference.to_owned();
    }

    let mut truncated = String::new();
    for ch in reference.chars() {
        if truncated.width() + 1 >= max_width {
            break;
        }
        truncated.push(ch);
    }
    truncated.push('\u{2026}');
    truncated
}

fn render_preview(frame: &mut Frame<'_>, area: Rect, state: &mut ShellState) {
    let [messages_area, composer_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(3)])
        .areas(area);

    render_messages_panel(frame, messages_area, state);
    render_composer(frame, composer_area, state);
}

fn render_messages_panel(frame: &mut Frame<'_>, area: Rect, state: &mut ShellState) {
    let is_active = state.active_pane() == ActivePane::Messages;
    let border_style = if is_active {
        styles::active_panel_border_style()
    } else {
        styles::inactive_panel_border_style()
    };

    let inner_width = area.width.saturating_sub(2) as usize;
    let rows = build_message_rows(state.editor(), inner_width);
    let viewport_height = area.height.saturating_sub(2) as usize;

    // Keep the selection in view; with no selection, follow the newest
    // message so fresh appends are always visible.
    let target = state
        .editor()
        .selected_index()
        .or_else(|| state.editor().messages().len().checked_sub(1));
    if let Some(row) = target {
        state.editor_mut().update_scroll_offset(row, viewport_height);
    }

    let list = List::new(rows).block(
        Block::default()
            .title(state.chat_title().to_owned())
            .borders(Borders::ALL)
            .border_style(border_style),
    );

    let mut list_state = ListState::default();
    list_state.select(state.editor().selected_index());
    *list_state.offset_mut() = state.editor().scroll_offset();
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn render_toast(frame: &mut Frame<'_>, state: &ShellState) {
    let Some(toast) = state.toast() else {
        return;
    };

    let area = frame.area();
    let text = format!(" {} ", toast.text);
    let width = (text.width().min(u16::MAX as usize) as u16).min(area.width);
    let rect = Rect {
        x: area.right().saturating_sub(width.saturating_add(1)),
        y: area.bottom().saturating_sub(2),
        width,
        height: 1,
    };

    frame.render_widget(Clear, rect);
    frame.render_widget(
        Paragraph::new(text).style(styles::toast_style(toast.kind)),
        rect,
    );
}

fn status_line(state: &ShellState) -> String {
    let mode = if state.is_running() {
        "editing"
    } else {
        "closing"
    };
    let pane = match state.active_pane() {
        ActivePane::Messages => "messages",
        ActivePane::Participants => "participants",
        ActivePane::Composer => "composer",
        ActivePane::ReactionEditor => "reactions",
    };
    format!(
        "mode: {mode} | pane: {pane} | side: {} | messages: {}",
        state.editor().side().as_label(),
        state.editor().messages().len()
    )
}
