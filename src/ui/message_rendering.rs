//! Chat preview rendering logic.
//!
//! Turns each message into a multi-line row: a sender header resolved from
//! the participant pair, a bubble styled by message kind, and a wrapped row
//! of reaction pills colored per emoji. Right-side messages are right-aligned
//! to mirror the two-column chat layout.

use ratatui::{
    layout::Alignment,
    text::{Line, Span},
    widgets::ListItem,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::domain::{
    editor_state::EditorState,
    message::{Message, MessageKind, ReactionGroup},
    participant::{MessageSide, Participant},
};

use super::styles;

/// Marker in front of the selected bubble.
const SELECTION_MARKER: &str = "▌ ";

/// Builds one list row per message; row index equals message index.
pub fn build_message_rows(state: &EditorState, width: usize) -> Vec<ListItem<'static>> {
    state
        .messages()
        .iter()
        .map(|message| message_row(state, message, width))
        .collect()
}

fn message_row(state: &EditorState, message: &Message, width: usize) -> ListItem<'static> {
    let sender = state.resolve_sender(&message.sender_id);
    let is_selected = state.selected_message_id() == Some(message.id.as_str());
    let alignment = match message.side {
        MessageSide::Left => Alignment::Left,
        MessageSide::Right => Alignment::Right,
    };

    let mut lines = vec![header_line(sender, message).alignment(alignment)];
    for line in bubble_lines(message, is_selected, width) {
        lines.push(line.alignment(alignment));
    }
    for line in reaction_pill_lines(&message.reactions, width) {
        lines.push(line.alignment(alignment));
    }
    lines.push(Line::default());

    ListItem::new(lines)
}

fn header_line(sender: &Participant, message: &Message) -> Line<'static> {
    let mut spans = vec![
        Span::styled(
            avatar_marker(sender),
            styles::avatar_marker_style(message.side),
        ),
        Span::raw(" "),
        Span::styled(sender.name.clone(), styles::sender_name_style()),
    ];

    if sender.is_online {
        spans.push(Span::styled(" \u{25CF}", styles::online_dot_style()));
    }

    spans.push(Span::styled(
        format!("  {}", message.timestamp),
        styles::message_time_style(),
    ));

    Line::from(spans)
}

/// Terminal stand-in for the avatar image: the sender's initial in a badge.
fn avatar_marker(sender: &Participant) -> String {
    let initial = sender
        .name
        .chars()
        .next()
        .map(|ch| ch.to_uppercase().collect::<String>())
        .unwrap_or_else(|| "?".to_owned());
    format!("({})", initial)
}

fn bubble_lines(message: &Message, is_selected: bool, width: usize) -> Vec<Line<'static>> {
    let marker = if is_selected {
        Span::styled(SELECTION_MARKER.to_owned(), styles::selection_marker_style())
    } else {
        Span::raw("  ".to_owned())
    };

    match message.kind {
        MessageKind::Like => vec![Line::from(vec![
            marker,
            Span::styled(message.text.clone(), styles::like_glyph_style()),
        ])],
        MessageKind::Image => vec![Line::from(vec![
            marker,
            Span::styled(image_chip_label(&message.text), styles::image_chip_style()),
        ])],
        MessageKind::Text => {
            let mut lines = Vec::new();
            for (index, segment) in wrap_text(&message.text, bubble_width(width))
                .into_iter()
                .enumerate()
            {
                let lead = if index == 0 {
                    marker.clone()
                } else {
                    Span::raw("  ".to_owned())
                };
                lines.push(Line::from(vec![
                    lead,
                    Span::styled(segment, styles::bubble_text_style()),
                ]));
            }
            lines
        }
    }
}

/// Bubbles take roughly two thirds of the preview, like a phone chat column.
fn bubble_width(width: usize) -> usize {
    (width.saturating_mul(2) / 3).clamp(8, 120)
}

/// Word-wraps to `max_width` terminal cells; words wider than a full line
/// are hard-broken. Embedded newlines are preserved.
fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    if text.is_empty() {
        return vec![String::new()];
    }

    let mut lines = Vec::new();
    for raw_line in text.lines() {
        let mut current = String::new();
        for word in raw_line.split_whitespace() {
            let word_width = word.width();
            if current.is_empty() {
                current = fit_word(word, word_width, max_width, &mut lines);
            } else if current.width() + 1 + word_width <= max_width {
                current.push(' ');
                current.push_str(word);
            } else {
                lines.push(std::mem::take(&mut current));
                current = fit_word(word, word_width, max_width, &mut lines);
            }
        }
        lines.push(current);
    }
    lines
}

fn fit_word(word: &str, word_width: usize, max_width: usize, lines: &mut Vec<String>) -> String {
    if word_width <= max_width {
        return word.to_owned();
    }

    let mut chunk = String::new();
    for ch in word.chars() {
        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if !chunk.is_empty() && chunk.width() + ch_width > max_width {
            lines.push(std::mem::take(&mut chunk));
        }
        chunk.push(ch);
    }
    chunk
}

/// Chip standing in for inline image data, with the decoded size when the
/// reference is a data URI.
fn image_chip_label(reference: &str) -> String {
    match estimated_image_bytes(reference) {
        Some(bytes) => format!("[Image \u{00B7} {}]", format_size(bytes)),
        None => "[Image]".to_owned(),
    }
}

fn estimated_image_bytes(reference: &str) -> Option<usize> {
    let encoded = reference.strip_prefix("data:")?.split_once("base64,")?.1;
    Some(encoded.len() * 3 / 4)
}

fn format_size(bytes: usize) -> String {
    if bytes >= 1024 * 1024 {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    } else if bytes >= 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{} B", bytes)
    }
}

fn reaction_pill_lines(reactions: &[ReactionGroup], width: usize) -> Vec<Line<'static>> {
    if reactions.is_empty() {
        return Vec::new();
    }

    let mut lines = Vec::new();
    let mut spans: Vec<Span<'static>> = vec![Span::raw("  ".to_owned())];
    let mut line_width = 2usize;

    for group in reactions {
        let pill = format!("[{} {}]", group.emoji, group.names.join(", "));
        let pill_width = pill.width() + 1;

        if line_width + pill_width > width && spans.len() > 1 {
            lines.push(Line::from(std::mem::take(&mut spans)));
            spans.push(Span::raw("  ".to_owned()));
            line_width = 2;
        }

        spans.push(Span::styled(pill, styles::reaction_pill_style(&group.emoji)));
        spans.push(Span::raw(" ".to_owned()));
        line_width += pill_width;
    }

    if spans.len() > 1 {
        lines.push(Line::from(spans));
    }
    lines
}
