//! Style definitions for the UI components.

use ratatui::style::{Color, Modifier, Style};

use crate::domain::{notification::ToastKind, participant::MessageSide};

// =============================================================================
// Panel chrome
// =============================================================================

pub fn active_panel_border_style() -> Style {
    Style::default().fg(Color::Blue)
}

pub fn inactive_panel_border_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

pub fn section_title_style() -> Style {
    Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD)
}

/// Style for key-binding hints in the control panel and status bar.
pub fn hint_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

// =============================================================================
// Chat preview styles
// =============================================================================

/// Style for the sender name above a bubble.
pub fn sender_name_style() -> Style {
    Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD)
}

pub fn message_time_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Avatar badge color depends on the rendering column, so the two identities
/// stay visually distinct even with equal names.
pub fn avatar_marker_style(side: MessageSide) -> Style {
    let color = match side {
        MessageSide::Left => Color::Magenta,
        MessageSide::Right => Color::Cyan,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

pub fn bubble_text_style() -> Style {
    Style::default().fg(Color::White)
}

/// Marker prepended to the bubble of the selected message.
pub fn selection_marker_style() -> Style {
    Style::default()
        .fg(Color::Blue)
        .add_modifier(Modifier::BOLD)
}

/// Style for the `[Image · …]` chip standing in for inline image data.
pub fn image_chip_style() -> Style {
    Style::default().fg(Color::Cyan)
}

/// The like sticker renders as an oversized bold glyph.
pub fn like_glyph_style() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

/// Pill color for a reaction emoji. Unlisted emoji get the neutral fallback.
pub fn reaction_pill_style(emoji: &str) -> Style {
    let color = match emoji {
        "😍" => Color::Yellow,
        "OK" => Color::Green,
        "❤️" => Color::Red,
        "👏" => Color::LightRed,
        "👍" => Color::Blue,
        _ => Color::Gray,
    };
    Style::default().fg(color)
}

pub fn online_dot_style() -> Style {
    Style::default().fg(Color::Green)
}

/// Side selector entry; the active side is inverted.
pub fn side_badge_style(is_active: bool) -> Style {
    if is_active {
        Style::default()
            .fg(Color::Blue)
            .add_modifier(Modifier::REVERSED | Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

// =============================================================================
// Composer styles
// =============================================================================

pub fn input_prompt_style() -> Style {
    Style::default()
        .fg(Color::Blue)
        .add_modifier(Modifier::BOLD)
}

pub fn input_text_style() -> Style {
    Style::default().fg(Color::White)
}

pub fn input_placeholder_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

// =============================================================================
// Toast styles
// =============================================================================

pub fn toast_style(kind: ToastKind) -> Style {
    match kind {
        ToastKind::Success => Style::default().fg(Color::Black).bg(Color::Green),
        ToastKind::Error => Style::default().fg(Color::White).bg(Color::Red),
    }
}
