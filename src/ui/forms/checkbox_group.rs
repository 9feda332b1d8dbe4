//! Checkbox group for set-valued fields

use super::field_renderer::field_block;
use crate::schema::{preference_label, Locale, PREFERENCE_OPTIONS};
use crate::state::FormField;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Rows needed for the group including borders
pub fn checkbox_group_height() -> u16 {
    PREFERENCE_OPTIONS.len() as u16 + 2
}

/// Draw one checkbox per option; checked state is read from the field
pub fn draw_checkbox_group(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    locale: Locale,
    error: Option<&str>,
    is_active: bool,
    cursor: usize,
) {
    let lines: Vec<Line> = PREFERENCE_OPTIONS
        .iter()
        .enumerate()
        .map(|(idx, option)| {
            let mark = if field.is_selected(option) { "[x]" } else { "[ ]" };
            let highlighted = is_active && idx == cursor;
            let style = if highlighted {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else if is_active {
                Style::default()
            } else {
                Style::default().fg(Color::DarkGray)
            };
            let pointer = if highlighted { "▸ " } else { "  " };
            Line::from(vec![
                Span::styled(pointer, Style::default().fg(Color::Cyan)),
                Span::styled(format!("{mark} {}", preference_label(option, locale)), style),
            ])
        })
        .collect();

    let block = field_block(&field.title(locale), field.visible_error(error), is_active);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
