//! Field rendering utilities for forms

use crate::schema::{Locale, Role};
use crate::state::{FieldValue, FormField};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Bordered block for a field. The first error message, if any, is rendered
/// on the bottom border, directly beneath the input.
pub fn field_block(title: &str, error: Option<&str>, is_active: bool) -> Block<'static> {
    let border_color = match (is_active, error.is_some()) {
        (true, _) => Color::Cyan,
        (false, true) => Color::Red,
        (false, false) => Color::DarkGray,
    };

    let mut block = Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    if let Some(message) = error {
        block = block.title_bottom(Line::from(Span::styled(
            format!(" {message} "),
            Style::default().fg(Color::Red),
        )));
    }

    block
}

/// Draw a single-line field: text, masked text, or a select
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    locale: Locale,
    error: Option<&str>,
    is_active: bool,
) {
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let content = match &field.value {
        FieldValue::Choice(choice) => {
            let label = choice
                .as_deref()
                .and_then(Role::parse)
                .map(Role::label)
                .unwrap_or("-");
            if is_active {
                Line::from(vec![
                    Span::styled("◀ ", Style::default().fg(Color::Cyan)),
                    Span::styled(label, style),
                    Span::styled(" ▶", Style::default().fg(Color::Cyan)),
                ])
            } else {
                Line::from(Span::styled(label, style))
            }
        }
        _ => {
            let display_value = field.display_value();
            let display_str = if display_value.is_empty() && !is_active {
                "(empty)".to_string()
            } else {
                display_value
            };
            let cursor = if is_active { "▌" } else { "" };
            Line::from(vec![
                Span::styled(display_str, style),
                Span::styled(cursor, Style::default().fg(Color::Cyan)),
            ])
        }
    };

    let block = field_block(&field.title(locale), field.visible_error(error), is_active);
    frame.render_widget(Paragraph::new(content).block(block), area);
}
