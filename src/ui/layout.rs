//! Layout components (main area, status bar)

use crate::app::App;
use crate::platform::{shortcut_label, RESET_KEY, SUBMIT_KEY};
use crate::schema::Field;
use crate::state::StatusKind;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into content and a one-line status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::raw(" ")];

    let hints = get_field_hints(app.state.form.active());
    spans.push(Span::styled(hints, Style::default().fg(Color::Gray)));

    if let Some(status) = &app.state.status_message {
        let color = match status.kind {
            StatusKind::Success => Color::Green,
            StatusKind::Error => Color::Red,
        };
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(&status.text, Style::default().fg(color)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);
}

/// Get keyboard hints for the focused field
fn get_field_hints(active: Option<Field>) -> String {
    let field_hint = match active {
        Some(Field::Role) => "←/→:change  ",
        Some(Field::Preferences) => "↑/↓:move  Space:toggle  ",
        Some(_) => "↑/↓:field  ",
        None => "Enter:submit  ",
    };
    format!(
        "Tab:next  {field_hint}{}:submit  {}:reset  Esc:quit",
        shortcut_label(SUBMIT_KEY),
        shortcut_label(RESET_KEY)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hints_follow_focus() {
        assert!(get_field_hints(Some(Field::Role)).contains("←/→:change"));
        assert!(get_field_hints(Some(Field::Preferences)).contains("Space:toggle"));
        assert!(get_field_hints(Some(Field::Name)).contains("↑/↓:field"));
        assert!(get_field_hints(None).contains("Enter:submit"));
    }

    #[test]
    fn test_hints_always_mention_quit() {
        for field in Field::ALL {
            assert!(get_field_hints(Some(field)).ends_with("Esc:quit"));
        }
    }
}
