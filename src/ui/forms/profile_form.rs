//! Profile form rendering

use super::checkbox_group::{checkbox_group_height, draw_checkbox_group};
use super::field_renderer::draw_field;
use crate::app::App;
use crate::schema::{submit_label, Field};
use crate::state::{FieldValue, FormField, ProfileForm};
use crate::ui::components::{render_action_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Height of a single-line bordered field
const FIELD_HEIGHT: u16 = 3;

/// Draw the form: fields in two columns, submit button below
pub fn draw_profile_form(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;

    let block = Block::default()
        .title(" Profile ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),                // Fields
            Constraint::Length(BUTTON_HEIGHT), // Submit
        ])
        .margin(1)
        .split(inner);

    // Identity fields on the left, selections and dates on the right
    let (left, right): (Vec<_>, Vec<_>) = form
        .fields()
        .iter()
        .enumerate()
        .partition(|(_, f)| f.field <= Field::Role);

    if right.is_empty() {
        draw_column(frame, chunks[0], form, &left);
    } else {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[0]);
        draw_column(frame, columns[0], form, &left);
        draw_column(frame, columns[1], form, &right);
    }

    let button_row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(20),
            Constraint::Min(0),
        ])
        .split(chunks[1]);
    render_action_button(
        frame,
        button_row[1],
        submit_label(form.schema().locale),
        form.is_submit_row_active(),
        Color::Green,
    );
}

fn field_height(field: &FormField) -> u16 {
    match field.value {
        FieldValue::Multi(_) => checkbox_group_height(),
        _ => FIELD_HEIGHT,
    }
}

/// Draw fields stacked vertically; `fields` pairs each with its form index
fn draw_column(frame: &mut Frame, area: Rect, form: &ProfileForm, fields: &[(usize, &FormField)]) {
    let constraints: Vec<Constraint> = fields
        .iter()
        .map(|(_, f)| Constraint::Length(field_height(f)))
        .chain(std::iter::once(Constraint::Min(0)))
        .collect();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let locale = form.schema().locale;
    for (row, (idx, field)) in rows.iter().zip(fields) {
        let is_active = form.active_field_index == *idx;
        let error = form.first_error(field.field);
        match field.value {
            FieldValue::Multi(_) => draw_checkbox_group(
                frame,
                *row,
                field,
                locale,
                error,
                is_active,
                form.option_cursor,
            ),
            _ => draw_field(frame, *row, field, locale, error, is_active),
        }
    }
}
