//! Application state and key handling

use crate::platform::{is_shortcut, RESET_KEY, SUBMIT_KEY};
use crate::schema::{Field, Schema};
use crate::state::{AppState, Form, StatusMessage};
use crate::submit::{LogSubmitHandler, SubmitHandler};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Receives validated records
    handler: Box<dyn SubmitHandler>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App that logs submitted records
    pub fn new(schema: Schema) -> Self {
        Self::with_handler(schema, Box::new(LogSubmitHandler::new()))
    }

    pub fn with_handler(schema: Schema, handler: Box<dyn SubmitHandler>) -> Self {
        Self {
            state: AppState::new(schema),
            handler,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Clear any status messages on key press
        self.state.status_message = None;

        if is_shortcut(&key, SUBMIT_KEY) {
            self.submit();
            return;
        }
        if is_shortcut(&key, RESET_KEY) {
            tracing::info!("Resetting profile form");
            self.state.form.reset();
            return;
        }

        match key.code {
            KeyCode::Esc => self.quit = true,
            KeyCode::Tab => self.state.form.next_field(),
            KeyCode::BackTab => self.state.form.prev_field(),
            _ if self.state.form.is_submit_row_active() => self.handle_submit_row_key(key),
            _ => match self.state.form.active() {
                Some(Field::Role) => self.handle_role_key(key),
                Some(Field::Preferences) => self.handle_preferences_key(key),
                Some(_) => self.handle_text_key(key),
                None => {}
            },
        }
    }

    fn handle_submit_row_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => self.submit(),
            KeyCode::Up => self.state.form.prev_field(),
            KeyCode::Down => self.state.form.next_field(),
            _ => {}
        }
    }

    fn handle_role_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => self.state.form.cycle_choice(false),
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Char(' ') => {
                self.state.form.cycle_choice(true)
            }
            KeyCode::Up => self.state.form.prev_field(),
            KeyCode::Down | KeyCode::Enter => self.state.form.next_field(),
            _ => {}
        }
    }

    fn handle_preferences_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.state.form.move_option_cursor_up(),
            KeyCode::Down | KeyCode::Char('j') => self.state.form.move_option_cursor_down(),
            KeyCode::Char(' ') | KeyCode::Enter => self.state.form.toggle_option_at_cursor(),
            _ => {}
        }
    }

    fn handle_text_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.form.input_char(c)
            }
            KeyCode::Backspace => self.state.form.backspace(),
            KeyCode::Up => self.state.form.prev_field(),
            KeyCode::Down | KeyCode::Enter => self.state.form.next_field(),
            _ => {}
        }
    }

    /// Validate and hand the record to the submit handler, or focus the first
    /// field with an error
    pub fn submit(&mut self) {
        if self.state.form.submit(self.handler.as_mut()) {
            self.state.status_message = Some(StatusMessage::success("Form submitted"));
            return;
        }

        let form = &self.state.form;
        let count = form.errors().len();
        let first_invalid = form
            .errors()
            .fields()
            .first()
            .and_then(|f| form.fields().iter().position(|ff| ff.field == *f));
        if let Some(idx) = first_invalid {
            self.state.form.set_active_field(idx);
        }
        self.state.status_message = Some(StatusMessage::error(format!(
            "{count} field(s) need attention"
        )));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{Locale, SchemaVariant};
    use crate::state::StatusKind;
    use crate::submit::MockSubmitHandler;
    use pretty_assertions::assert_eq;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
    }

    fn app_with(mock: MockSubmitHandler) -> App {
        App::with_handler(Schema::default(), Box::new(mock))
    }

    fn silent_app() -> App {
        let mut mock = MockSubmitHandler::new();
        mock.expect_on_submit().never();
        app_with(mock)
    }

    /// Fill every field through key events, leaving focus on the submit row
    fn fill_by_keys(app: &mut App, start: &str, end: &str) {
        type_str(app, "Aiko");
        app.handle_key(key(KeyCode::Tab));
        type_str(app, "aiko@example.com");
        app.handle_key(key(KeyCode::Tab));
        type_str(app, "secret1");
        app.handle_key(key(KeyCode::Tab));
        // role stays on the default
        app.handle_key(key(KeyCode::Tab));
        app.handle_key(key(KeyCode::Down));
        app.handle_key(key(KeyCode::Char(' ')));
        app.handle_key(key(KeyCode::Tab));
        type_str(app, start);
        app.handle_key(key(KeyCode::Tab));
        type_str(app, end);
        app.handle_key(key(KeyCode::Tab));
    }

    #[test]
    fn test_should_quit_initially_false() {
        let app = silent_app();
        assert!(!app.should_quit());
    }

    #[test]
    fn test_escape_quits() {
        let mut app = silent_app();
        app.handle_key(key(KeyCode::Esc));
        assert!(app.should_quit());
    }

    #[test]
    fn test_typing_edits_focused_field() {
        let mut app = silent_app();
        type_str(&mut app, "Aikx");
        app.handle_key(key(KeyCode::Backspace));
        type_str(&mut app, "o");
        assert_eq!(app.state.form.values().name, "Aiko");
    }

    #[test]
    fn test_enter_on_text_field_moves_focus() {
        let mut app = silent_app();
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.state.form.active(), Some(Field::Email));
        app.handle_key(key(KeyCode::Up));
        assert_eq!(app.state.form.active(), Some(Field::Name));
    }

    #[test]
    fn test_role_arrows_cycle_selection() {
        let mut app = silent_app();
        app.state.form.set_active_field(3);
        app.handle_key(key(KeyCode::Right));
        assert_eq!(app.state.form.values().role.as_deref(), Some("guest"));
        app.handle_key(key(KeyCode::Left));
        app.handle_key(key(KeyCode::Left));
        assert_eq!(app.state.form.values().role.as_deref(), Some("admin"));
    }

    #[test]
    fn test_space_toggles_preference_checkbox() {
        let mut app = silent_app();
        app.state.form.set_active_field(4);
        app.handle_key(key(KeyCode::Char(' ')));
        assert_eq!(app.state.form.values().preferences, vec!["sports"]);
        app.handle_key(key(KeyCode::Down));
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.state.form.values().preferences, vec!["sports", "music"]);
        app.handle_key(key(KeyCode::Up));
        app.handle_key(key(KeyCode::Char(' ')));
        assert_eq!(app.state.form.values().preferences, vec!["music"]);
    }

    #[test]
    fn test_invalid_submit_focuses_first_error_and_sets_status() {
        let mut app = silent_app();
        app.state.form.set_active_field(5);
        app.handle_key(ctrl('s'));

        assert_eq!(app.state.form.active(), Some(Field::Name));
        let status = app.state.status_message.clone().unwrap();
        assert_eq!(status.kind, StatusKind::Error);
        // role starts out as "user", so every other field is reported
        assert_eq!(status.text, "6 field(s) need attention");
    }

    #[test]
    fn test_submit_row_enter_submits_valid_form() {
        let mut mock = MockSubmitHandler::new();
        mock.expect_on_submit()
            .withf(|r| r.name == "Aiko" && r.preferences == Some(vec!["music".to_string()]))
            .times(1)
            .return_const(());
        let mut app = app_with(mock);

        fill_by_keys(&mut app, "2024-05-01", "2024-05-10");
        assert!(app.state.form.is_submit_row_active());
        app.handle_key(key(KeyCode::Enter));

        let status = app.state.status_message.clone().unwrap();
        assert_eq!(status.kind, StatusKind::Success);
        assert!(app.state.form.errors().is_empty());
    }

    #[test]
    fn test_end_before_start_by_keys_focuses_end_date() {
        let mut app = silent_app();
        fill_by_keys(&mut app, "2024-05-10", "2024-05-01");
        app.handle_key(key(KeyCode::Enter));

        assert_eq!(app.state.form.errors().fields(), vec![Field::EndDate]);
        assert_eq!(app.state.form.active(), Some(Field::EndDate));
    }

    #[test]
    fn test_typing_after_failed_submit_clears_field_error() {
        let mut app = silent_app();
        app.handle_key(ctrl('s'));
        assert_eq!(app.state.form.active(), Some(Field::Name));
        assert!(app.state.form.first_error(Field::Name).is_some());

        type_str(&mut app, "A");
        assert_eq!(app.state.form.first_error(Field::Name), None);
        app.handle_key(key(KeyCode::Backspace));
        assert_eq!(
            app.state.form.first_error(Field::Name),
            Some("name is required")
        );
    }

    #[test]
    fn test_status_cleared_on_next_key() {
        let mut app = silent_app();
        app.handle_key(ctrl('s'));
        assert!(app.state.status_message.is_some());
        app.handle_key(key(KeyCode::Tab));
        assert!(app.state.status_message.is_none());
    }

    #[test]
    fn test_ctrl_r_resets_form() {
        let mut app = silent_app();
        type_str(&mut app, "Aiko");
        app.handle_key(ctrl('s'));
        app.handle_key(ctrl('r'));
        assert_eq!(app.state.form.values().name, "");
        assert!(app.state.form.errors().is_empty());
    }

    #[test]
    fn test_control_chars_are_not_typed() {
        let mut app = silent_app();
        app.handle_key(ctrl('x'));
        assert_eq!(app.state.form.values().name, "");
    }

    #[test]
    fn test_basic_variant_submit() {
        let mut mock = MockSubmitHandler::new();
        mock.expect_on_submit()
            .withf(|r| r.role.is_none() && r.start_date.is_none())
            .times(1)
            .return_const(());
        let schema = Schema::new(SchemaVariant::basic(), Locale::En);
        let mut app = App::with_handler(schema, Box::new(mock));

        type_str(&mut app, "Aiko");
        app.handle_key(key(KeyCode::Tab));
        type_str(&mut app, "a@b.com");
        app.handle_key(key(KeyCode::Tab));
        type_str(&mut app, "secret1");
        app.handle_key(key(KeyCode::Tab));
        assert!(app.state.form.is_submit_row_active());
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(
            app.state.status_message.map(|s| s.kind),
            Some(StatusKind::Success)
        );
    }
}
