//! Form field value objects

use crate::schema::{field_label, Field, Locale};

/// Type-safe field values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    /// Text that is masked when displayed
    Secret(String),
    /// Single selection from a fixed set
    Choice(Option<String>),
    /// Insertion-ordered set of selected option values
    Multi(Vec<String>),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

/// A single form field: its value plus dirty/touched flags
#[derive(Debug, Clone)]
pub struct FormField {
    pub field: Field,
    pub value: FieldValue,
    /// Value changed since the form was created or reset
    pub dirty: bool,
    /// Focus has left the field at least once, or a submit was attempted
    pub touched: bool,
}

impl FormField {
    fn with_value(field: Field, value: FieldValue) -> Self {
        Self {
            field,
            value,
            dirty: false,
            touched: false,
        }
    }

    /// Create a new text field
    pub fn text(field: Field) -> Self {
        Self::with_value(field, FieldValue::Text(String::new()))
    }

    /// Create a new masked text field
    pub fn secret(field: Field) -> Self {
        Self::with_value(field, FieldValue::Secret(String::new()))
    }

    /// Create a new single-choice field with an initial selection
    pub fn choice(field: Field, initial: Option<&str>) -> Self {
        Self::with_value(field, FieldValue::Choice(initial.map(str::to_string)))
    }

    /// Create a new multi-choice field with nothing selected
    pub fn multi(field: Field) -> Self {
        Self::with_value(field, FieldValue::Multi(Vec::new()))
    }

    pub fn label(&self, locale: Locale) -> &'static str {
        field_label(self.field, locale)
    }

    /// Border title: the label, marked with `*` once the value was edited
    pub fn title(&self, locale: Locale) -> String {
        if self.dirty {
            format!("{}*", self.label(locale))
        } else {
            self.label(locale).to_string()
        }
    }

    /// Errors are only shown for fields the user has left or submitted
    pub fn visible_error<'a>(&self, error: Option<&'a str>) -> Option<&'a str> {
        error.filter(|_| self.touched)
    }

    /// Get the text value (empty for choice fields)
    pub fn as_text(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) | FieldValue::Secret(s) => s,
            FieldValue::Choice(_) | FieldValue::Multi(_) => "",
        }
    }

    pub fn as_choice(&self) -> Option<&str> {
        match &self.value {
            FieldValue::Choice(c) => c.as_deref(),
            _ => None,
        }
    }

    /// Selected values of a multi-choice field (empty for other kinds)
    pub fn selected(&self) -> &[String] {
        match &self.value {
            FieldValue::Multi(values) => values,
            _ => &[],
        }
    }

    pub fn is_selected(&self, option: &str) -> bool {
        self.selected().iter().any(|v| v == option)
    }

    /// Replace a scalar value. Multi-choice fields are left untouched and
    /// `false` is returned.
    pub fn set(&mut self, value: String) -> bool {
        match &mut self.value {
            FieldValue::Text(s) | FieldValue::Secret(s) => *s = value,
            FieldValue::Choice(c) => *c = (!value.is_empty()).then_some(value),
            FieldValue::Multi(_) => return false,
        }
        self.dirty = true;
        true
    }

    /// Add or remove `option` from a multi-choice field. Returns whether the
    /// selection changed.
    pub fn include(&mut self, option: &str, included: bool) -> bool {
        let FieldValue::Multi(values) = &mut self.value else {
            return false;
        };
        let position = values.iter().position(|v| v == option);
        let changed = match (position, included) {
            (None, true) => {
                values.push(option.to_string());
                true
            }
            (Some(idx), false) => {
                values.remove(idx);
                true
            }
            _ => false,
        };
        if changed {
            self.dirty = true;
        }
        changed
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        if let FieldValue::Text(s) | FieldValue::Secret(s) = &mut self.value {
            s.push(c);
            self.dirty = true;
        }
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        if let FieldValue::Text(s) | FieldValue::Secret(s) = &mut self.value {
            if s.pop().is_some() {
                self.dirty = true;
            }
        }
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match &self.value {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Secret(s) => "•".repeat(s.chars().count()),
            FieldValue::Choice(c) => c.clone().unwrap_or_default(),
            FieldValue::Multi(values) => values.join(", "),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_fields_are_clean() {
        let field = FormField::text(Field::Name);
        assert!(!field.dirty);
        assert!(!field.touched);
        assert_eq!(field.as_text(), "");
    }

    #[test]
    fn test_set_marks_dirty() {
        let mut field = FormField::text(Field::Name);
        assert!(field.set("Aiko".to_string()));
        assert!(field.dirty);
        assert_eq!(field.as_text(), "Aiko");
    }

    #[test]
    fn test_set_on_multi_is_rejected() {
        let mut field = FormField::multi(Field::Preferences);
        assert!(!field.set("music".to_string()));
        assert!(!field.dirty);
        assert!(field.selected().is_empty());
    }

    #[test]
    fn test_empty_choice_clears_selection() {
        let mut field = FormField::choice(Field::Role, Some("user"));
        field.set(String::new());
        assert_eq!(field.as_choice(), None);
    }

    #[test]
    fn test_include_keeps_insertion_order_without_duplicates() {
        let mut field = FormField::multi(Field::Preferences);
        assert!(field.include("music", true));
        assert!(field.include("sports", true));
        assert!(!field.include("music", true));
        assert_eq!(field.selected(), ["music".to_string(), "sports".to_string()]);
    }

    #[test]
    fn test_include_false_removes_only_named_option() {
        let mut field = FormField::multi(Field::Preferences);
        field.include("music", true);
        field.include("movies", true);
        assert!(field.include("music", false));
        assert!(!field.include("music", false));
        assert_eq!(field.selected(), ["movies".to_string()]);
    }

    #[test]
    fn test_push_and_pop_char() {
        let mut field = FormField::text(Field::Email);
        field.push_char('a');
        field.push_char('b');
        field.pop_char();
        assert_eq!(field.as_text(), "a");
    }

    #[test]
    fn test_pop_on_empty_does_not_mark_dirty() {
        let mut field = FormField::text(Field::Email);
        field.pop_char();
        assert!(!field.dirty);
    }

    #[test]
    fn test_push_char_ignored_on_choice() {
        let mut field = FormField::choice(Field::Role, Some("user"));
        field.push_char('x');
        assert_eq!(field.as_choice(), Some("user"));
        assert!(!field.dirty);
    }

    #[test]
    fn test_secret_display_is_masked() {
        let mut field = FormField::secret(Field::Password);
        field.set("secret1".to_string());
        assert_eq!(field.display_value(), "•••••••");
        assert_eq!(field.as_text(), "secret1");
    }

    #[test]
    fn test_title_marks_dirty_fields() {
        let mut field = FormField::text(Field::Name);
        assert_eq!(field.title(Locale::En), "Name");
        field.push_char('A');
        assert_eq!(field.title(Locale::En), "Name*");
    }

    #[test]
    fn test_error_hidden_until_touched() {
        let mut field = FormField::text(Field::Name);
        assert_eq!(field.visible_error(Some("name is required")), None);
        field.touched = true;
        assert_eq!(
            field.visible_error(Some("name is required")),
            Some("name is required")
        );
    }

    #[test]
    fn test_label_follows_locale() {
        let field = FormField::text(Field::Name);
        assert_eq!(field.label(Locale::En), "Name");
        assert_eq!(field.label(Locale::Ja), "名前");
    }
}
