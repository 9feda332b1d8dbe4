//! Form state container for the profile form

use super::field::{FieldValue, FormField};
use crate::schema::{Field, FormValues, Role, Schema, ValidationErrors, PREFERENCE_OPTIONS};
use crate::submit::SubmitHandler;

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField>;
    fn get_field(&self, index: usize) -> Option<&FormField>;
}

/// Holds the current value of every field in the schema, the current errors,
/// and focus. All mutation goes through its methods. Errors are first computed
/// on submit; after that every change re-validates.
#[derive(Debug, Clone)]
pub struct ProfileForm {
    schema: Schema,
    fields: Vec<FormField>,
    errors: ValidationErrors,
    /// A submit was attempted since creation or the last reset
    submitted: bool,
    /// Index into `fields`; `fields.len()` is the submit button row
    pub active_field_index: usize,
    /// Highlighted option inside the preferences checkbox group
    pub option_cursor: usize,
}

impl ProfileForm {
    pub fn new(schema: Schema) -> Self {
        let fields = schema
            .variant
            .fields()
            .into_iter()
            .map(|field| match field {
                Field::Password => FormField::secret(field),
                Field::Role => FormField::choice(field, Some(Role::default().as_str())),
                Field::Preferences => FormField::multi(field),
                _ => FormField::text(field),
            })
            .collect();

        Self {
            schema,
            fields,
            errors: ValidationErrors::new(),
            submitted: false,
            active_field_index: 0,
            option_cursor: 0,
        }
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    pub fn field(&self, field: Field) -> Option<&FormField> {
        self.fields.iter().find(|f| f.field == field)
    }

    fn field_mut(&mut self, field: Field) -> Option<&mut FormField> {
        self.fields.iter_mut().find(|f| f.field == field)
    }

    /// Field under focus, `None` when the submit row is focused
    pub fn active(&self) -> Option<Field> {
        self.get_field(self.active_field_index).map(|f| f.field)
    }

    pub fn is_submit_row_active(&self) -> bool {
        self.active_field_index == self.fields.len()
    }

    /// Replace one field's value and mark it dirty. Fields outside the schema
    /// and set-valued fields are ignored.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        let Some(target) = self.field_mut(field) else {
            tracing::debug!("Ignoring update for field {field} outside the schema");
            return;
        };
        if !target.set(value.into()) {
            tracing::debug!("Ignoring scalar update for set-valued field {field}");
            return;
        }
        self.revalidate();
    }

    /// Add `value` to, or remove it from, a set-valued field
    pub fn set_multi_value_field(&mut self, field: Field, value: &str, included: bool) {
        if !field.is_multi_value() {
            tracing::debug!("Ignoring membership update for scalar field {field}");
            return;
        }
        let changed = self
            .field_mut(field)
            .is_some_and(|target| target.include(value, included));
        if changed {
            self.revalidate();
        }
    }

    /// Replace the error set with a fresh validation pass once the user has
    /// attempted a submit. Before that, errors stay empty while typing.
    fn revalidate(&mut self) {
        if !self.submitted {
            return;
        }
        self.errors = match self.schema.validate(&self.values()) {
            Ok(_) => ValidationErrors::new(),
            Err(errors) => errors,
        };
    }

    /// Snapshot of the current values in the shape the schema validates
    pub fn values(&self) -> FormValues {
        let mut values = FormValues::default();
        for f in &self.fields {
            match (f.field, &f.value) {
                (Field::Name, _) => values.name = f.as_text().to_string(),
                (Field::Email, _) => values.email = f.as_text().to_string(),
                (Field::Password, _) => values.password = f.as_text().to_string(),
                (Field::Role, FieldValue::Choice(c)) => values.role = c.clone(),
                (Field::Preferences, FieldValue::Multi(v)) => values.preferences = v.clone(),
                (Field::StartDate, _) => values.start_date = f.as_text().to_string(),
                (Field::EndDate, _) => values.end_date = f.as_text().to_string(),
                _ => {}
            }
        }
        values
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// First error message for `field`, as displayed beneath its input
    pub fn first_error(&self, field: Field) -> Option<&str> {
        self.errors.first_message(field)
    }

    /// Validate the current values. On success the handler receives the
    /// record and errors are cleared; on failure the error set is replaced
    /// and the handler is not called.
    pub fn submit(&mut self, handler: &mut dyn SubmitHandler) -> bool {
        self.submitted = true;
        for f in &mut self.fields {
            f.touched = true;
        }

        tracing::debug!("Validating profile form");
        match self.schema.validate(&self.values()) {
            Ok(record) => {
                self.errors = ValidationErrors::new();
                handler.on_submit(&record);
                true
            }
            Err(errors) => {
                tracing::info!(count = errors.len(), "Profile form has validation errors");
                self.errors = errors;
                false
            }
        }
    }

    /// Restore initial values and clear errors
    pub fn reset(&mut self) {
        *self = Self::new(self.schema);
    }

    /// Type a character into the focused text field
    pub fn input_char(&mut self, c: char) {
        if let Some(f) = self.get_active_field_mut() {
            f.push_char(c);
            self.revalidate();
        }
    }

    /// Delete the last character of the focused text field
    pub fn backspace(&mut self) {
        if let Some(f) = self.get_active_field_mut() {
            f.pop_char();
            self.revalidate();
        }
    }

    /// Step the role selection forward or backward
    pub fn cycle_choice(&mut self, forward: bool) {
        if self.active() != Some(Field::Role) {
            return;
        }
        let current = self
            .field(Field::Role)
            .and_then(FormField::as_choice)
            .and_then(Role::parse);
        let next = match current {
            Some(role) if forward => role.next(),
            Some(role) => role.prev(),
            None => Role::default(),
        };
        self.set_field(Field::Role, next.as_str());
    }

    pub fn move_option_cursor_down(&mut self) {
        self.option_cursor = (self.option_cursor + 1) % PREFERENCE_OPTIONS.len();
    }

    pub fn move_option_cursor_up(&mut self) {
        if self.option_cursor == 0 {
            self.option_cursor = PREFERENCE_OPTIONS.len() - 1;
        } else {
            self.option_cursor -= 1;
        }
    }

    /// Flip membership of the highlighted preference option
    pub fn toggle_option_at_cursor(&mut self) {
        let Some(option) = PREFERENCE_OPTIONS.get(self.option_cursor) else {
            return;
        };
        let included = self
            .field(Field::Preferences)
            .is_some_and(|f| f.is_selected(option));
        self.set_multi_value_field(Field::Preferences, option, !included);
    }
}

impl Default for ProfileForm {
    fn default() -> Self {
        Self::new(Schema::default())
    }
}

impl Form for ProfileForm {
    fn field_count(&self) -> usize {
        self.fields.len() + 1 // fields plus the submit row
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        if let Some(f) = self.fields.get_mut(self.active_field_index) {
            f.touched = true;
        }
        self.active_field_index = index.min(self.fields.len());
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        self.fields.get_mut(self.active_field_index)
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        self.fields.get(index)
    }
}
