//! Application state definitions

use super::forms::ProfileForm;
use crate::schema::Schema;

/// Outcome shown in the status bar after a submit attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
}

impl StatusMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Error,
            text: text.into(),
        }
    }
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    pub form: ProfileForm,
    pub status_message: Option<StatusMessage>,
}

impl AppState {
    pub fn new(schema: Schema) -> Self {
        Self {
            form: ProfileForm::new(schema),
            status_message: None,
        }
    }
}
