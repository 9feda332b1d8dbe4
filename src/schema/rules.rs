//! Declarative validation rules for the profile form

use super::error::{ValidationError, ValidationErrors};
use super::field::{is_known_preference, Field, Role};
use super::locale::{Locale, Message};
use super::record::{parse_date, FormRecord, FormValues};
use regex::Regex;
use std::sync::LazyLock;

pub const MIN_PASSWORD_LEN: usize = 6;

/// Dot-separated atoms on both sides: no leading, trailing or doubled dots
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9_%+-]+(\.[a-zA-Z0-9_%+-]+)*@([a-zA-Z0-9-]+\.)+[a-zA-Z]{2,}$")
        .expect("email pattern is a valid regex")
});

/// A per-field rule: the field it guards, the predicate, and the message
/// reported when the predicate does not hold
struct Rule {
    field: Field,
    check: fn(&FormValues) -> bool,
    message: Message,
}

fn name_present(v: &FormValues) -> bool {
    !v.name.is_empty()
}

fn email_well_formed(v: &FormValues) -> bool {
    EMAIL_PATTERN.is_match(&v.email)
}

fn password_long_enough(v: &FormValues) -> bool {
    v.password.chars().count() >= MIN_PASSWORD_LEN
}

fn role_known(v: &FormValues) -> bool {
    v.role.as_deref().and_then(Role::parse).is_some()
}

fn preferences_present(v: &FormValues) -> bool {
    !v.preferences.is_empty()
}

fn preferences_known(v: &FormValues) -> bool {
    v.preferences.iter().all(|p| is_known_preference(p))
}

fn start_date_parses(v: &FormValues) -> bool {
    parse_date(&v.start_date).is_some()
}

fn end_date_parses(v: &FormValues) -> bool {
    parse_date(&v.end_date).is_some()
}

/// Per-field rules in evaluation order. For one field, the first failing
/// rule wins.
const RULES: &[Rule] = &[
    Rule {
        field: Field::Name,
        check: name_present,
        message: Message::NameRequired,
    },
    Rule {
        field: Field::Email,
        check: email_well_formed,
        message: Message::EmailInvalid,
    },
    Rule {
        field: Field::Password,
        check: password_long_enough,
        message: Message::PasswordTooShort,
    },
    Rule {
        field: Field::Role,
        check: role_known,
        message: Message::RoleRequired,
    },
    Rule {
        field: Field::Preferences,
        check: preferences_present,
        message: Message::PreferencesEmpty,
    },
    Rule {
        field: Field::Preferences,
        check: preferences_known,
        message: Message::PreferenceUnknown,
    },
    Rule {
        field: Field::StartDate,
        check: start_date_parses,
        message: Message::StartDateInvalid,
    },
    Rule {
        field: Field::EndDate,
        check: end_date_parses,
        message: Message::EndDateInvalid,
    },
];

/// Which optional fields a schema includes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemaVariant {
    pub role: bool,
    pub preferences: bool,
    pub date_range: bool,
}

impl Default for SchemaVariant {
    fn default() -> Self {
        Self {
            role: true,
            preferences: true,
            date_range: true,
        }
    }
}

impl SchemaVariant {
    pub fn includes(&self, field: Field) -> bool {
        match field {
            Field::Name | Field::Email | Field::Password => true,
            Field::Role => self.role,
            Field::Preferences => self.preferences,
            Field::StartDate | Field::EndDate => self.date_range,
        }
    }

    /// Included fields in display order
    pub fn fields(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|f| self.includes(*f))
            .collect()
    }
}

/// Profile form schema: a variant plus the locale its messages are written in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Schema {
    pub variant: SchemaVariant,
    pub locale: Locale,
}

impl Schema {
    pub fn new(variant: SchemaVariant, locale: Locale) -> Self {
        Self { variant, locale }
    }

    /// Validate `values`, returning the typed record or every violation found.
    ///
    /// All fields are checked on every pass. The end-date ordering check only
    /// runs when both dates parsed, so a format error on either date is never
    /// joined by an ordering error.
    pub fn validate(&self, values: &FormValues) -> Result<FormRecord, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        for rule in RULES {
            if !self.variant.includes(rule.field) || errors.has_error(rule.field) {
                continue;
            }
            if !(rule.check)(values) {
                errors.push(ValidationError::new(
                    rule.field,
                    rule.message.text(self.locale),
                ));
            }
        }

        let (start_date, end_date) = if self.variant.date_range {
            (parse_date(&values.start_date), parse_date(&values.end_date))
        } else {
            (None, None)
        };

        if let (Some(start), Some(end)) = (start_date, end_date) {
            if end < start {
                errors.push(ValidationError::new(
                    Field::EndDate,
                    Message::EndBeforeStart.text(self.locale),
                ));
            }
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(FormRecord {
            name: values.name.clone(),
            email: values.email.clone(),
            password: values.password.clone(),
            role: if self.variant.role {
                values.role.as_deref().and_then(Role::parse)
            } else {
                None
            },
            preferences: self
                .variant
                .preferences
                .then(|| values.preferences.clone()),
            start_date,
            end_date,
        })
    }
}

#[cfg(test)]
impl SchemaVariant {
    /// Only name, email and password
    pub fn basic() -> Self {
        Self {
            role: false,
            preferences: false,
            date_range: false,
        }
    }
}
