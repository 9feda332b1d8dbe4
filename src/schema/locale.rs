//! Locale-specific labels and validation messages
//!
//! Two locales ship with the form: English and Japanese.

use super::field::Field;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ja,
}

/// Validation message keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    NameRequired,
    EmailInvalid,
    PasswordTooShort,
    RoleRequired,
    PreferencesEmpty,
    PreferenceUnknown,
    StartDateInvalid,
    EndDateInvalid,
    EndBeforeStart,
}

impl Message {
    pub fn text(self, locale: Locale) -> &'static str {
        match locale {
            Locale::En => match self {
                Self::NameRequired => "name is required",
                Self::EmailInvalid => "enter a valid email address",
                Self::PasswordTooShort => "password must be at least 6 characters",
                Self::RoleRequired => "select a role",
                Self::PreferencesEmpty => "select at least one preference",
                Self::PreferenceUnknown => "unknown preference selected",
                Self::StartDateInvalid => "enter a valid start date",
                Self::EndDateInvalid => "enter a valid end date",
                Self::EndBeforeStart => "end date must not be before start date",
            },
            Locale::Ja => match self {
                Self::NameRequired => "名前は必須です",
                Self::EmailInvalid => "有効なメールアドレスを入力してください",
                Self::PasswordTooShort => "パスワードは6文字以上で入力してください",
                Self::RoleRequired => "役割を選択してください",
                Self::PreferencesEmpty => "少なくとも1つの好みを選択してください",
                Self::PreferenceUnknown => "不明な好みが選択されています",
                Self::StartDateInvalid => "有効な開始日を入力してください",
                Self::EndDateInvalid => "有効な終了日を入力してください",
                Self::EndBeforeStart => "終了日は開始日より後の日付にしてください",
            },
        }
    }
}

pub fn field_label(field: Field, locale: Locale) -> &'static str {
    match locale {
        Locale::En => match field {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Password => "Password",
            Field::Role => "Role",
            Field::Preferences => "Preferences",
            Field::StartDate => "Start date (YYYY-MM-DD)",
            Field::EndDate => "End date (YYYY-MM-DD)",
        },
        Locale::Ja => match field {
            Field::Name => "名前",
            Field::Email => "メールアドレス",
            Field::Password => "パスワード",
            Field::Role => "役割",
            Field::Preferences => "好み",
            Field::StartDate => "開始日 (YYYY-MM-DD)",
            Field::EndDate => "終了日 (YYYY-MM-DD)",
        },
    }
}

/// Display label for a preference option value; unknown values are shown as-is
pub fn preference_label(value: &str, locale: Locale) -> &str {
    match (locale, value) {
        (Locale::En, "sports") => "Sports",
        (Locale::En, "music") => "Music",
        (Locale::En, "movies") => "Movies",
        (Locale::Ja, "sports") => "スポーツ",
        (Locale::Ja, "music") => "音楽",
        (Locale::Ja, "movies") => "映画",
        _ => value,
    }
}

pub fn submit_label(locale: Locale) -> &'static str {
    match locale {
        Locale::En => "Submit",
        Locale::Ja => "送信",
    }
}
