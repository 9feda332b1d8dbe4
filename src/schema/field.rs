//! Field identifiers and the fixed option sets

use serde::{Deserialize, Serialize};
use std::fmt;

/// Every field the profile form knows about, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Name,
    Email,
    Password,
    Role,
    Preferences,
    StartDate,
    EndDate,
}

impl Field {
    pub const ALL: [Field; 7] = [
        Field::Name,
        Field::Email,
        Field::Password,
        Field::Role,
        Field::Preferences,
        Field::StartDate,
        Field::EndDate,
    ];

    /// Path segment used in validation errors and serialized records
    pub fn path(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Password => "password",
            Self::Role => "role",
            Self::Preferences => "preferences",
            Self::StartDate => "startDate",
            Self::EndDate => "endDate",
        }
    }

    pub fn from_path(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.path() == path)
    }

    /// True for fields that hold a set of values rather than a single one
    pub fn is_multi_value(self) -> bool {
        matches!(self, Self::Preferences)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Account role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    #[default]
    User,
    Guest,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Admin, Role::User, Role::Guest];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::User => "user",
            Self::Guest => "guest",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.as_str() == value)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::User => "User",
            Self::Guest => "Guest",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Self::Admin => Self::User,
            Self::User => Self::Guest,
            Self::Guest => Self::Admin,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Admin => Self::Guest,
            Self::User => Self::Admin,
            Self::Guest => Self::User,
        }
    }
}

/// Values accepted by the preferences checkbox group
pub const PREFERENCE_OPTIONS: [&str; 3] = ["sports", "music", "movies"];

pub fn is_known_preference(value: &str) -> bool {
    PREFERENCE_OPTIONS.contains(&value)
}
