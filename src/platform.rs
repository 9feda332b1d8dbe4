//! Form shortcuts: Ctrl+<key> everywhere, Cmd+<key> on macOS too

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[cfg(target_os = "macos")]
const SHORTCUT_MODIFIER: KeyModifiers = KeyModifiers::SUPER;
#[cfg(target_os = "macos")]
const SHORTCUT_PREFIX: &str = "Cmd";

#[cfg(not(target_os = "macos"))]
const SHORTCUT_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;
#[cfg(not(target_os = "macos"))]
const SHORTCUT_PREFIX: &str = "Ctrl";

pub const SUBMIT_KEY: char = 's';
pub const RESET_KEY: char = 'r';

pub fn is_shortcut(key: &KeyEvent, c: char) -> bool {
    key.code == KeyCode::Char(c)
        && (key.modifiers.contains(KeyModifiers::CONTROL)
            || key.modifiers.contains(SHORTCUT_MODIFIER))
}

/// Hint text for the status bar, e.g. `Ctrl+S`
pub fn shortcut_label(c: char) -> String {
    format!("{SHORTCUT_PREFIX}+{}", c.to_ascii_uppercase())
}
