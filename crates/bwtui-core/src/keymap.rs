//! Named actions and their configurable key bindings.

use crate::error::ConfigError;
use serde::Deserialize;
use std::fmt;

/// Everything a key press can ask the application to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    FocusFilter,
    ClearFilter,
    MoveUp,
    MoveDown,
    CopyPassword,
    CopyUsername,
    OpenDetails,
    ToggleReveal,
    CloseDetails,
    DismissMessage,
    Quit,
}

impl Action {
    /// Name used in the `[keys]` config table.
    pub fn name(self) -> &'static str {
        match self {
            Self::FocusFilter => "focus-filter",
            Self::ClearFilter => "clear-filter",
            Self::MoveUp => "move-up",
            Self::MoveDown => "move-down",
            Self::CopyPassword => "copy-password",
            Self::CopyUsername => "copy-username",
            Self::OpenDetails => "open-details",
            Self::ToggleReveal => "toggle-reveal",
            Self::CloseDetails => "close-details",
            Self::DismissMessage => "dismiss-message",
            Self::Quit => "quit",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Character bindings for the list and details views.
///
/// `open-details`, `close-details` and `dismiss-message` are bound to
/// Enter/Esc by the frontend and are not configurable here.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct KeyBindings {
    pub focus_filter: char,
    pub clear_filter: char,
    pub copy_password: char,
    pub copy_username: char,
    pub quit: char,
    pub move_up: char,
    pub move_down: char,
    pub toggle_reveal: char,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            focus_filter: '/',
            clear_filter: 'c',
            copy_password: 'p',
            copy_username: 'u',
            quit: 'q',
            move_up: 'k',
            move_down: 'j',
            toggle_reveal: 'r',
        }
    }
}

impl KeyBindings {
    fn list_table(&self) -> [(char, Action); 7] {
        [
            (self.focus_filter, Action::FocusFilter),
            (self.clear_filter, Action::ClearFilter),
            (self.copy_password, Action::CopyPassword),
            (self.copy_username, Action::CopyUsername),
            (self.quit, Action::Quit),
            (self.move_up, Action::MoveUp),
            (self.move_down, Action::MoveDown),
        ]
    }

    /// Action bound to `key` while the list has focus.
    pub fn list_action(&self, key: char) -> Option<Action> {
        self.list_table()
            .into_iter()
            .find(|(bound, _)| *bound == key)
            .map(|(_, action)| action)
    }

    /// Action bound to `key` while the details overlay has focus.
    pub fn details_action(&self, key: char) -> Option<Action> {
        if key == self.toggle_reveal {
            Some(Action::ToggleReveal)
        } else if key == self.quit {
            Some(Action::CloseDetails)
        } else {
            None
        }
    }

    /// The key bound to `action`, if it has a character binding.
    pub fn key_for(&self, action: Action) -> Option<char> {
        if action == Action::ToggleReveal {
            return Some(self.toggle_reveal);
        }
        self.list_table()
            .into_iter()
            .find(|(_, bound)| *bound == action)
            .map(|(key, _)| key)
    }

    /// Reject tables where one key triggers two list actions, or where the
    /// reveal key shadows quit in the details view.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let table = self.list_table();
        for (i, (key, first)) in table.iter().enumerate() {
            if let Some((_, second)) = table[i + 1..].iter().find(|(other, _)| other == key) {
                return Err(ConfigError::DuplicateBinding {
                    key: *key,
                    first: first.name(),
                    second: second.name(),
                });
            }
        }
        if self.toggle_reveal == self.quit {
            return Err(ConfigError::DuplicateBinding {
                key: self.quit,
                first: Action::Quit.name(),
                second: Action::ToggleReveal.name(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bindings() {
        let keys = KeyBindings::default();
        assert_eq!(keys.list_action('/'), Some(Action::FocusFilter));
        assert_eq!(keys.list_action('c'), Some(Action::ClearFilter));
        assert_eq!(keys.list_action('p'), Some(Action::CopyPassword));
        assert_eq!(keys.list_action('u'), Some(Action::CopyUsername));
        assert_eq!(keys.list_action('q'), Some(Action::Quit));
        assert_eq!(keys.list_action('k'), Some(Action::MoveUp));
        assert_eq!(keys.list_action('j'), Some(Action::MoveDown));
        assert_eq!(keys.list_action('x'), None);
        assert!(keys.validate().is_ok());
    }

    #[test]
    fn details_keys_are_local() {
        let keys = KeyBindings::default();
        assert_eq!(keys.details_action('r'), Some(Action::ToggleReveal));
        assert_eq!(keys.details_action('q'), Some(Action::CloseDetails));
        assert_eq!(keys.details_action('p'), None);
        assert_eq!(keys.list_action('r'), None);
    }

    #[test]
    fn key_for_looks_up_reverse() {
        let keys = KeyBindings {
            copy_password: 'y',
            ..KeyBindings::default()
        };
        assert_eq!(keys.key_for(Action::CopyPassword), Some('y'));
        assert_eq!(keys.key_for(Action::ToggleReveal), Some('r'));
        assert_eq!(keys.key_for(Action::OpenDetails), None);
    }

    #[test]
    fn duplicate_binding_is_rejected() {
        let keys = KeyBindings {
            move_down: 'k',
            ..KeyBindings::default()
        };
        let err = keys.validate().unwrap_err();
        assert_eq!(err.to_string(), "key 'k' is bound to both move-up and move-down");

        let keys = KeyBindings {
            toggle_reveal: 'q',
            ..KeyBindings::default()
        };
        assert!(keys.validate().is_err());
    }
}
