//! Keyboard bindings configuration.

use crate::model::key_action::KeyAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Maps keyboard events to browsing actions.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    ///
    /// Only code and modifiers take part in the lookup; press/repeat kind
    /// and keyboard state are ignored.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        self.bindings
            .get(&KeyEvent::new(key.code, key.modifiers))
            .copied()
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut bindings = HashMap::new();

        let plain = |c: char| KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE);

        bindings.insert(plain('q'), KeyAction::Quit);
        bindings.insert(plain('c'), KeyAction::NewSearch);
        bindings.insert(plain('/'), KeyAction::EnterFilter);
        bindings.insert(plain('n'), KeyAction::ClearFilter);

        // Help: h or H. Terminals differ on whether 'H' carries SHIFT.
        bindings.insert(plain('h'), KeyAction::Help);
        bindings.insert(plain('H'), KeyAction::Help);
        bindings.insert(
            KeyEvent::new(KeyCode::Char('H'), KeyModifiers::SHIFT),
            KeyAction::Help,
        );

        bindings.insert(
            KeyEvent::new(KeyCode::Up, KeyModifiers::NONE),
            KeyAction::ScrollUp,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Down, KeyModifiers::NONE),
            KeyAction::ScrollDown,
        );

        Self { bindings }
    }
}
