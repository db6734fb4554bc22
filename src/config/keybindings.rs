//! Keyboard bindings configuration.

use crate::model::key_action::KeyAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Maps keyboard events to domain actions.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        self.bindings.get(&key).copied()
    }

    fn bind(&mut self, code: KeyCode, modifiers: KeyModifiers, action: KeyAction) {
        self.bindings.insert(KeyEvent::new(code, modifiers), action);
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut keys = Self {
            bindings: HashMap::new(),
        };
        let none = KeyModifiers::NONE;

        // List scrolling
        keys.bind(KeyCode::Char('j'), none, KeyAction::ScrollDown);
        keys.bind(KeyCode::Down, none, KeyAction::ScrollDown);
        keys.bind(KeyCode::Char('k'), none, KeyAction::ScrollUp);
        keys.bind(KeyCode::Up, none, KeyAction::ScrollUp);

        // Pagination
        keys.bind(KeyCode::Char('l'), none, KeyAction::NextPage);
        keys.bind(KeyCode::Right, none, KeyAction::NextPage);
        keys.bind(KeyCode::Char('h'), none, KeyAction::PrevPage);
        keys.bind(KeyCode::Left, none, KeyAction::PrevPage);
        keys.bind(KeyCode::Home, none, KeyAction::FirstPage);
        keys.bind(KeyCode::End, none, KeyAction::LastPage);
        for digit in 1..=9u8 {
            keys.bind(
                KeyCode::Char(char::from(b'0' + digit)),
                none,
                KeyAction::JumpToPage(u32::from(digit)),
            );
        }

        // Tabs
        keys.bind(KeyCode::Tab, none, KeyAction::NextTab);
        keys.bind(KeyCode::BackTab, KeyModifiers::SHIFT, KeyAction::PrevTab);
        keys.bind(KeyCode::BackTab, none, KeyAction::PrevTab);
        keys.bind(KeyCode::Char('s'), none, KeyAction::CycleSort);

        // Screens and history
        keys.bind(KeyCode::Char('H'), KeyModifiers::SHIFT, KeyAction::GoHome);
        keys.bind(KeyCode::Char('m'), none, KeyAction::GoMyPage);
        keys.bind(KeyCode::Left, KeyModifiers::ALT, KeyAction::Back);
        keys.bind(KeyCode::Char('b'), none, KeyAction::Back);
        keys.bind(KeyCode::Right, KeyModifiers::ALT, KeyAction::Forward);
        keys.bind(KeyCode::Char('f'), none, KeyAction::Forward);

        // Application
        keys.bind(KeyCode::Char('r'), none, KeyAction::Refresh);
        keys.bind(KeyCode::Char('q'), none, KeyAction::Quit);
        keys.bind(KeyCode::Char('c'), KeyModifiers::CONTROL, KeyAction::Quit);

        keys
    }
}
