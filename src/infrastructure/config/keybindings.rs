use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use derive_deref::{Deref, DerefMut};
use serde::{de::Deserializer, Deserialize, Serialize};
use strum::Display;

use crate::domain::{error::ConfigurationError, view::ViewId};

/// User-facing commands bound to keys, per view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Action {
    Quit,
    Suspend,
    /// Return to the dashboard
    Back,
    /// Return to the passcode gate
    Lock,
    OpenCalendar,
    OpenGame,
    OpenMemories,
    OpenLetter,
    ClearDigits,
    FocusUp,
    FocusDown,
    FocusLeft,
    FocusRight,
    SwitchArea,
    Select,
    Cancel,
    ToggleEnvelope,
    DismissLetter,
    NextMemory,
    PreviousMemory,
}

#[derive(Clone, Debug, Default, Deref, DerefMut)]
pub struct KeyBindings(pub HashMap<ViewId, HashMap<Vec<KeyEvent>, Action>>);

impl KeyBindings {
    pub fn action_for(&self, view: ViewId, key: KeyEvent) -> Option<Action> {
        self.get(&view)?.get(&vec![key]).copied()
    }

    /// Fills in every binding of `defaults` the user did not override
    pub fn merge_defaults(&mut self, defaults: &KeyBindings) {
        for (view, default_bindings) in defaults.iter() {
            let user_bindings = self.entry(*view).or_default();
            for (keys, action) in default_bindings {
                user_bindings.entry(keys.clone()).or_insert(*action);
            }
        }
    }
}

impl<'de> Deserialize<'de> for KeyBindings {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let parsed_map = HashMap::<ViewId, HashMap<String, Action>>::deserialize(deserializer)?;

        let mut keybindings = HashMap::new();
        for (view, inner_map) in parsed_map {
            let mut bindings = HashMap::new();
            for (key_str, action) in inner_map {
                let keys = parse_key_sequence(&key_str).map_err(serde::de::Error::custom)?;
                bindings.insert(keys, action);
            }
            keybindings.insert(view, bindings);
        }

        Ok(KeyBindings(keybindings))
    }
}

/// Parses `<ctrl-c>`, `<q><q>` or a bare `q`
pub fn parse_key_sequence(raw: &str) -> Result<Vec<KeyEvent>, ConfigurationError> {
    let invalid = || ConfigurationError::InvalidKeySequence(raw.to_string());

    if raw.chars().filter(|c| *c == '>').count() != raw.chars().filter(|c| *c == '<').count() {
        return Err(invalid());
    }
    let raw = if raw.contains("><") {
        raw
    } else {
        let raw = raw.strip_prefix('<').unwrap_or(raw);
        raw.strip_suffix('>').unwrap_or(raw)
    };

    raw.split("><")
        .map(|seq| {
            let seq = seq.strip_prefix('<').unwrap_or(seq);
            let seq = seq.strip_suffix('>').unwrap_or(seq);
            parse_key_event(seq).map_err(|_| invalid())
        })
        .collect()
}

pub fn parse_key_event(raw: &str) -> Result<KeyEvent, ConfigurationError> {
    let lowered = raw.to_ascii_lowercase();
    let (remaining, modifiers) = extract_modifiers(&lowered);
    parse_key_code_with_modifiers(remaining, modifiers)
        .ok_or_else(|| ConfigurationError::InvalidKeySequence(raw.to_string()))
}

fn extract_modifiers(raw: &str) -> (&str, KeyModifiers) {
    let mut modifiers = KeyModifiers::empty();
    let mut current = raw;

    loop {
        if let Some(rest) = current.strip_prefix("ctrl-") {
            modifiers.insert(KeyModifiers::CONTROL);
            current = rest;
        } else if let Some(rest) = current.strip_prefix("alt-") {
            modifiers.insert(KeyModifiers::ALT);
            current = rest;
        } else if let Some(rest) = current.strip_prefix("shift-") {
            modifiers.insert(KeyModifiers::SHIFT);
            current = rest;
        } else {
            break;
        }
    }

    (current, modifiers)
}

fn parse_key_code_with_modifiers(raw: &str, mut modifiers: KeyModifiers) -> Option<KeyEvent> {
    let code = match raw {
        "esc" => KeyCode::Esc,
        "enter" => KeyCode::Enter,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" => KeyCode::PageUp,
        "pagedown" => KeyCode::PageDown,
        "backtab" => {
            modifiers.insert(KeyModifiers::SHIFT);
            KeyCode::BackTab
        }
        "backspace" => KeyCode::Backspace,
        "delete" => KeyCode::Delete,
        "insert" => KeyCode::Insert,
        "tab" => KeyCode::Tab,
        "space" => KeyCode::Char(' '),
        "hyphen" | "minus" => KeyCode::Char('-'),
        "f1" => KeyCode::F(1),
        "f2" => KeyCode::F(2),
        "f3" => KeyCode::F(3),
        "f4" => KeyCode::F(4),
        "f5" => KeyCode::F(5),
        "f6" => KeyCode::F(6),
        "f7" => KeyCode::F(7),
        "f8" => KeyCode::F(8),
        "f9" => KeyCode::F(9),
        "f10" => KeyCode::F(10),
        "f11" => KeyCode::F(11),
        "f12" => KeyCode::F(12),
        c if c.chars().count() == 1 => {
            let mut c = c.chars().next()?;
            if modifiers.contains(KeyModifiers::SHIFT) {
                c = c.to_ascii_uppercase();
            }
            KeyCode::Char(c)
        }
        _ => return None,
    };
    Some(KeyEvent::new(code, modifiers))
}
