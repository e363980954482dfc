use super::action::Action;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct KeyConfig {
    pub profile: String,
    /// Action name -> key, e.g. `select_next = "ctrl-j"`.
    pub custom: Option<HashMap<String, String>>,
}

impl Default for KeyConfig {
    fn default() -> Self {
        Self {
            profile: "default".to_string(),
            custom: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct KeyMap {
    pub bindings: HashMap<KeyEvent, Action>,
}

impl KeyMap {
    pub fn from_config(config: &KeyConfig) -> Self {
        let mut bindings = HashMap::new();

        bindings.insert(key(KeyCode::Enter), Action::CommitActive);
        bindings.insert(key(KeyCode::Down), Action::SelectNext);
        bindings.insert(key(KeyCode::Up), Action::SelectPrev);
        bindings.insert(key(KeyCode::Esc), Action::Cancel);
        bindings.insert(ctrl('c'), Action::Quit);

        match config.profile.as_str() {
            "emacs" => {
                bindings.insert(ctrl('n'), Action::SelectNext);
                bindings.insert(ctrl('p'), Action::SelectPrev);
                bindings.insert(ctrl('g'), Action::Cancel);
            }
            "default" => {}
            other => tracing::warn!(profile = other, "unknown key profile, using default"),
        }

        if let Some(custom) = &config.custom {
            for (name, spec) in custom {
                match (Action::from_name(name), parse_key(spec)) {
                    (Some(action), Some(event)) => {
                        bindings.insert(event, action);
                    }
                    _ => tracing::warn!(action = %name, key = %spec, "ignoring invalid key binding"),
                }
            }
        }

        Self { bindings }
    }

    pub fn get_action(&self, event: KeyEvent) -> Option<Action> {
        let lookup = KeyEvent::new(event.code, event.modifiers);
        self.bindings.get(&lookup).cloned()
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        Self::from_config(&KeyConfig::default())
    }
}

/// Parses key specs such as `"down"`, `"ctrl-j"` or `"alt-enter"`.
pub fn parse_key(spec: &str) -> Option<KeyEvent> {
    let spec = spec.trim().to_lowercase();
    let mut modifiers = KeyModifiers::empty();
    let mut parts: Vec<&str> = spec.split('-').collect();
    // "ctrl--" binds the minus key
    let last = match parts.pop()? {
        "" if spec.ends_with("--") => "-",
        other => other,
    };
    if last.is_empty() {
        return None;
    }

    for part in parts.iter().filter(|p| !p.is_empty()) {
        match *part {
            "ctrl" => modifiers.insert(KeyModifiers::CONTROL),
            "alt" => modifiers.insert(KeyModifiers::ALT),
            "shift" => modifiers.insert(KeyModifiers::SHIFT),
            _ => return None,
        }
    }

    let code = match last {
        "enter" => KeyCode::Enter,
        "esc" => KeyCode::Esc,
        "tab" => KeyCode::Tab,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" => KeyCode::PageUp,
        "pagedown" => KeyCode::PageDown,
        s => {
            let mut chars = s.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => KeyCode::Char(c),
                _ => return None,
            }
        }
    };

    Some(KeyEvent::new(code, modifiers))
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::empty())
}

fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}
