//! App configuration, loaded from `~/.config/ghost-shell/config.json`.
//! A missing file means defaults; a malformed one warns and falls back.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_fps")]
    pub target_fps: u64,
    /// Fixed seed for the particle field; omit for a time-derived seed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_seed: Option<u64>,
    #[serde(default)]
    pub key_bindings: KeyBindings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyBindings {
    pub quit: String,
    pub history_older: String,
    pub history_newer: String,
    pub complete: String,
}

fn default_fps() -> u64 {
    60
}

impl Default for KeyBindings {
    fn default() -> Self {
        KeyBindings {
            quit: "Ctrl-q".into(),
            history_older: "Up".into(),
            history_newer: "Down".into(),
            complete: "Tab".into(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            target_fps: default_fps(),
            field_seed: None,
            key_bindings: KeyBindings::default(),
        }
    }
}

impl AppConfig {
    pub fn load() -> Self {
        let config_path = Self::config_path();
        match std::fs::read_to_string(&config_path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("Warning: invalid config ({e}), using defaults");
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    fn config_path() -> std::path::PathBuf {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
        let mut path = std::path::PathBuf::from(home);
        path.push(".config");
        path.push("ghost-shell");
        path.push("config.json");
        path
    }
}

/// Check whether a crossterm `KeyEvent` matches a binding string from config.
pub fn matches_binding(binding: &str, event: &KeyEvent) -> bool {
    // Handle Ctrl- prefix
    if let Some(rest) = binding.strip_prefix("Ctrl-") {
        if !event.modifiers.contains(KeyModifiers::CONTROL) {
            return false;
        }
        return if let Some(c) = rest.chars().next() {
            event.code == KeyCode::Char(c)
        } else {
            false
        };
    }

    // For non-Ctrl bindings, reject if Ctrl or Alt is held. This prevents
    // plain bindings like "q" from firing on Ctrl-q.
    if event.modifiers.contains(KeyModifiers::CONTROL)
        || event.modifiers.contains(KeyModifiers::ALT)
    {
        return false;
    }

    match binding {
        "Right" => event.code == KeyCode::Right,
        "Left" => event.code == KeyCode::Left,
        "Up" => event.code == KeyCode::Up,
        "Down" => event.code == KeyCode::Down,
        "Enter" => event.code == KeyCode::Enter,
        "Esc" => event.code == KeyCode::Esc,
        "Space" => event.code == KeyCode::Char(' '),
        "Tab" => event.code == KeyCode::Tab,
        "Backspace" => event.code == KeyCode::Backspace,
        "Home" => event.code == KeyCode::Home,
        "End" => event.code == KeyCode::End,
        s => {
            // F-key binding: "F1" through "F12" etc.
            if let Some(rest) = s.strip_prefix('F') {
                if let Ok(n) = rest.parse::<u8>() {
                    return event.code == KeyCode::F(n);
                }
            }
            // Single character binding
            if let Some(c) = s.chars().next() {
                event.code == KeyCode::Char(c)
            } else {
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn ctrl_bindings_require_the_modifier() {
        assert!(matches_binding(
            "Ctrl-q",
            &key(KeyCode::Char('q'), KeyModifiers::CONTROL),
        ));
        assert!(!matches_binding(
            "Ctrl-q",
            &key(KeyCode::Char('q'), KeyModifiers::NONE),
        ));
    }

    #[test]
    fn plain_bindings_reject_held_modifiers() {
        assert!(matches_binding("Tab", &key(KeyCode::Tab, KeyModifiers::NONE)));
        assert!(!matches_binding(
            "Tab",
            &key(KeyCode::Tab, KeyModifiers::CONTROL),
        ));
    }

    #[test]
    fn arrow_bindings_match_their_codes() {
        assert!(matches_binding("Up", &key(KeyCode::Up, KeyModifiers::NONE)));
        assert!(!matches_binding("Up", &key(KeyCode::Down, KeyModifiers::NONE)));
    }

    #[test]
    fn partial_config_files_fill_in_defaults() {
        let config: AppConfig = serde_json::from_str("{}").expect("parse");
        assert_eq!(config.target_fps, 60);
        assert_eq!(config.key_bindings.quit, "Ctrl-q");
        assert!(config.field_seed.is_none());
    }

    #[test]
    fn full_config_round_trips() {
        let config: AppConfig = serde_json::from_str(
            r#"{
                "target_fps": 30,
                "field_seed": 7,
                "key_bindings": {
                    "quit": "Esc",
                    "history_older": "Up",
                    "history_newer": "Down",
                    "complete": "Tab"
                }
            }"#,
        )
        .expect("parse");
        assert_eq!(config.target_fps, 30);
        assert_eq!(config.field_seed, Some(7));
        assert_eq!(config.key_bindings.quit, "Esc");
    }
}
