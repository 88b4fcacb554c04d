//! Keybinding configuration

use ratatui::crossterm::event::{KeyCode, KeyModifiers};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Actions that can be triggered by keybindings while a sheet is open
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Click the focused button
    Activate,
    /// Focus the next button
    NextButton,
    /// Focus the previous button
    PrevButton,
    /// Escape: behaves like a backdrop tap
    Dismiss,
}

impl Action {
    /// Get the display description for this action
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Activate => "Choose",
            Self::NextButton => "Next",
            Self::PrevButton => "Previous",
            Self::Dismiss => "Close",
        }
    }

    /// All actions in display order for hints
    pub const ALL_FOR_HINTS: &'static [Self] = &[
        Self::NextButton,
        Self::PrevButton,
        Self::Activate,
        Self::Dismiss,
    ];
}

/// Keybinding configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    /// Map of key strings to actions (for serialization)
    bindings: HashMap<String, Action>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut bindings = HashMap::new();

        bindings.insert("Enter".to_string(), Action::Activate);
        bindings.insert(" ".to_string(), Action::Activate);
        bindings.insert("j".to_string(), Action::NextButton);
        bindings.insert("Down".to_string(), Action::NextButton);
        bindings.insert("Tab".to_string(), Action::NextButton);
        bindings.insert("k".to_string(), Action::PrevButton);
        bindings.insert("Up".to_string(), Action::PrevButton);
        bindings.insert("Shift+BackTab".to_string(), Action::PrevButton);
        bindings.insert("Esc".to_string(), Action::Dismiss);

        Self { bindings }
    }
}

impl KeyBindings {
    /// Merge in any missing default keybindings
    pub fn merge_defaults(&mut self) {
        let defaults = Self::default();
        for (key, action) in defaults.bindings {
            self.bindings.entry(key).or_insert(action);
        }
    }

    /// Get the action for a key event
    #[must_use]
    pub fn get_action(&self, code: KeyCode, modifiers: KeyModifiers) -> Option<Action> {
        let key_str = key_to_string(code, modifiers);
        self.bindings.get(&key_str).copied()
    }

    /// Get all bindings for an action
    #[must_use]
    pub fn keys_for_action(&self, action: Action) -> Vec<String> {
        self.bindings
            .iter()
            .filter_map(|(k, &v)| if v == action { Some(k.clone()) } else { None })
            .collect()
    }

    /// Hint line shown under the sheet
    #[must_use]
    pub fn hints(&self) -> String {
        Action::ALL_FOR_HINTS
            .iter()
            .filter_map(|action| {
                let key = self.keys_for_action(*action).into_iter().min()?;
                let key = if key == " " { "Space".to_string() } else { key };
                Some(format!("[{key}]{}", action.description()))
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Convert a key code and modifiers to a string representation
#[must_use]
pub fn key_to_string(code: KeyCode, modifiers: KeyModifiers) -> String {
    let mut parts = Vec::new();

    if modifiers.contains(KeyModifiers::CONTROL) {
        parts.push("Ctrl".to_string());
    }
    if modifiers.contains(KeyModifiers::ALT) {
        parts.push("Alt".to_string());
    }
    if modifiers.contains(KeyModifiers::SHIFT) && !matches!(code, KeyCode::Char(_)) {
        parts.push("Shift".to_string());
    }

    let key_part = match code {
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::BackTab => "BackTab".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Up => "Up".to_string(),
        KeyCode::Down => "Down".to_string(),
        KeyCode::Left => "Left".to_string(),
        KeyCode::Right => "Right".to_string(),
        KeyCode::Home => "Home".to_string(),
        KeyCode::End => "End".to_string(),
        KeyCode::F(n) => format!("F{n}"),
        _ => return String::new(),
    };

    parts.push(key_part);
    parts.join("+")
}
