//! Caller-supplied action sheet options

use crate::button::ButtonInput;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

const fn default_enable_backdrop_dismiss() -> bool {
    true
}

/// Options for one action sheet.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionSheetConfig {
    /// Heading shown above the buttons.
    #[serde(default)]
    pub title: Option<String>,
    /// Secondary heading.
    #[serde(default)]
    pub sub_title: Option<String>,
    /// Raw button entries.
    #[serde(default)]
    pub buttons: Vec<ButtonInput>,
    /// Extra space separated classes for the root node.
    #[serde(default)]
    pub css_class: Option<String>,
    /// Whether tapping the backdrop (or pressing escape) closes the sheet.
    #[serde(default = "default_enable_backdrop_dismiss")]
    pub enable_backdrop_dismiss: bool,
}

impl Default for ActionSheetConfig {
    fn default() -> Self {
        Self {
            title: None,
            sub_title: None,
            buttons: Vec::new(),
            css_class: None,
            enable_backdrop_dismiss: default_enable_backdrop_dismiss(),
        }
    }
}

impl ActionSheetConfig {
    /// Empty sheet with backdrop dismissal enabled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the subtitle.
    #[must_use]
    pub fn sub_title(mut self, sub_title: impl Into<String>) -> Self {
        self.sub_title = Some(sub_title.into());
        self
    }

    /// Append a button entry.
    #[must_use]
    pub fn button(mut self, button: impl Into<ButtonInput>) -> Self {
        self.buttons.push(button.into());
        self
    }

    /// Set the extra root classes.
    #[must_use]
    pub fn css_class(mut self, css_class: impl Into<String>) -> Self {
        self.css_class = Some(css_class.into());
        self
    }

    /// Enable or disable backdrop dismissal.
    #[must_use]
    pub const fn enable_backdrop_dismiss(mut self, enable: bool) -> Self {
        self.enable_backdrop_dismiss = enable;
        self
    }

    /// Title text, treating an empty string as absent.
    #[must_use]
    pub fn title_text(&self) -> Option<&str> {
        self.title.as_deref().filter(|t| !t.is_empty())
    }

    /// Subtitle text, treating an empty string as absent.
    #[must_use]
    pub fn sub_title_text(&self) -> Option<&str> {
        self.sub_title.as_deref().filter(|t| !t.is_empty())
    }

    /// Load a sheet definition from a JSON file.
    ///
    /// Handlers cannot be expressed in JSON; loaded buttons have none.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read sheet from {}", path.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse sheet from {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::button::ActionSheetButton;
    use std::io::Write;

    #[test]
    fn test_default_enables_backdrop_dismiss() {
        assert!(ActionSheetConfig::default().enable_backdrop_dismiss);
    }

    #[test]
    fn test_empty_title_is_absent() {
        let config = ActionSheetConfig::new().title("").sub_title("Sub");
        assert_eq!(config.title_text(), None);
        assert_eq!(config.sub_title_text(), Some("Sub"));
    }

    #[test]
    fn test_builder_collects_buttons() {
        let config = ActionSheetConfig::new()
            .button("One")
            .button(ActionSheetButton::new("Two"))
            .enable_backdrop_dismiss(false);
        assert_eq!(config.buttons.len(), 2);
        assert!(!config.enable_backdrop_dismiss);
    }

    #[test]
    fn test_load_from_file() -> Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        write!(
            file,
            r#"{{"title": "Share", "subTitle": "Pick one", "buttons": ["Copy", {{"text": "Cancel", "role": "cancel"}}], "cssClass": "wide"}}"#
        )?;
        let config = ActionSheetConfig::load_from(file.path())?;
        assert_eq!(config.title_text(), Some("Share"));
        assert_eq!(config.sub_title_text(), Some("Pick one"));
        assert_eq!(config.buttons.len(), 2);
        assert_eq!(config.css_class.as_deref(), Some("wide"));
        assert!(config.enable_backdrop_dismiss);
        Ok(())
    }

    #[test]
    fn test_load_from_missing_file_fails() {
        let result = ActionSheetConfig::load_from(Path::new("/nonexistent/sheet.json"));
        assert!(result.is_err());
    }
}
