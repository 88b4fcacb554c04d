//! Action sheet buttons and their normalization

use serde::{Deserialize, Serialize};
use std::fmt;

/// Class appended to buttons with [`Role::Destructive`].
pub const DESTRUCTIVE_CLASS: &str = "action-sheet-destructive";
/// Class appended to buttons with [`Role::Selected`].
pub const SELECTED_CLASS: &str = "action-sheet-selected";

/// Semantic role of a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Closes the sheet without acting; rendered in its own group.
    Cancel,
    /// Performs a destructive action.
    Destructive,
    /// Marks the currently selected option.
    Selected,
}

impl Role {
    /// Lowercase name, also used as the dismissal reason.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cancel => "cancel",
            Self::Destructive => "destructive",
            Self::Selected => "selected",
        }
    }

    /// Parse a role name. Unknown names mean "no role".
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "cancel" => Some(Self::Cancel),
            "destructive" => Some(Self::Destructive),
            "selected" => Some(Self::Selected),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn deserialize_role<'de, D>(deserializer: D) -> Result<Option<Role>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let name: Option<String> = Option::deserialize(deserializer)?;
    Ok(name.as_deref().and_then(Role::parse))
}

fn deserialize_class<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let class: Option<String> = Option::deserialize(deserializer)?;
    Ok(class.unwrap_or_default())
}

/// What a button handler wants done after it ran.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HandlerOutcome {
    /// Let the sheet dismiss itself.
    #[default]
    Proceed,
    /// Keep the sheet open.
    Veto,
}

impl From<()> for HandlerOutcome {
    fn from((): ()) -> Self {
        Self::Proceed
    }
}

/// Callback attached to a button.
pub struct ButtonHandler(Box<dyn FnMut() -> HandlerOutcome>);

impl ButtonHandler {
    /// Wrap a closure. Closures returning `()` always proceed.
    pub fn new<F, R>(mut f: F) -> Self
    where
        F: FnMut() -> R + 'static,
        R: Into<HandlerOutcome>,
    {
        Self(Box::new(move || f().into()))
    }

    /// Run the handler.
    pub fn call(&mut self) -> HandlerOutcome {
        (self.0)()
    }
}

impl fmt::Debug for ButtonHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ButtonHandler(..)")
    }
}

/// A fully described button.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionSheetButton {
    /// Display label.
    pub text: String,
    /// Icon name, rendered as a glyph before the label.
    #[serde(default)]
    pub icon: Option<String>,
    /// Semantic role.
    #[serde(default, deserialize_with = "deserialize_role")]
    pub role: Option<Role>,
    /// Space separated style classes.
    #[serde(default, deserialize_with = "deserialize_class")]
    pub css_class: String,
    /// Invoked when the button is clicked.
    #[serde(skip)]
    pub handler: Option<ButtonHandler>,
}

impl ActionSheetButton {
    /// A button with only a label.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Set the role.
    #[must_use]
    pub const fn with_role(mut self, role: Role) -> Self {
        self.role = Some(role);
        self
    }

    /// Set the icon.
    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Set the style classes.
    #[must_use]
    pub fn with_class(mut self, css_class: impl Into<String>) -> Self {
        self.css_class = css_class.into();
        self
    }

    /// Attach a click handler.
    #[must_use]
    pub fn with_handler<F, R>(mut self, f: F) -> Self
    where
        F: FnMut() -> R + 'static,
        R: Into<HandlerOutcome>,
    {
        self.handler = Some(ButtonHandler::new(f));
        self
    }

    /// Whether `class` appears among the button's classes.
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.css_class.split_whitespace().any(|c| c == class)
    }
}

/// A raw button entry as supplied by the caller.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ButtonInput {
    /// Bare label.
    Label(String),
    /// Full descriptor.
    Button(ActionSheetButton),
}

impl From<&str> for ButtonInput {
    fn from(text: &str) -> Self {
        Self::Label(text.to_string())
    }
}

impl From<String> for ButtonInput {
    fn from(text: String) -> Self {
        Self::Label(text)
    }
}

impl From<ActionSheetButton> for ButtonInput {
    fn from(button: ActionSheetButton) -> Self {
        Self::Button(button)
    }
}

/// Buttons after normalization.
#[derive(Debug, Default)]
pub struct Normalized {
    /// Regular buttons in input order.
    pub buttons: Vec<ActionSheetButton>,
    /// The cancel button, if any entry had [`Role::Cancel`].
    pub cancel: Option<ActionSheetButton>,
}

/// Turn raw entries into canonical buttons.
///
/// Labels become buttons, role classes are appended and the cancel button is
/// pulled out of the list. With several cancel entries the last one wins.
#[must_use]
pub fn normalize(inputs: Vec<ButtonInput>) -> Normalized {
    let mut out = Normalized::default();
    for input in inputs {
        let mut button = match input {
            ButtonInput::Label(text) => ActionSheetButton::new(text),
            ButtonInput::Button(button) => button,
        };
        match button.role {
            Some(Role::Cancel) => {
                out.cancel = Some(button);
                continue;
            }
            Some(Role::Destructive) => append_class(&mut button.css_class, DESTRUCTIVE_CLASS),
            Some(Role::Selected) => append_class(&mut button.css_class, SELECTED_CLASS),
            None => {}
        }
        out.buttons.push(button);
    }
    out
}

// Always inserts the separator, so an empty class list gains a leading space.
fn append_class(classes: &mut String, class: &str) {
    classes.push(' ');
    classes.push_str(class);
}
