//! The action sheet presenter
//!
//! Binds an [`ActionSheetConfig`] to the collaborators of its host: it
//! normalizes the buttons on load, blocks background gestures while visible,
//! forwards clicks to button handlers and asks its [`ViewController`] to close
//! the sheet.

use crate::button::{self, ActionSheetButton, ButtonHandler, HandlerOutcome, Role};
use crate::controller::{
    Blocker, ClassRenderer, ConfigSource, DismissOptions, Dismissal, GestureController,
    GestureScope, ViewController,
};
use crate::ids::{self, IdCounter};
use crate::lifecycle::Lifecycle;
use crate::sheet::ActionSheetConfig;
use ratatui::crossterm::event::KeyCode;
use std::collections::BTreeSet;
use std::fmt;
use std::time::Duration;
use tracing::{debug, info};

/// Dismissal reason used when the backdrop closes a sheet without a cancel button.
pub const BACKDROP_ROLE: &str = "backdrop";

/// Mode used when the config source has none.
pub const DEFAULT_MODE: &str = "md";

/// Config key overriding the tap suppression window, in milliseconds.
pub const MIN_CLICK_BLOCK_KEY: &str = "minClickBlockDuration";

/// Accessibility role of the root node.
pub const DIALOG_ROLE: &str = "dialog";

/// The element hosting the sheet: style classes and accessibility links.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RootNode {
    /// Applied style classes.
    pub classes: BTreeSet<String>,
    /// Accessibility role.
    pub role: &'static str,
    /// Id of the element labelling this node.
    pub labelled_by: Option<String>,
    /// Id of the element describing this node.
    pub described_by: Option<String>,
}

impl RootNode {
    /// Whether `class` has been applied.
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }
}

/// Addresses a button of a loaded sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonRef {
    /// Position in the regular button list.
    Index(usize),
    /// The separated cancel button.
    Cancel,
}

/// Everything the presenter is built from besides its own options.
pub struct Injected<'a> {
    /// Navigation handle used to close the sheet.
    pub view_ctrl: Box<dyn ViewController>,
    /// Application settings, read once for the mode.
    pub config: &'a dyn ConfigSource,
    /// Source of the gesture blocker.
    pub gestures: &'a dyn GestureController,
    /// Applies classes to the root node.
    pub renderer: &'a mut dyn ClassRenderer,
    /// Identity source.
    pub ids: &'a IdCounter,
}

impl fmt::Debug for Injected<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Injected")
            .field("ids", &self.ids)
            .finish_non_exhaustive()
    }
}

/// A modal list of action buttons with an optional cancel action.
pub struct ActionSheetPresenter {
    view_ctrl: Box<dyn ViewController>,
    blocker: Box<dyn Blocker>,
    root: RootNode,
    data: Option<ActionSheetConfig>,
    buttons: Vec<ActionSheetButton>,
    cancel_button: Option<ActionSheetButton>,
    mode: String,
    dismiss_opts: DismissOptions,
    id: i64,
    hdr_id: Option<String>,
    desc_id: Option<String>,
    loaded: bool,
    enabled: bool,
    focused: Option<ButtonRef>,
}

impl fmt::Debug for ActionSheetPresenter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionSheetPresenter")
            .field("id", &self.id)
            .field("mode", &self.mode)
            .field("root", &self.root)
            .field("buttons", &self.buttons)
            .field("cancel_button", &self.cancel_button)
            .field("enabled", &self.enabled)
            .field("focused", &self.focused)
            .finish_non_exhaustive()
    }
}

impl ActionSheetPresenter {
    /// Build a presenter for `data`.
    ///
    /// Creates the gesture blocker, applies the mode class and any extra
    /// classes to the root node and assigns the sheet its id.
    pub fn new(injected: Injected<'_>, data: ActionSheetConfig) -> Self {
        let Injected {
            view_ctrl,
            config,
            gestures,
            renderer,
            ids,
        } = injected;

        let blocker = gestures.create_blocker(GestureScope::BlockAll);
        let mode = config
            .get("mode")
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| DEFAULT_MODE.to_string());
        let dismiss_opts = config
            .get(MIN_CLICK_BLOCK_KEY)
            .and_then(|ms| ms.parse::<u64>().ok())
            .map_or_else(DismissOptions::default, |ms| DismissOptions {
                min_click_block_duration: Duration::from_millis(ms),
            });

        let mut root = RootNode {
            role: DIALOG_ROLE,
            ..RootNode::default()
        };
        renderer.set_element_class(&mut root, &format!("action-sheet-{mode}"), true);
        if let Some(classes) = &data.css_class {
            for class in classes.split(' ').filter(|c| !c.trim().is_empty()) {
                renderer.set_element_class(&mut root, class, true);
            }
        }

        let id = ids.next_id();
        let hdr_id = data.title_text().map(|_| ids::header_id(id));
        let desc_id = data.sub_title_text().map(|_| ids::sub_header_id(id));
        root.labelled_by.clone_from(&hdr_id);
        root.described_by.clone_from(&desc_id);

        debug!(id, %mode, "Action sheet constructed");
        Self {
            view_ctrl,
            blocker,
            root,
            data: Some(data),
            buttons: Vec::new(),
            cancel_button: None,
            mode,
            dismiss_opts,
            id,
            hdr_id,
            desc_id,
            loaded: false,
            enabled: false,
            focused: None,
        }
    }

    /// Identity assigned at construction.
    #[must_use]
    pub const fn id(&self) -> i64 {
        self.id
    }

    /// Theme mode read from the config source.
    #[must_use]
    pub fn mode(&self) -> &str {
        &self.mode
    }

    /// The root node with its classes and accessibility links.
    #[must_use]
    pub const fn root(&self) -> &RootNode {
        &self.root
    }

    /// Accessibility id of the title, when there is a title.
    #[must_use]
    pub fn header_id(&self) -> Option<&str> {
        self.hdr_id.as_deref()
    }

    /// Accessibility id of the subtitle, when there is a subtitle.
    #[must_use]
    pub fn sub_header_id(&self) -> Option<&str> {
        self.desc_id.as_deref()
    }

    /// Title text.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.data.as_ref().and_then(ActionSheetConfig::title_text)
    }

    /// Subtitle text.
    #[must_use]
    pub fn sub_title(&self) -> Option<&str> {
        self.data.as_ref().and_then(ActionSheetConfig::sub_title_text)
    }

    /// Whether tapping the backdrop may close the sheet.
    #[must_use]
    pub fn backdrop_dismiss_enabled(&self) -> bool {
        self.data.as_ref().is_some_and(|d| d.enable_backdrop_dismiss)
    }

    /// Regular buttons (empty until loaded).
    #[must_use]
    pub fn buttons(&self) -> &[ActionSheetButton] {
        &self.buttons
    }

    /// The separated cancel button.
    #[must_use]
    pub const fn cancel_button(&self) -> Option<&ActionSheetButton> {
        self.cancel_button.as_ref()
    }

    /// Whether user input is handled.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Whether this sheet is the topmost overlay.
    #[must_use]
    pub fn is_topmost(&self) -> bool {
        self.view_ctrl.is_last()
    }

    /// Whether the sheet has been torn down.
    #[must_use]
    pub const fn is_destroyed(&self) -> bool {
        self.data.is_none()
    }

    /// The button holding input focus.
    #[must_use]
    pub const fn focused(&self) -> Option<ButtonRef> {
        self.focused
    }

    /// Whether this sheet currently holds its gesture block.
    #[must_use]
    pub fn is_blocking_gestures(&self) -> bool {
        self.blocker.is_blocked()
    }

    /// Resolve a button reference.
    #[must_use]
    pub fn button(&self, target: ButtonRef) -> Option<&ActionSheetButton> {
        match target {
            ButtonRef::Index(i) => self.buttons.get(i),
            ButtonRef::Cancel => self.cancel_button.as_ref(),
        }
    }

    fn button_mut(&mut self, target: ButtonRef) -> Option<&mut ActionSheetButton> {
        match target {
            ButtonRef::Index(i) => self.buttons.get_mut(i),
            ButtonRef::Cancel => self.cancel_button.as_mut(),
        }
    }

    /// Buttons in focus order: regular buttons, then cancel.
    fn focus_order(&self) -> Vec<ButtonRef> {
        let mut order: Vec<ButtonRef> = (0..self.buttons.len()).map(ButtonRef::Index).collect();
        if self.cancel_button.is_some() {
            order.push(ButtonRef::Cancel);
        }
        order
    }

    /// Move focus to the next button, wrapping around.
    pub fn focus_next(&mut self) {
        self.step_focus(true);
    }

    /// Move focus to the previous button, wrapping around.
    pub fn focus_prev(&mut self) {
        self.step_focus(false);
    }

    fn step_focus(&mut self, forward: bool) {
        let order = self.focus_order();
        if order.is_empty() {
            return;
        }
        let len = order.len();
        let current = self
            .focused
            .and_then(|f| order.iter().position(|&o| o == f));
        let next = match (current, forward) {
            (None, true) => 0,
            (None, false) => len - 1,
            (Some(i), true) => (i + 1) % len,
            (Some(i), false) => (i + len - 1) % len,
        };
        self.focused = Some(order[next]);
    }

    /// Move focus to `target` if it exists.
    pub fn focus(&mut self, target: ButtonRef) {
        if self.button(target).is_some() {
            self.focused = Some(target);
        }
    }

    /// Handle a released key. Escape acts like a backdrop tap when this
    /// sheet is topmost.
    pub fn key_up(&mut self, code: KeyCode) -> Option<Dismissal> {
        if self.enabled && code == KeyCode::Esc && self.view_ctrl.is_last() {
            debug!(id = self.id, "Escape pressed, treating as backdrop tap");
            return self.bd_click();
        }
        None
    }

    /// Click a button.
    ///
    /// Runs its handler, then dismisses with the button's role unless the
    /// handler returned [`HandlerOutcome::Veto`]. Returns `None` when the
    /// click was ignored or vetoed.
    pub fn click(&mut self, target: ButtonRef) -> Option<Dismissal> {
        if !self.enabled {
            return None;
        }
        let id = self.id;
        let button = self.button_mut(target)?;
        let role = button.role;
        let outcome = button
            .handler
            .as_mut()
            .map_or(HandlerOutcome::Proceed, ButtonHandler::call);
        debug!(id, text = %button.text, ?role, ?outcome, "Action sheet button clicked");

        if outcome == HandlerOutcome::Veto {
            return None;
        }
        Some(self.dismiss(role.map(Role::as_str)))
    }

    /// Click the focused button.
    pub fn click_focused(&mut self) -> Option<Dismissal> {
        let target = self.focused?;
        self.click(target)
    }

    /// Handle a tap on the backdrop.
    pub fn bd_click(&mut self) -> Option<Dismissal> {
        if !self.enabled || !self.backdrop_dismiss_enabled() {
            return None;
        }
        if self.cancel_button.is_some() {
            self.click(ButtonRef::Cancel)
        } else {
            Some(self.dismiss(Some(BACKDROP_ROLE)))
        }
    }

    /// Ask the view controller to close the sheet.
    pub fn dismiss(&mut self, role: Option<&str>) -> Dismissal {
        info!(id = self.id, ?role, "Dismissing action sheet");
        self.view_ctrl.dismiss(None, role, self.dismiss_opts)
    }
}

impl Lifecycle for ActionSheetPresenter {
    fn on_load(&mut self) {
        if self.loaded {
            return;
        }
        let Some(data) = self.data.as_mut() else {
            return;
        };
        let normalized = button::normalize(std::mem::take(&mut data.buttons));
        self.buttons = normalized.buttons;
        self.cancel_button = normalized.cancel;
        self.loaded = true;
        debug!(
            id = self.id,
            buttons = self.buttons.len(),
            cancel = self.cancel_button.is_some(),
            "Action sheet buttons normalized"
        );
    }

    fn will_enter(&mut self) {
        if self.is_destroyed() || self.blocker.is_blocked() {
            return;
        }
        self.blocker.block();
    }

    fn did_enter(&mut self) {
        if self.is_destroyed() {
            return;
        }
        self.focused = self.focus_order().first().copied();
        self.enabled = true;
    }

    fn did_leave(&mut self) {
        if self.blocker.is_blocked() {
            self.blocker.unblock();
        }
    }

    fn on_destroy(&mut self) {
        debug!(id = self.id, "Action sheet destroyed");
        self.data = None;
        self.cancel_button = None;
        self.buttons.clear();
        self.focused = None;
        self.blocker.destroy();
    }
}
