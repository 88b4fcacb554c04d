//! Collaborators the presenter depends on
//!
//! The presenter never implements navigation, gesture blocking or styling
//! itself. Hosts supply these through the traits below; [`crate::nav`] and
//! [`crate::gesture`] provide in-process implementations.

use crate::presenter::RootNode;
use std::time::Duration;

/// How long further taps are ignored after a dismissal was requested.
pub const MIN_CLICK_BLOCK_DURATION: Duration = Duration::from_millis(400);

/// Which gestures a blocker suppresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GestureScope {
    /// Every background gesture.
    BlockAll,
}

/// Options passed along with a dismissal request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DismissOptions {
    /// Taps arriving sooner than this after the request are ignored.
    pub min_click_block_duration: Duration,
}

impl Default for DismissOptions {
    fn default() -> Self {
        Self {
            min_click_block_duration: MIN_CLICK_BLOCK_DURATION,
        }
    }
}

/// Completion signal returned by a dismissal request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dismissal {
    /// The overlay is closing; `role` is the reason passed along.
    Closing {
        /// Dismissal reason.
        role: Option<String>,
    },
    /// The request arrived inside a tap-suppression window and was dropped.
    Suppressed,
    /// There was nothing to dismiss.
    NotPresented,
}

impl Dismissal {
    /// Whether the request started closing the overlay.
    #[must_use]
    pub const fn is_closing(&self) -> bool {
        matches!(self, Self::Closing { .. })
    }
}

/// Navigation handle for one presented overlay.
pub trait ViewController {
    /// Whether this overlay is the topmost entry of its stack.
    fn is_last(&self) -> bool;

    /// Ask the navigation layer to close the overlay.
    fn dismiss(
        &mut self,
        data: Option<serde_json::Value>,
        role: Option<&str>,
        opts: DismissOptions,
    ) -> Dismissal;
}

/// A handle that suppresses background gestures while blocked.
pub trait Blocker {
    /// Start suppressing gestures.
    fn block(&mut self);
    /// Stop suppressing gestures.
    fn unblock(&mut self);
    /// Release the handle; any outstanding block is lifted.
    fn destroy(&mut self);
    /// Whether this handle currently holds a block.
    fn is_blocked(&self) -> bool;
}

/// Factory for gesture blockers.
pub trait GestureController {
    /// Create a blocker for `scope`.
    fn create_blocker(&self, scope: GestureScope) -> Box<dyn Blocker>;
}

/// Read access to application settings.
pub trait ConfigSource {
    /// Look up a setting by key.
    fn get(&self, key: &str) -> Option<String>;
}

/// Applies style classes to the presenter's root node.
pub trait ClassRenderer {
    /// Add (`present == true`) or remove a class.
    fn set_element_class(&mut self, node: &mut RootNode, class: &str, present: bool);
}

/// Renderer that edits the node's class set directly.
#[derive(Debug, Default, Clone, Copy)]
pub struct DirectClasses;

impl ClassRenderer for DirectClasses {
    fn set_element_class(&mut self, node: &mut RootNode, class: &str, present: bool) {
        if present {
            node.classes.insert(class.to_string());
        } else {
            node.classes.remove(class);
        }
    }
}
