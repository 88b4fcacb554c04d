//! In-process overlay stack
//!
//! Hands out [`ViewController`] handles for presented overlays, records
//! dismissals and enforces the tap-suppression window requested through
//! [`DismissOptions`].

use crate::controller::{DismissOptions, Dismissal, ViewController};
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

type Clock = Arc<dyn Fn() -> Instant + Send + Sync>;

/// A dismissal that went through.
#[derive(Debug, Clone, PartialEq)]
pub struct DismissRecord {
    /// Overlay that was closed.
    pub overlay: u64,
    /// Reason passed by the overlay.
    pub role: Option<String>,
    /// Result payload, if any.
    pub data: Option<serde_json::Value>,
}

#[derive(Debug, Default)]
struct StackState {
    next_overlay: u64,
    entries: Vec<u64>,
    taps_blocked_until: Option<Instant>,
    dismissed: Vec<DismissRecord>,
}

impl StackState {
    fn taps_blocked(&self, now: Instant) -> bool {
        self.taps_blocked_until.is_some_and(|until| now < until)
    }
}

/// Stack of presented overlays. Clones share the same stack.
#[derive(Clone)]
pub struct OverlayStack {
    state: Arc<Mutex<StackState>>,
    clock: Clock,
}

impl std::fmt::Debug for OverlayStack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OverlayStack")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl Default for OverlayStack {
    fn default() -> Self {
        Self::new()
    }
}

impl OverlayStack {
    /// An empty stack using the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(Instant::now)
    }

    /// An empty stack reading time from `clock`.
    pub fn with_clock(clock: impl Fn() -> Instant + Send + Sync + 'static) -> Self {
        Self {
            state: Arc::new(Mutex::new(StackState::default())),
            clock: Arc::new(clock),
        }
    }

    /// Push a new overlay and return its controller.
    #[must_use]
    pub fn present(&self) -> OverlayHandle {
        let overlay = {
            let mut state = self.state.lock();
            state.next_overlay += 1;
            let overlay = state.next_overlay;
            state.entries.push(overlay);
            overlay
        };
        debug!(overlay, "Overlay presented");
        OverlayHandle {
            overlay,
            stack: self.clone(),
        }
    }

    /// Number of overlays currently presented.
    #[must_use]
    pub fn len(&self) -> usize {
        self.state.lock().entries.len()
    }

    /// Whether no overlay is presented.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether input taps should be ignored right now.
    #[must_use]
    pub fn is_tap_blocked(&self) -> bool {
        let now = (self.clock)();
        self.state.lock().taps_blocked(now)
    }

    /// Most recent dismissal, if any.
    #[must_use]
    pub fn last_dismissal(&self) -> Option<DismissRecord> {
        self.state.lock().dismissed.last().cloned()
    }

    /// All dismissals so far, oldest first.
    #[must_use]
    pub fn dismissals(&self) -> Vec<DismissRecord> {
        self.state.lock().dismissed.clone()
    }

    fn is_top(&self, overlay: u64) -> bool {
        self.state.lock().entries.last() == Some(&overlay)
    }

    fn dismiss_overlay(
        &self,
        overlay: u64,
        data: Option<serde_json::Value>,
        role: Option<&str>,
        opts: DismissOptions,
    ) -> Dismissal {
        let now = (self.clock)();
        let mut state = self.state.lock();
        if state.taps_blocked(now) {
            debug!(overlay, ?role, "Dismissal suppressed inside tap block window");
            return Dismissal::Suppressed;
        }
        let Some(pos) = state.entries.iter().position(|&o| o == overlay) else {
            return Dismissal::NotPresented;
        };
        state.entries.remove(pos);
        state.taps_blocked_until = Some(now + opts.min_click_block_duration);
        let role = role.map(str::to_string);
        state.dismissed.push(DismissRecord {
            overlay,
            role: role.clone(),
            data,
        });
        info!(overlay, ?role, "Overlay dismissed");
        Dismissal::Closing { role }
    }
}

/// Controller for one overlay on an [`OverlayStack`].
#[derive(Debug, Clone)]
pub struct OverlayHandle {
    overlay: u64,
    stack: OverlayStack,
}

impl OverlayHandle {
    /// Identifier of the overlay within its stack.
    #[must_use]
    pub const fn overlay(&self) -> u64 {
        self.overlay
    }
}

impl ViewController for OverlayHandle {
    fn is_last(&self) -> bool {
        self.stack.is_top(self.overlay)
    }

    fn dismiss(
        &mut self,
        data: Option<serde_json::Value>,
        role: Option<&str>,
        opts: DismissOptions,
    ) -> Dismissal {
        self.stack.dismiss_overlay(self.overlay, data, role, opts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::time::Duration;

    fn manual_clock() -> (Arc<Mutex<Instant>>, OverlayStack) {
        let now = Arc::new(Mutex::new(Instant::now()));
        let reader = Arc::clone(&now);
        let stack = OverlayStack::with_clock(move || *reader.lock());
        (now, stack)
    }

    #[test]
    fn test_topmost_overlay_is_last() {
        let stack = OverlayStack::new();
        let first = stack.present();
        let second = stack.present();
        assert!(!first.is_last());
        assert!(second.is_last());
        assert_eq!(stack.len(), 2);
    }

    #[test]
    fn test_dismiss_records_role() {
        let stack = OverlayStack::new();
        let mut handle = stack.present();
        let result = handle.dismiss(None, Some("cancel"), DismissOptions::default());
        assert_eq!(
            result,
            Dismissal::Closing {
                role: Some("cancel".to_string())
            }
        );
        assert!(stack.is_empty());
        assert_eq!(
            stack.last_dismissal(),
            Some(DismissRecord {
                overlay: handle.overlay(),
                role: Some("cancel".to_string()),
                data: None,
            })
        );
    }

    #[test]
    fn test_second_dismiss_inside_window_is_suppressed() {
        let (now, stack) = manual_clock();
        let mut first = stack.present();
        let mut second = stack.present();

        assert!(second.dismiss(None, None, DismissOptions::default()).is_closing());
        assert!(stack.is_tap_blocked());
        assert_eq!(
            first.dismiss(None, None, DismissOptions::default()),
            Dismissal::Suppressed
        );

        *now.lock() += Duration::from_millis(401);
        assert!(!stack.is_tap_blocked());
        assert!(first.dismiss(None, None, DismissOptions::default()).is_closing());
        assert_eq!(stack.dismissals().len(), 2);
    }

    #[test]
    fn test_dismiss_twice_reports_not_presented() {
        let (now, stack) = manual_clock();
        let mut handle = stack.present();
        let _ = handle.dismiss(None, None, DismissOptions::default());
        *now.lock() += Duration::from_secs(1);
        assert_eq!(
            handle.dismiss(None, None, DismissOptions::default()),
            Dismissal::NotPresented
        );
    }
}
