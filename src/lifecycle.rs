//! View lifecycle hooks and the driver that invokes them in order

use crate::error::{Error, Result};
use std::fmt;
use tracing::debug;

/// Where a hosted view is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Phase {
    /// Built, nothing run yet.
    Constructed,
    /// `on_load` ran.
    Loaded,
    /// `will_enter` ran; about to become visible.
    Entering,
    /// `did_enter` ran; visible and interactive.
    Entered,
    /// `did_leave` ran; no longer visible.
    Left,
    /// `on_destroy` ran.
    Destroyed,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Constructed => "constructed",
            Self::Loaded => "loaded",
            Self::Entering => "entering",
            Self::Entered => "entered",
            Self::Left => "left",
            Self::Destroyed => "destroyed",
        };
        f.write_str(name)
    }
}

impl Phase {
    /// Whether a hook may move a view from `self` to `to`.
    #[must_use]
    pub const fn can_move_to(self, to: Self) -> bool {
        matches!(
            (self, to),
            (Self::Constructed, Self::Loaded)
                | (Self::Loaded | Self::Left, Self::Entering)
                | (Self::Entering, Self::Entered)
                | (Self::Entering | Self::Entered, Self::Left)
                | (
                    Self::Constructed
                        | Self::Loaded
                        | Self::Entering
                        | Self::Entered
                        | Self::Left,
                    Self::Destroyed
                )
        )
    }
}

/// Hooks a host invokes as a view moves through its lifecycle.
pub trait Lifecycle {
    /// First load, before the view is shown.
    fn on_load(&mut self);
    /// The view is about to become visible.
    fn will_enter(&mut self);
    /// The view is visible.
    fn did_enter(&mut self);
    /// The view is no longer visible.
    fn did_leave(&mut self);
    /// The view is being torn down for good.
    fn on_destroy(&mut self);
}

/// Invokes [`Lifecycle`] hooks, refusing transitions that skip a step.
#[derive(Debug)]
pub struct LifecycleDriver<V> {
    view: V,
    phase: Phase,
}

impl<V: Lifecycle> LifecycleDriver<V> {
    /// Wrap a freshly constructed view.
    pub const fn new(view: V) -> Self {
        Self {
            view,
            phase: Phase::Constructed,
        }
    }

    /// Current phase.
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Borrow the view.
    pub const fn view(&self) -> &V {
        &self.view
    }

    /// Borrow the view mutably.
    pub const fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Unwrap the view.
    pub fn into_view(self) -> V {
        self.view
    }

    fn advance(&mut self, to: Phase) -> Result<()> {
        if !self.phase.can_move_to(to) {
            return Err(Error::OutOfOrder {
                from: self.phase,
                to,
            });
        }
        debug!(from = %self.phase, to = %to, "Lifecycle transition");
        match to {
            Phase::Constructed => {}
            Phase::Loaded => self.view.on_load(),
            Phase::Entering => self.view.will_enter(),
            Phase::Entered => self.view.did_enter(),
            Phase::Left => self.view.did_leave(),
            Phase::Destroyed => self.view.on_destroy(),
        }
        self.phase = to;
        Ok(())
    }

    /// Run `on_load`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfOrder`] unless the view was just constructed
    pub fn load(&mut self) -> Result<()> {
        self.advance(Phase::Loaded)
    }

    /// Run `will_enter`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfOrder`] unless the view is loaded or has left
    pub fn will_enter(&mut self) -> Result<()> {
        self.advance(Phase::Entering)
    }

    /// Run `did_enter`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfOrder`] unless `will_enter` ran last
    pub fn did_enter(&mut self) -> Result<()> {
        self.advance(Phase::Entered)
    }

    /// Run `did_leave`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfOrder`] unless the view is entering or entered
    pub fn did_leave(&mut self) -> Result<()> {
        self.advance(Phase::Left)
    }

    /// Run `on_destroy`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfOrder`] if the view was already destroyed
    pub fn destroy(&mut self) -> Result<()> {
        self.advance(Phase::Destroyed)
    }

    /// Load the view if needed, then run both enter hooks.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfOrder`] if the view cannot be entered from its phase
    pub fn present(&mut self) -> Result<()> {
        if self.phase == Phase::Constructed {
            self.load()?;
        }
        self.will_enter()?;
        self.did_enter()
    }

    /// Run `did_leave` (when visible) and then `on_destroy`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfOrder`] if the view was already destroyed
    pub fn close(&mut self) -> Result<()> {
        if matches!(self.phase, Phase::Entering | Phase::Entered) {
            self.did_leave()?;
        }
        self.destroy()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[derive(Debug, Default)]
    struct Recorder {
        calls: Vec<&'static str>,
    }

    impl Lifecycle for Recorder {
        fn on_load(&mut self) {
            self.calls.push("load");
        }
        fn will_enter(&mut self) {
            self.calls.push("will_enter");
        }
        fn did_enter(&mut self) {
            self.calls.push("did_enter");
        }
        fn did_leave(&mut self) {
            self.calls.push("did_leave");
        }
        fn on_destroy(&mut self) {
            self.calls.push("destroy");
        }
    }

    #[test]
    fn test_present_then_close_runs_hooks_in_order() -> Result<()> {
        let mut driver = LifecycleDriver::new(Recorder::default());
        driver.present()?;
        assert_eq!(driver.phase(), Phase::Entered);
        driver.close()?;
        assert_eq!(
            driver.into_view().calls,
            vec!["load", "will_enter", "did_enter", "did_leave", "destroy"]
        );
        Ok(())
    }

    #[test]
    fn test_did_enter_before_will_enter_is_rejected() -> Result<()> {
        let mut driver = LifecycleDriver::new(Recorder::default());
        driver.load()?;
        let err = driver.did_enter();
        assert!(matches!(
            err,
            Err(Error::OutOfOrder {
                from: Phase::Loaded,
                to: Phase::Entered
            })
        ));
        assert_eq!(driver.view().calls, vec!["load"]);
        Ok(())
    }

    #[test]
    fn test_destroy_twice_is_rejected() -> Result<()> {
        let mut driver = LifecycleDriver::new(Recorder::default());
        driver.destroy()?;
        assert!(driver.destroy().is_err());
        Ok(())
    }

    #[rstest]
    #[case(Phase::Constructed, Phase::Loaded, true)]
    #[case(Phase::Constructed, Phase::Entering, false)]
    #[case(Phase::Left, Phase::Entering, true)]
    #[case(Phase::Entering, Phase::Left, true)]
    #[case(Phase::Loaded, Phase::Left, false)]
    #[case(Phase::Destroyed, Phase::Loaded, false)]
    fn test_transitions(#[case] from: Phase, #[case] to: Phase, #[case] allowed: bool) {
        assert_eq!(from.can_move_to(to), allowed);
    }
}
