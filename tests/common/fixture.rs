//! Test fixture wiring a presenter to in-process collaborators

use action_sheet::config::AppConfig;
use action_sheet::controller::DirectClasses;
use action_sheet::gesture::GestureGate;
use action_sheet::ids::IdCounter;
use action_sheet::lifecycle::LifecycleDriver;
use action_sheet::nav::OverlayStack;
use action_sheet::{ActionSheetConfig, ActionSheetPresenter, Injected};

/// Collaborators shared by the sheets built in one test
pub struct TestFixture {
    pub stack: OverlayStack,
    pub gate: GestureGate,
    pub ids: IdCounter,
    pub config: AppConfig,
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            stack: OverlayStack::new(),
            gate: GestureGate::new(),
            ids: IdCounter::new(),
            config: AppConfig {
                mode: "ios".to_string(),
                ..AppConfig::default()
            },
        }
    }

    /// Build a presenter for `data`, pushed on top of the stack
    pub fn sheet(&self, data: ActionSheetConfig) -> LifecycleDriver<ActionSheetPresenter> {
        let mut renderer = DirectClasses;
        LifecycleDriver::new(ActionSheetPresenter::new(
            Injected {
                view_ctrl: Box::new(self.stack.present()),
                config: &self.config,
                gestures: &self.gate,
                renderer: &mut renderer,
                ids: &self.ids,
            },
            data,
        ))
    }
}
