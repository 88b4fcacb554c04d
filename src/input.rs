//! Terminal input handling for an open action sheet
//!
//! Keys go through the configured bindings; a left click on a button clicks
//! it and a left click anywhere off the sheet is a backdrop tap.

use crate::config::{Action, KeyBindings};
use crate::controller::Dismissal;
use crate::presenter::ActionSheetPresenter;
use crate::render::sheet_layout;
use ratatui::{
    crossterm::event::{KeyCode, KeyModifiers, MouseButton, MouseEvent, MouseEventKind},
    layout::Rect,
};
use tracing::debug;

/// What an input event did to the sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing happened.
    Ignored,
    /// The sheet changed (focus moved, or a handler vetoed dismissal).
    Handled,
    /// A dismissal was requested.
    Dismissed(Dismissal),
}

impl From<Option<Dismissal>> for Outcome {
    fn from(result: Option<Dismissal>) -> Self {
        result.map_or(Self::Handled, Self::Dismissed)
    }
}

/// Handle a key press.
pub fn handle_key_event(
    sheet: &mut ActionSheetPresenter,
    keys: &KeyBindings,
    code: KeyCode,
    modifiers: KeyModifiers,
) -> Outcome {
    if !sheet.is_enabled() {
        return Outcome::Ignored;
    }
    let Some(action) = keys.get_action(code, modifiers) else {
        return Outcome::Ignored;
    };
    debug!(?action, "Action sheet key");
    match action {
        Action::NextButton => {
            sheet.focus_next();
            Outcome::Handled
        }
        Action::PrevButton => {
            sheet.focus_prev();
            Outcome::Handled
        }
        Action::Activate => {
            if sheet.focused().is_none() {
                return Outcome::Ignored;
            }
            sheet.click_focused().into()
        }
        Action::Dismiss => {
            let reaches_cancel = sheet.is_topmost() && backdrop_reaches_cancel(sheet);
            let result = sheet.key_up(KeyCode::Esc);
            if reaches_cancel {
                result.into()
            } else {
                result.map_or(Outcome::Ignored, Outcome::Dismissed)
            }
        }
    }
}

// A backdrop tap runs the cancel handler, which may veto.
fn backdrop_reaches_cancel(sheet: &ActionSheetPresenter) -> bool {
    sheet.backdrop_dismiss_enabled() && sheet.cancel_button().is_some()
}

/// Handle a mouse event.
///
/// Only left-button presses are considered.
pub fn handle_mouse_event(
    sheet: &mut ActionSheetPresenter,
    mouse: MouseEvent,
    frame_area: Rect,
) -> Outcome {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) || !sheet.is_enabled() {
        return Outcome::Ignored;
    }
    let layout = sheet_layout(sheet, frame_area);
    if let Some(target) = layout.button_at(mouse.column, mouse.row) {
        sheet.focus(target);
        return sheet.click(target).into();
    }
    if layout.is_backdrop(mouse.column, mouse.row) {
        let reaches_cancel = backdrop_reaches_cancel(sheet);
        let result = sheet.bd_click();
        return if reaches_cancel {
            result.into()
        } else {
            result.map_or(Outcome::Ignored, Outcome::Dismissed)
        };
    }
    Outcome::Ignored
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::button::{ActionSheetButton, HandlerOutcome, Role};
    use crate::controller::DirectClasses;
    use crate::gesture::GestureGate;
    use crate::ids::IdCounter;
    use crate::lifecycle::Lifecycle;
    use crate::nav::OverlayStack;
    use crate::presenter::{ButtonRef, Injected};
    use crate::AppConfig;
    use crate::sheet::ActionSheetConfig;
    use pretty_assertions::assert_eq;

    const AREA: Rect = Rect {
        x: 0,
        y: 0,
        width: 80,
        height: 24,
    };

    fn build(stack: &OverlayStack, data: ActionSheetConfig) -> ActionSheetPresenter {
        let gate = GestureGate::new();
        let ids = IdCounter::new();
        let config = AppConfig::default();
        let mut renderer = DirectClasses;
        ActionSheetPresenter::new(
            Injected {
                view_ctrl: Box::new(stack.present()),
                config: &config,
                gestures: &gate,
                renderer: &mut renderer,
                ids: &ids,
            },
            data,
        )
    }

    fn entered(stack: &OverlayStack, data: ActionSheetConfig) -> ActionSheetPresenter {
        let mut sheet = build(stack, data);
        sheet.on_load();
        sheet.will_enter();
        sheet.did_enter();
        sheet
    }

    fn sheet_config() -> ActionSheetConfig {
        ActionSheetConfig::new()
            .title("Pick")
            .button("Archive")
            .button(ActionSheetButton::new("Delete").with_role(Role::Destructive))
            .button(ActionSheetButton::new("Cancel").with_role(Role::Cancel))
    }

    fn left_click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn press(sheet: &mut ActionSheetPresenter, code: KeyCode) -> Outcome {
        handle_key_event(sheet, &KeyBindings::default(), code, KeyModifiers::NONE)
    }

    #[test]
    fn test_arrow_then_enter_clicks_second_button() {
        let stack = OverlayStack::new();
        let mut sheet = entered(&stack, sheet_config());

        assert_eq!(press(&mut sheet, KeyCode::Down), Outcome::Handled);
        assert_eq!(sheet.focused(), Some(ButtonRef::Index(1)));
        assert_eq!(
            press(&mut sheet, KeyCode::Enter),
            Outcome::Dismissed(Dismissal::Closing {
                role: Some("destructive".to_string())
            })
        );
    }

    #[test]
    fn test_escape_dismisses_through_cancel() {
        let stack = OverlayStack::new();
        let mut sheet = entered(&stack, sheet_config());
        assert_eq!(
            press(&mut sheet, KeyCode::Esc),
            Outcome::Dismissed(Dismissal::Closing {
                role: Some("cancel".to_string())
            })
        );
    }

    #[test]
    fn test_keys_ignored_before_enter() {
        let stack = OverlayStack::new();
        let mut sheet = build(&stack, sheet_config());
        sheet.on_load();
        assert_eq!(press(&mut sheet, KeyCode::Esc), Outcome::Ignored);
        assert_eq!(press(&mut sheet, KeyCode::Enter), Outcome::Ignored);
        assert!(stack.dismissals().is_empty());
    }

    #[test]
    fn test_unbound_key_is_ignored() {
        let stack = OverlayStack::new();
        let mut sheet = entered(&stack, sheet_config());
        assert_eq!(press(&mut sheet, KeyCode::Char('x')), Outcome::Ignored);
    }

    #[test]
    fn test_vetoed_enter_is_handled_without_dismissal() {
        let stack = OverlayStack::new();
        let mut sheet = entered(
            &stack,
            ActionSheetConfig::new()
                .button(ActionSheetButton::new("Hold").with_handler(|| HandlerOutcome::Veto)),
        );
        assert_eq!(press(&mut sheet, KeyCode::Enter), Outcome::Handled);
        assert!(stack.dismissals().is_empty());
    }

    #[test]
    fn test_vetoed_escape_is_handled_like_vetoed_enter() {
        let stack = OverlayStack::new();
        let mut sheet = entered(
            &stack,
            ActionSheetConfig::new().button("Archive").button(
                ActionSheetButton::new("Cancel")
                    .with_role(Role::Cancel)
                    .with_handler(|| HandlerOutcome::Veto),
            ),
        );
        assert_eq!(press(&mut sheet, KeyCode::Esc), Outcome::Handled);
        assert_eq!(
            handle_mouse_event(&mut sheet, left_click(0, 0), AREA),
            Outcome::Handled
        );
        assert!(stack.dismissals().is_empty());
    }

    #[test]
    fn test_escape_below_another_overlay_is_ignored() {
        let stack = OverlayStack::new();
        let mut sheet = entered(&stack, sheet_config());
        let _above = stack.present();
        assert_eq!(press(&mut sheet, KeyCode::Esc), Outcome::Ignored);
        assert!(stack.dismissals().is_empty());
    }

    #[test]
    fn test_click_on_button_row() {
        let stack = OverlayStack::new();
        let mut sheet = entered(&stack, sheet_config());
        let layout = sheet_layout(&sheet, AREA);
        let (_, archive) = layout.button_rows[0];

        let outcome = handle_mouse_event(&mut sheet, left_click(archive.x + 1, archive.y), AREA);
        assert_eq!(outcome, Outcome::Dismissed(Dismissal::Closing { role: None }));
    }

    #[test]
    fn test_click_on_backdrop_respects_setting() {
        let stack = OverlayStack::new();
        let mut sheet = entered(&stack, sheet_config().enable_backdrop_dismiss(false));
        assert_eq!(
            handle_mouse_event(&mut sheet, left_click(0, 0), AREA),
            Outcome::Ignored
        );

        let mut open = entered(&stack, sheet_config());
        assert_eq!(
            handle_mouse_event(&mut open, left_click(0, 0), AREA),
            Outcome::Dismissed(Dismissal::Closing {
                role: Some("cancel".to_string())
            })
        );
    }

    #[test]
    fn test_non_left_mouse_is_ignored() {
        let stack = OverlayStack::new();
        let mut sheet = entered(&stack, sheet_config());
        let mouse = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Right),
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(handle_mouse_event(&mut sheet, mouse, AREA), Outcome::Ignored);
    }
}
