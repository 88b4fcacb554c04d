//! Color palette for the action sheet
//!
//! Muted colors, matching the host application's modals

use ratatui::style::Color;

/// Backdrop behind a sheet that dismisses on tap.
pub const BACKDROP: Color = Color::Rgb(15, 16, 20);
/// Backdrop behind a sheet that ignores taps.
pub const BACKDROP_NO_TAP: Color = Color::Rgb(22, 23, 28);

/// Sheet and cancel group borders.
pub const BORDER: Color = Color::Rgb(100, 110, 130);
/// Sheet background.
pub const SHEET_BG: Color = Color::Rgb(25, 27, 35);
/// Background of the focused button.
pub const FOCUS_BG: Color = Color::Rgb(50, 55, 70);

/// Titles and button labels.
pub const TEXT_PRIMARY: Color = Color::Rgb(220, 220, 230);
/// Subtitles and hints.
pub const TEXT_DIM: Color = Color::Rgb(130, 135, 150);

/// Label color for destructive buttons.
pub const DESTRUCTIVE: Color = Color::Rgb(200, 100, 100);
/// Label color for the selected button.
pub const SELECTED: Color = Color::Rgb(100, 180, 220);
