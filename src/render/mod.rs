//! Terminal rendering for action sheets
//!
//! The sheet is anchored to the bottom of the frame over a tinted backdrop:
//! one bordered group with the title, subtitle and regular buttons, and a
//! separate group below it for the cancel button.

pub mod colors;

use crate::button::{ActionSheetButton, DESTRUCTIVE_CLASS, SELECTED_CLASS};
use crate::presenter::{ActionSheetPresenter, ButtonRef};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

/// Width of the sheet as a percentage of the frame.
const SHEET_WIDTH_PERCENT: u32 = 60;
/// Narrowest sheet drawn when the frame allows it.
const MIN_SHEET_WIDTH: u16 = 30;
/// Height of the bordered cancel group.
const CANCEL_GROUP_HEIGHT: u16 = 3;

/// Where each part of a sheet lands on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetLayout {
    /// Bounding box of both groups.
    pub sheet: Rect,
    /// Group holding the title, subtitle and regular buttons.
    pub main_group: Rect,
    /// Group holding the cancel button.
    pub cancel_group: Option<Rect>,
    /// One row per visible button.
    pub button_rows: Vec<(ButtonRef, Rect)>,
}

impl SheetLayout {
    /// The button drawn at `(x, y)`, if any.
    #[must_use]
    pub fn button_at(&self, x: u16, y: u16) -> Option<ButtonRef> {
        self.button_rows
            .iter()
            .find(|(_, row)| rect_contains(*row, x, y))
            .map(|(target, _)| *target)
    }

    /// Whether `(x, y)` falls on the backdrop rather than the sheet.
    #[must_use]
    pub fn is_backdrop(&self, x: u16, y: u16) -> bool {
        let on_main = rect_contains(self.main_group, x, y);
        let on_cancel = self
            .cancel_group
            .is_some_and(|group| rect_contains(group, x, y));
        !on_main && !on_cancel
    }
}

/// Whether `(x, y)` lies inside `rect`.
#[must_use]
pub const fn rect_contains(rect: Rect, x: u16, y: u16) -> bool {
    x >= rect.x
        && x < rect.x.saturating_add(rect.width)
        && y >= rect.y
        && y < rect.y.saturating_add(rect.height)
}

fn header_rows(sheet: &ActionSheetPresenter) -> u16 {
    u16::from(sheet.title().is_some()) + u16::from(sheet.sub_title().is_some())
}

/// Compute the layout of `sheet` inside `area`.
#[must_use]
pub fn sheet_layout(sheet: &ActionSheetPresenter, area: Rect) -> SheetLayout {
    let headers = header_rows(sheet);
    let buttons = u16::try_from(sheet.buttons().len()).unwrap_or(u16::MAX);
    let main_height = headers.saturating_add(buttons).saturating_add(2);
    let (gap, cancel_height) = if sheet.cancel_button().is_some() {
        (1, CANCEL_GROUP_HEIGHT)
    } else {
        (0, 0)
    };
    let total = main_height
        .saturating_add(gap)
        .saturating_add(cancel_height)
        .min(area.height);

    let percent_width =
        u16::try_from(u32::from(area.width) * SHEET_WIDTH_PERCENT / 100).unwrap_or(area.width);
    let width = percent_width.max(MIN_SHEET_WIDTH.min(area.width));
    let x = area.x + (area.width - width) / 2;
    let bottom_margin = u16::from(area.height > total);
    let y = area.y + (area.height - total - bottom_margin);

    let sheet_rect = Rect::new(x, y, width, total);
    let main_group = Rect::new(x, y, width, main_height.min(total));
    let cancel_group = sheet.cancel_button().and_then(|_| {
        let top = y.saturating_add(main_height).saturating_add(gap);
        let group = Rect::new(x, top, width, cancel_height).intersection(sheet_rect);
        (!group.is_empty()).then_some(group)
    });

    let inner_x = x.saturating_add(1);
    let inner_width = width.saturating_sub(2);
    let mut button_rows = Vec::new();
    let first_row = main_group.y.saturating_add(1).saturating_add(headers);
    let last_inner = main_group.bottom().saturating_sub(1);
    for (i, row_y) in (first_row..last_inner).enumerate().take(sheet.buttons().len()) {
        button_rows.push((ButtonRef::Index(i), Rect::new(inner_x, row_y, inner_width, 1)));
    }
    if let Some(group) = cancel_group
        && group.height >= CANCEL_GROUP_HEIGHT
    {
        button_rows.push((
            ButtonRef::Cancel,
            Rect::new(inner_x, group.y + 1, inner_width, 1),
        ));
    }

    SheetLayout {
        sheet: sheet_rect,
        main_group,
        cancel_group,
        button_rows,
    }
}

/// Glyph drawn for a named icon.
#[must_use]
pub fn icon_glyph(name: &str) -> &'static str {
    match name {
        "trash" | "delete" => "✖",
        "share" => "↗",
        "heart" => "♥",
        "star" => "★",
        "close" => "✕",
        "checkmark" => "✓",
        "copy" => "⎘",
        _ => "•",
    }
}

/// Replace control characters so caller text cannot drive the terminal.
#[must_use]
pub fn sanitize(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect()
}

fn button_style(button: &ActionSheetButton, cancel: bool, focused: bool) -> Style {
    let mut style = Style::default().fg(colors::TEXT_PRIMARY);
    if button.has_class(DESTRUCTIVE_CLASS) {
        style = style.fg(colors::DESTRUCTIVE);
    }
    if button.has_class(SELECTED_CLASS) {
        style = style.fg(colors::SELECTED).add_modifier(Modifier::BOLD);
    }
    if cancel {
        style = style.add_modifier(Modifier::BOLD);
    }
    if focused {
        style = style.bg(colors::FOCUS_BG).add_modifier(Modifier::REVERSED);
    }
    style
}

fn button_line(button: &ActionSheetButton, cancel: bool, focused: bool) -> Line<'static> {
    let style = button_style(button, cancel, focused);
    let mut spans = Vec::with_capacity(2);
    if let Some(icon) = &button.icon {
        spans.push(Span::styled(format!("{} ", icon_glyph(icon)), style));
    }
    spans.push(Span::styled(sanitize(&button.text), style));
    Line::from(spans)
}

/// Draw `sheet` over the whole frame.
pub fn render_action_sheet(frame: &mut Frame<'_>, sheet: &ActionSheetPresenter) {
    let area = frame.area();
    let layout = sheet_layout(sheet, area);

    let backdrop = if sheet.backdrop_dismiss_enabled() {
        colors::BACKDROP
    } else {
        colors::BACKDROP_NO_TAP
    };
    frame.render_widget(Block::default().style(Style::default().bg(backdrop)), area);

    let focused = sheet.focused();
    let mut lines: Vec<Line<'_>> = Vec::new();
    if let Some(title) = sheet.title() {
        lines.push(Line::from(Span::styled(
            sanitize(title),
            Style::default()
                .fg(colors::TEXT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        )));
    }
    if let Some(sub_title) = sheet.sub_title() {
        lines.push(Line::from(Span::styled(
            sanitize(sub_title),
            Style::default().fg(colors::TEXT_DIM),
        )));
    }
    for (i, button) in sheet.buttons().iter().enumerate() {
        lines.push(button_line(
            button,
            false,
            focused == Some(ButtonRef::Index(i)),
        ));
    }

    let group_block = || {
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colors::BORDER))
    };

    frame.render_widget(Clear, layout.main_group);
    frame.render_widget(
        Paragraph::new(lines)
            .block(group_block())
            .alignment(Alignment::Center)
            .style(Style::default().bg(colors::SHEET_BG)),
        layout.main_group,
    );

    if let (Some(group), Some(cancel)) = (layout.cancel_group, sheet.cancel_button()) {
        let line = button_line(cancel, true, focused == Some(ButtonRef::Cancel));
        frame.render_widget(Clear, group);
        frame.render_widget(
            Paragraph::new(line)
                .block(group_block())
                .alignment(Alignment::Center)
                .style(Style::default().bg(colors::SHEET_BG)),
            group,
        );
    }
}
