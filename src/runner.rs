//! Terminal host for a single action sheet

use action_sheet::config::AppConfig;
use action_sheet::controller::{DirectClasses, Dismissal};
use action_sheet::gesture::GestureGate;
use action_sheet::ids::IdCounter;
use action_sheet::input::{self, Outcome};
use action_sheet::lifecycle::LifecycleDriver;
use action_sheet::nav::{DismissRecord, OverlayStack};
use action_sheet::presenter::{ActionSheetPresenter, Injected};
use action_sheet::render::{colors, render_action_sheet};
use action_sheet::sheet::ActionSheetConfig;
use anyhow::Result;
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    crossterm::{
        event::{
            self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind,
            KeyModifiers,
        },
        execute,
        terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
    },
    layout::Rect,
    style::Style,
    text::Line,
    widgets::Paragraph,
};
use std::io;
use std::time::Duration;
use tracing::info;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Show `data` until it is dismissed or the user presses Ctrl+C.
///
/// Returns the dismissal that closed the sheet, if any.
pub fn run(config: &AppConfig, data: ActionSheetConfig) -> Result<Option<DismissRecord>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_loop(&mut terminal, config, data);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    config: &AppConfig,
    data: ActionSheetConfig,
) -> Result<Option<DismissRecord>> {
    let stack = OverlayStack::new();
    let gate = GestureGate::new();
    let mut renderer = DirectClasses;
    let presenter = ActionSheetPresenter::new(
        Injected {
            view_ctrl: Box::new(stack.present()),
            config,
            gestures: &gate,
            renderer: &mut renderer,
            ids: IdCounter::shared(),
        },
        data,
    );
    let mut driver = LifecycleDriver::new(presenter);
    driver.present()?;
    info!(id = driver.view().id(), "Action sheet presented");

    let hints = config.keys.hints();
    loop {
        let completed = terminal.draw(|frame| {
            draw_background(frame, &hints, gate.is_blocked());
            render_action_sheet(frame, driver.view());
        })?;
        let area = completed.area;

        if !event::poll(POLL_INTERVAL)? {
            continue;
        }

        let outcome = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
                {
                    break;
                }
                input::handle_key_event(driver.view_mut(), &config.keys, key.code, key.modifiers)
            }
            Event::Mouse(mouse) if !stack.is_tap_blocked() => {
                input::handle_mouse_event(driver.view_mut(), mouse, area)
            }
            _ => Outcome::Ignored,
        };

        if let Outcome::Dismissed(Dismissal::Closing { .. }) = outcome {
            break;
        }
    }

    driver.close()?;
    Ok(stack.last_dismissal())
}

fn draw_background(frame: &mut Frame<'_>, hints: &str, blocked: bool) {
    let area = frame.area();
    let status = if blocked {
        "background input blocked"
    } else {
        "background input live"
    };
    let lines = vec![
        Line::styled(hints.to_string(), Style::default().fg(colors::TEXT_DIM)),
        Line::styled(status, Style::default().fg(colors::TEXT_DIM)),
    ];
    let height = area.height.min(2);
    frame.render_widget(Paragraph::new(lines), Rect { height, ..area });
}
