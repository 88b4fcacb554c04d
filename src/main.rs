//! action-sheet - show an action sheet in the terminal and print the choice

use action_sheet::button::{ActionSheetButton, HandlerOutcome, Role};
use action_sheet::config::AppConfig;
use action_sheet::sheet::ActionSheetConfig;
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

mod runner;

/// Show an action sheet and print the role of the chosen button
#[derive(Parser)]
#[command(name = "action-sheet")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON file describing the sheet (a built-in demo is shown otherwise)
    sheet: Option<PathBuf>,

    /// Configuration file (defaults to the user config directory)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Ignore taps on the backdrop and the escape key
    #[arg(long)]
    no_backdrop_dismiss: bool,
}

fn main() -> Result<()> {
    let log_path = std::env::temp_dir().join("action-sheet.log");
    if let Err(e) = std::fs::write(&log_path, "") {
        eprintln!("Warning: Failed to clear log file: {e}");
    }

    // Set DEBUG=0-3 to control verbosity (0=off, 1=warn, 2=info, 3=debug)
    let debug_level = std::env::var("DEBUG")
        .ok()
        .and_then(|v| v.parse::<u8>().ok())
        .unwrap_or(0);

    if debug_level > 0 {
        let level = match debug_level {
            1 => tracing::Level::WARN,
            2 => tracing::Level::INFO,
            _ => tracing::Level::DEBUG,
        };

        let file_appender = tracing_appender::rolling::never(std::env::temp_dir(), "action-sheet.log");
        tracing_subscriber::fmt()
            .with_writer(file_appender)
            .with_max_level(level)
            .with_ansi(false)
            .init();
    }

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => AppConfig::load_from(path)?,
        None => AppConfig::load()?,
    };
    let mut data = match &cli.sheet {
        Some(path) => ActionSheetConfig::load_from(path)?,
        None => demo_sheet(),
    };
    if cli.no_backdrop_dismiss {
        data.enable_backdrop_dismiss = false;
    }

    match runner::run(&config, data)? {
        Some(record) => println!("{}", record.role.as_deref().unwrap_or("none")),
        None => println!("closed"),
    }
    Ok(())
}

fn demo_sheet() -> ActionSheetConfig {
    let mut confirmed = false;
    ActionSheetConfig::new()
        .title("Albums")
        .sub_title("Choose what to do with this album")
        .button(
            ActionSheetButton::new("Share")
                .with_icon("share")
                .with_handler(|| info!("Share clicked")),
        )
        .button(ActionSheetButton::new("Favorite").with_icon("heart").with_role(Role::Selected))
        .button(
            ActionSheetButton::new("Delete")
                .with_icon("trash")
                .with_role(Role::Destructive)
                .with_handler(move || {
                    // First press arms, second press deletes
                    if confirmed {
                        HandlerOutcome::Proceed
                    } else {
                        confirmed = true;
                        info!("Delete armed, press again to confirm");
                        HandlerOutcome::Veto
                    }
                }),
        )
        .button(
            ActionSheetButton::new("Cancel")
                .with_icon("close")
                .with_role(Role::Cancel),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::parse_from(["action-sheet"]);
        assert!(cli.sheet.is_none());
        assert!(cli.config.is_none());
        assert!(!cli.no_backdrop_dismiss);
    }

    #[test]
    fn test_cli_with_sheet_and_flags() {
        let cli = Cli::parse_from([
            "action-sheet",
            "sheet.json",
            "--config",
            "cfg.json",
            "--no-backdrop-dismiss",
        ]);
        assert_eq!(cli.sheet, Some(PathBuf::from("sheet.json")));
        assert_eq!(cli.config, Some(PathBuf::from("cfg.json")));
        assert!(cli.no_backdrop_dismiss);
    }

    #[test]
    fn test_demo_sheet_has_cancel() {
        let sheet = demo_sheet();
        assert_eq!(sheet.buttons.len(), 4);
        assert!(sheet.enable_backdrop_dismiss);
    }
}
