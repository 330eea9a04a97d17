//! Entry point for the greeting screen.
//!
//! This Dioxus desktop application shows the greeting page with its
//! ambient music, floating hearts and nickname switcher.

use std::path::PathBuf;

use clap::Parser;
use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

use greeting_core::{ClockFormat, GreetingContent};
use greeting_logging::{FileConfig, GreetingSubscriberBuilder};
use greeting_viewer::components::App;
use greeting_viewer::config::{self, ViewerConfig};

/// CSS styles embedded at compile time.
const STYLES_CSS: &str = include_str!("../assets/styles.css");

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(name = "greeting-viewer")]
#[command(about = "Desktop greeting screen with ambient music and a nickname switcher")]
struct Args {
    /// JSON file overriding the built-in content (nicknames, prose, assets)
    #[arg(short, long)]
    content: Option<PathBuf>,

    /// Locale for the clock, e.g. fr_FR (defaults to LC_ALL / LC_TIME / LANG)
    #[arg(short, long)]
    locale: Option<String>,

    /// Default log level when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Also write JSONL logs to daily-rotated files in this directory
    #[arg(long)]
    log_dir: Option<PathBuf>,

    /// Emit console logs as JSONL instead of human-readable lines
    #[arg(long)]
    json_logs: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize logging
    let mut logging = GreetingSubscriberBuilder::new()
        .with_level(&args.log_level)
        .with_pretty_console(!args.json_logs);
    if let Some(dir) = &args.log_dir {
        logging = logging.with_file_output(FileConfig::daily(dir));
    }
    let _log_guard = logging.init()?;

    tracing::info!("Starting greeting screen");

    let content = match &args.content {
        Some(path) => GreetingContent::from_path(path).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Falling back to built-in content");
            GreetingContent::default()
        }),
        None => GreetingContent::default(),
    };

    let clock_format = match &args.locale {
        Some(name) => ClockFormat::parse(name).unwrap_or_else(|| {
            tracing::warn!(locale = %name, "Unknown locale, using en_US");
            ClockFormat::default()
        }),
        None => ClockFormat::from_env(),
    };
    tracing::debug!(locale = ?clock_format.locale(), "Clock format selected");

    config::install(ViewerConfig {
        content,
        clock_format,
    });

    // Launch the Dioxus desktop app
    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title("For You")
                        .with_inner_size(LogicalSize::new(1280, 900)),
                )
                .with_custom_head(format!("<style>{}</style>", STYLES_CSS)),
        )
        .launch(App);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_logs_are_pretty_by_default() {
        let args = Args::try_parse_from(["greeting-viewer"]).unwrap();
        assert!(!args.json_logs);
        assert_eq!(args.log_level, "info");

        let args = Args::try_parse_from(["greeting-viewer", "--json-logs"]).unwrap();
        assert!(args.json_logs);
    }

    #[test]
    fn test_no_pretty_flag() {
        assert!(Args::try_parse_from(["greeting-viewer", "--pretty"]).is_err());
    }
}
