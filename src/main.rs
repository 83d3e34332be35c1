//! Termfolio - Interactive terminal portfolio
//!
//! This application renders a one-page developer portfolio as a
//! scrolling terminal UI: an animated hero banner, a bio, skill bars,
//! a filterable project grid, and a contact form.

// Module declarations
mod branding;
mod config;
mod content;
mod shortcuts;
mod tui;

use anyhow::Result;
use clap::Parser;

use config::ThemePreference;

/// Termfolio - Interactive terminal portfolio
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Override the theme for this session (not persisted)
    #[arg(long, value_enum, value_name = "THEME")]
    theme: Option<ThemeArg>,

    /// Print the config file path and exit
    #[arg(long)]
    config_path: bool,
}

/// Theme names accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum ThemeArg {
    /// Light palette
    Light,
    /// Dark palette
    Dark,
}

impl From<ThemeArg> for ThemePreference {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Light => Self::Light,
            ThemeArg::Dark => Self::Dark,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.config_path {
        println!("{}", config::Config::config_file_path()?.display());
        return Ok(());
    }

    // A corrupt config file should not keep the page from opening
    let mut config = match config::Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: Failed to load config: {e}");
            eprintln!("Falling back to the default configuration.");
            config::Config::default()
        }
    };
    if let Some(theme) = cli.theme {
        config.ui.theme = theme.into();
    }

    let content = content::SiteContent::builtin();

    // Initialize TUI
    let mut terminal = tui::setup_terminal()?;
    let mut app_state = tui::AppState::new(content, config)?;

    // Run main TUI loop
    let result = tui::run_tui(&mut app_state, &mut terminal);

    // Restore terminal
    tui::restore_terminal(terminal)?;

    // Check for errors
    result?;

    Ok(())
}
