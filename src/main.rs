// HeartMatch
// Terminal rendition of the HeartMatch landing page

use anyhow::{Context, Result};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{self, disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::Path;
use std::time::Instant;
use tracing::{error, info};

use heartmatch::config::{default_config_path, AppConfig};
use heartmatch::config_validation::{load_and_validate_config, resolve_content_path};
use heartmatch::content::Content;
use heartmatch::core::{init_file_logger, App};
use heartmatch::ui::run_app;

// ┌──────────────────────────────────────────────────────────────────────────────────────────────────────────────────┐
// │                                                 MAIN ENTRY POINT                                                 │
// └──────────────────────────────────────────────────────────────────────────────────────────────────────────────────┘

fn main() -> Result<()> {
    // Configuration problems are reported before the terminal is taken over
    let config_path = default_config_path();
    let (app_config, config_source) = load_and_validate_config(Some(config_path.clone()))?;

    init_file_logger(&app_config.logging)?;
    info!(config = %config_path.display(), "starting");
    config_source.log();

    let content = load_content(&app_config, &config_path)?;

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let (columns, _rows) = terminal::size()?;
    let mut app = App::new(app_config, content, columns, Instant::now());
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &result {
        error!(error = %err, "application error");
    }
    info!("exiting");
    result
}

/// Configured content file, resolved against the config file, else the built-in set
fn load_content(config: &AppConfig, config_path: &Path) -> Result<Content> {
    match &config.content {
        Some(content) => {
            let path = resolve_content_path(config_path, content);
            Content::load(&path)
        }
        None => Content::builtin(),
    }
}
