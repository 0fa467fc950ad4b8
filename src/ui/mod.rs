// UI module
// Page views and the terminal event loop

pub mod app_view;
pub mod auth_view;
pub mod chat_view;
pub mod gallery_view;
pub mod helpers;
pub mod story_strip;
pub mod styles;

use anyhow::Result;
use crossterm::event;
use ratatui::{backend::Backend, Terminal};
use std::time::{Duration, Instant};
use tracing::info;

use crate::core::{App, EventHandler, HitRegions};

pub use app_view::render_app;
pub use styles::Styles;

/// Run the main application event loop
pub fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    let tick_rate = Duration::from_millis(app.config.application.tick_rate_ms);

    loop {
        // Render the UI only when something changed
        let now = Instant::now();
        if app.take_redraw(now) {
            let mut regions = HitRegions::default();
            terminal.draw(|f| regions = render_app(f, app, now))?;
            app.regions = regions;
        }

        // Handle events
        if event::poll(tick_rate)? {
            let event = event::read()?;
            let app_event =
                EventHandler::handle(event, app.input_mode(), &app.regions, app.units_per_column());
            app.handle(app_event, Instant::now());
        }

        app.tick(Instant::now());

        // Check if we should quit
        if app.should_quit {
            info!("quit requested");
            return Ok(());
        }
    }
}
