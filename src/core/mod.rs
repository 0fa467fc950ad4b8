// Core infrastructure module
// Application state, event translation and logging setup

pub mod app;
pub mod events;
pub mod logging;

pub use app::{viewport_for, App, Focus};
pub use events::{AppEvent, ClickTarget, EventHandler, HitRegions, InputMode};
pub use logging::init_file_logger;
