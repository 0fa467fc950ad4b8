// HeartMatch Library
// Story carousel core plus the terminal page built around it

// Carousel - viewport-responsive paging for the story strip
pub mod carousel;

// Configuration loading and validation
pub mod config;
pub mod config_validation;

// Application constants
pub mod constants;

// Stories and profiles
pub mod content;

// Core infrastructure - app state, events, logging
pub mod core;

// Operations - gallery, likes, chat, chatbot, sign-up
pub mod operations;

// UI - page views and the event loop
pub mod ui;

// Utilities - timers, easing, text helpers
pub mod utilities;

// Re-export commonly used items for convenience
pub use carousel::{CarouselController, CarouselState, RenderSurface, Viewport};
pub use config::AppConfig;
pub use content::Content;
pub use core::App;
