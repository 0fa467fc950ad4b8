// Application Constants
// Defaults shared by the config layer and the carousel core

// CAROUSEL LAYOUT ---------->>

/// Viewport width at which three cards fit on a page
pub const WIDE_BREAKPOINT: f32 = 1200.0;

/// Viewport width at which two cards fit on a page
pub const MEDIUM_BREAKPOINT: f32 = 768.0;

/// Cards per page below every breakpoint
pub const FALLBACK_CARDS_PER_PAGE: usize = 1;

/// Horizontal space reserved in the strip container for the arrow controls
pub const CONTAINER_PADDING: f32 = 120.0;

/// Right margin between adjacent cards
pub const CARD_MARGIN: f32 = 20.0;

/// Fraction of a card width a drag must exceed to change page
pub const SWIPE_THRESHOLD_RATIO: f32 = 1.0 / 3.0;

//--------------------------------------------------------<<
// TIMING ------------------->>

pub const TRANSITION_MS: u64 = 500;
pub const RESIZE_DEBOUNCE_MS: u64 = 250;
pub const SETTLE_MS: u64 = 50;
pub const HEART_LIFETIME_MS: u64 = 1000;
pub const TYPING_DELAY_MS: u64 = 1000;
pub const WELCOME_DELAY_MS: u64 = 500;

/// Event poll timeout; short enough for smooth transitions
pub const TICK_RATE_MS: u64 = 16;

//--------------------------------------------------------<<
// TERMINAL ----------------->>

/// Width units represented by one terminal column
pub const UNITS_PER_COLUMN: f32 = 10.0;

/// Profiles revealed per "load more"
pub const GALLERY_PAGE_SIZE: usize = 3;

pub const CONFIG_ENV_VAR: &str = "HEARTMATCH_CONFIG";
pub const DEFAULT_LOG_FILE: &str = "heartmatch.log";
pub const DEFAULT_WELCOME_MESSAGE: &str = "Hi! 👋";

/// Filter id that matches every profile
pub const FILTER_ALL: &str = "all";
