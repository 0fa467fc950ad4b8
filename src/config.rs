// Configuration loading module

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::config_validation::ConfigError;
use crate::constants::*;

/// Top-level configuration, loaded from YAML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub application: ApplicationConfig,
    pub carousel: CarouselConfig,
    pub gallery: GalleryConfig,
    pub likes: LikesConfig,
    pub chatbot: ChatbotConfig,
    pub logging: LoggingConfig,
    /// Optional stories/profiles file; the built-in set is used when absent
    pub content: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApplicationConfig {
    pub title: String,
    pub units_per_column: f32,
    pub tick_rate_ms: u64,
    pub status_bar: StatusBarConfig,
    pub bindings: Vec<BindingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BindingConfig {
    pub key: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusBarConfig {
    pub default_text: String,
}

/// A viewport tier: at `min_width` and above, `cards` fit on a page
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Breakpoint {
    pub min_width: f32,
    pub cards: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    /// Tiers ordered from widest to narrowest
    pub breakpoints: Vec<Breakpoint>,
    pub fallback_cards: usize,
    pub container_padding: f32,
    pub card_margin: f32,
    pub swipe_threshold_ratio: f32,
    pub transition_ms: u64,
    pub resize_debounce_ms: u64,
    pub settle_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    pub page_size: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LikesConfig {
    pub heart_lifetime_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatbotConfig {
    pub typing_delay_ms: u64,
    pub welcome_delay_ms: u64,
    pub welcome_message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub file: PathBuf,
    pub level: String,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        let binding = |key: &str, description: &str| BindingConfig {
            key: key.to_string(),
            description: description.to_string(),
        };
        Self {
            title: "HeartMatch".to_string(),
            units_per_column: UNITS_PER_COLUMN,
            tick_rate_ms: TICK_RATE_MS,
            status_bar: StatusBarConfig::default(),
            bindings: vec![
                binding("q", "Quit"),
                binding("Tab", "Focus"),
                binding("←/→", "Navigate"),
                binding("c", "Chatbot"),
                binding("g", "Get Started"),
            ],
        }
    }
}

impl Default for StatusBarConfig {
    fn default() -> Self {
        Self {
            default_text: "Find your perfect match".to_string(),
        }
    }
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            breakpoints: vec![
                Breakpoint { min_width: WIDE_BREAKPOINT, cards: 3 },
                Breakpoint { min_width: MEDIUM_BREAKPOINT, cards: 2 },
            ],
            fallback_cards: FALLBACK_CARDS_PER_PAGE,
            container_padding: CONTAINER_PADDING,
            card_margin: CARD_MARGIN,
            swipe_threshold_ratio: SWIPE_THRESHOLD_RATIO,
            transition_ms: TRANSITION_MS,
            resize_debounce_ms: RESIZE_DEBOUNCE_MS,
            settle_ms: SETTLE_MS,
        }
    }
}

impl CarouselConfig {
    pub fn transition(&self) -> Duration {
        Duration::from_millis(self.transition_ms)
    }

    pub fn resize_debounce(&self) -> Duration {
        Duration::from_millis(self.resize_debounce_ms)
    }

    pub fn settle(&self) -> Duration {
        Duration::from_millis(self.settle_ms)
    }
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self { page_size: GALLERY_PAGE_SIZE }
    }
}

impl Default for LikesConfig {
    fn default() -> Self {
        Self { heart_lifetime_ms: HEART_LIFETIME_MS }
    }
}

impl Default for ChatbotConfig {
    fn default() -> Self {
        Self {
            typing_delay_ms: TYPING_DELAY_MS,
            welcome_delay_ms: WELCOME_DELAY_MS,
            welcome_message: DEFAULT_WELCOME_MESSAGE.to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from(DEFAULT_LOG_FILE),
            level: "info".to_string(),
        }
    }
}

/// Default config location: `HEARTMATCH_CONFIG`, else `src/config.yaml` in the crate
pub fn default_config_path() -> PathBuf {
    if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
        return PathBuf::from(path);
    }
    let mut default_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    default_path.push("src");
    default_path.push("config.yaml");
    default_path
}

pub fn parse_config(contents: &str) -> Result<AppConfig, ConfigError> {
    Ok(serde_yaml::from_str(contents)?)
}

pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&contents)
}
