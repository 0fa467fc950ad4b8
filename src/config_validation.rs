// Configuration validation module

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

use crate::config::{default_config_path, load_config, AppConfig};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config YAML: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("invalid config value for `{field}`: {message}")]
    Invalid { field: &'static str, message: String },
}

fn invalid(field: &'static str, message: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        field,
        message: message.into(),
    }
}

/// Where the active configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    /// The file was missing, built-in defaults are in use
    Defaults(PathBuf),
}

impl ConfigSource {
    pub fn is_fallback(&self) -> bool {
        matches!(self, ConfigSource::Defaults(_))
    }

    /// Report the source once the subscriber is installed
    pub fn log(&self) {
        match self {
            ConfigSource::File(path) => info!(path = %path.display(), "loaded configuration"),
            ConfigSource::Defaults(path) => {
                warn!(path = %path.display(), "config file not found, using defaults")
            }
        }
    }
}

/// Load and validate configuration.
///
/// A missing file is not an error: built-in defaults are used and the
/// returned `ConfigSource` says so, since logging is not set up yet.
/// Unreadable, malformed or invalid files are reported.
pub fn load_and_validate_config(
    config_path: Option<PathBuf>,
) -> Result<(AppConfig, ConfigSource), ConfigError> {
    let path = config_path.unwrap_or_else(default_config_path);

    let (config, source) = if path.exists() {
        (load_config(&path)?, ConfigSource::File(path))
    } else {
        (AppConfig::default(), ConfigSource::Defaults(path))
    };

    validate(&config)?;
    Ok((config, source))
}

/// Check cross-field invariants serde cannot express
pub fn validate(config: &AppConfig) -> Result<(), ConfigError> {
    let carousel = &config.carousel;

    if carousel.breakpoints.is_empty() {
        return Err(invalid("carousel.breakpoints", "at least one breakpoint is required"));
    }
    if carousel.breakpoints.iter().any(|bp| bp.cards == 0) {
        return Err(invalid("carousel.breakpoints", "cards per page must be at least 1"));
    }
    if carousel
        .breakpoints
        .windows(2)
        .any(|pair| pair[0].min_width <= pair[1].min_width)
    {
        return Err(invalid(
            "carousel.breakpoints",
            "min_width must be strictly descending",
        ));
    }
    if carousel.fallback_cards == 0 {
        return Err(invalid("carousel.fallback_cards", "must be at least 1"));
    }
    if !(carousel.swipe_threshold_ratio > 0.0 && carousel.swipe_threshold_ratio <= 1.0) {
        return Err(invalid(
            "carousel.swipe_threshold_ratio",
            format!("{} is outside (0, 1]", carousel.swipe_threshold_ratio),
        ));
    }
    if carousel.container_padding < 0.0 || carousel.card_margin < 0.0 {
        return Err(invalid("carousel", "padding and margin must not be negative"));
    }
    if config.application.units_per_column <= 0.0 {
        return Err(invalid("application.units_per_column", "must be positive"));
    }
    if config.gallery.page_size == 0 {
        return Err(invalid("gallery.page_size", "must be at least 1"));
    }

    Ok(())
}

/// Resolve a content path relative to the directory of the config file
pub fn resolve_content_path(config_path: &Path, content: &Path) -> PathBuf {
    if content.is_absolute() {
        return content.to_path_buf();
    }
    config_path
        .parent()
        .map(|dir| dir.join(content))
        .unwrap_or_else(|| content.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse_config;

    #[test]
    fn test_defaults_are_valid() {
        assert!(validate(&AppConfig::default()).is_ok());
    }

    #[test]
    fn test_shipped_config_is_valid() {
        let config = parse_config(include_str!("config.yaml")).unwrap();
        assert!(validate(&config).is_ok());
        assert_eq!(config.carousel.breakpoints[0].cards, 3);
        assert_eq!(config.application.units_per_column, 10.0);
        assert!(config.content.is_none());
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = parse_config(
            "carousel:\n  resize_debounce_ms: 100\ngallery:\n  page_size: 6\n",
        )
        .unwrap();
        assert_eq!(config.carousel.resize_debounce_ms, 100);
        assert_eq!(config.carousel.transition_ms, 500);
        assert_eq!(config.carousel.breakpoints.len(), 2);
        assert_eq!(config.gallery.page_size, 6);
        assert_eq!(config.chatbot.typing_delay_ms, 1000);
    }

    #[test]
    fn test_rejects_ascending_breakpoints() {
        let config = parse_config(
            "carousel:\n  breakpoints:\n    - { min_width: 768, cards: 2 }\n    - { min_width: 1200, cards: 3 }\n",
        )
        .unwrap();
        let err = validate(&config).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "carousel.breakpoints", .. }));
    }

    #[test]
    fn test_rejects_bad_threshold() {
        let mut config = AppConfig::default();
        config.carousel.swipe_threshold_ratio = 0.0;
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_malformed_yaml_is_parse_error() {
        let err = parse_config("carousel: [1, 2").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let path = PathBuf::from("/nonexistent/heartmatch/config.yaml");
        let (config, source) = load_and_validate_config(Some(path.clone())).unwrap();
        assert_eq!(config.application.title, "HeartMatch");
        assert!(source.is_fallback());
        assert_eq!(source, ConfigSource::Defaults(path));
    }

    #[test]
    fn test_existing_file_is_reported_as_file_source() {
        let dir = std::env::temp_dir().join(format!("heartmatch-config-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.yaml");
        std::fs::write(&path, "application:\n  title: \"Local\"\n").unwrap();

        let (config, source) = load_and_validate_config(Some(path.clone())).unwrap();
        std::fs::remove_dir_all(&dir).ok();

        assert_eq!(config.application.title, "Local");
        assert!(!source.is_fallback());
        assert_eq!(source, ConfigSource::File(path));
    }

    #[test]
    fn test_resolve_content_path() {
        let resolved = resolve_content_path(Path::new("/etc/heartmatch/config.yaml"), Path::new("content.yaml"));
        assert_eq!(resolved, PathBuf::from("/etc/heartmatch/content.yaml"));
    }
}
