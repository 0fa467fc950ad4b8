// Page Content
// Stories and profiles shown by the carousel and the gallery

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const BUILTIN_CONTENT: &str = include_str!("content.yaml");

/// A success story card in the carousel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Story {
    pub title: String,
    pub couple: String,
    pub quote: String,
}

/// An example member profile in the gallery
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub age: u8,
    pub location: String,
    pub bio: String,
    /// Filter categories this profile belongs to
    #[serde(default)]
    pub categories: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Content {
    #[serde(default)]
    pub stories: Vec<Story>,
    #[serde(default)]
    pub profiles: Vec<Profile>,
}

impl Content {
    pub fn parse(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).context("Failed to parse content YAML")
    }

    /// Load content from a file
    pub fn load(path: &Path) -> Result<Self> {
        let yaml = fs::read_to_string(path)
            .with_context(|| format!("Failed to read content file: {}", path.display()))?;
        Self::parse(&yaml)
    }

    /// The content compiled into the binary
    pub fn builtin() -> Result<Self> {
        Self::parse(BUILTIN_CONTENT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_content_parses() {
        let content = Content::builtin().unwrap();
        assert_eq!(content.stories.len(), 8);
        assert_eq!(content.profiles.len(), 9);
        assert!(content.profiles.iter().all(|p| !p.categories.is_empty()));
    }

    #[test]
    fn test_categories_default_to_empty() {
        let content = Content::parse(
            "profiles:\n  - { name: Kai, age: 30, location: Bath, bio: Hi }\n",
        )
        .unwrap();
        assert!(content.stories.is_empty());
        assert!(content.profiles[0].categories.is_empty());
    }

    #[test]
    fn test_missing_file_is_error() {
        assert!(Content::load(Path::new("/nonexistent/content.yaml")).is_err());
    }
}
