//! Card configuration (_homecard.yml)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::Result;

/// How a post's file name becomes its URL slug
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SlugStyle {
    /// Strip the extension only: `2024-01-01-hello.md` -> `2024-01-01-hello`
    Basename,
    /// Also strip the leading date stamp: `2024-01-01-hello.md` -> `hello`
    Dated,
}

/// Card layout written into the homepage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// Bootstrap row with image, description and spacer columns
    Columns,
    /// Flex/grid card
    Flex,
}

impl Layout {
    /// Name of the embedded template for this layout
    pub fn template_name(&self) -> &'static str {
        match self {
            Layout::Columns => "card_columns.html",
            Layout::Flex => "card_flex.html",
        }
    }
}

/// Main card configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CardConfig {
    // Site
    pub root: String,
    pub index_file: String,
    pub review_file: String,

    // URL
    pub posts_prefix: String,
    pub slug_style: SlugStyle,
    pub date_prefix_len: usize,

    // Homepage
    pub marker: String,
    pub layout: Layout,
    pub image_alt: String,
    pub image_size: u32,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            root: ".".to_string(),
            index_file: "index.html".to_string(),
            review_file: "index.new.html".to_string(),

            posts_prefix: "/posts/".to_string(),
            slug_style: SlugStyle::Basename,
            date_prefix_len: 11,

            marker: "<h1>".to_string(),
            layout: Layout::Columns,
            image_alt: "PPI".to_string(),
            image_size: 200,
        }
    }
}

impl CardConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: CardConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CardConfig::default();
        assert_eq!(config.root, ".");
        assert_eq!(config.marker, "<h1>");
        assert_eq!(config.slug_style, SlugStyle::Basename);
        assert_eq!(config.layout, Layout::Columns);
        assert_eq!(config.date_prefix_len, 11);
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
root: ..
slug_style: dated
layout: flex
image_size: 150
"#;
        let config: CardConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.root, "..");
        assert_eq!(config.slug_style, SlugStyle::Dated);
        assert_eq!(config.layout, Layout::Flex);
        assert_eq!(config.image_size, 150);
        // Untouched keys keep their defaults
        assert_eq!(config.index_file, "index.html");
    }

    #[test]
    fn test_load_rejects_unknown_layout() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("_homecard.yml");
        fs::write(&path, "layout: masonry\n").unwrap();
        assert!(matches!(
            CardConfig::load(&path),
            Err(crate::Error::Config(_))
        ));
    }
}
