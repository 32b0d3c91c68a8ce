//! homecard: add a blog post card to a static site's homepage
//!
//! Reads a post's title and description from its front-matter, renders an
//! HTML card linking to the post, and inserts the card right after the
//! homepage's top-level heading.

pub mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod helpers;
pub mod patcher;
pub mod templates;

pub use error::{Error, Result};

use std::path::{Path, PathBuf};

/// Name of the optional configuration file in the base directory
pub const CONFIG_FILE: &str = "_homecard.yml";

/// The main application context
#[derive(Debug, Clone)]
pub struct HomeCard {
    /// Card configuration
    pub config: config::CardConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Site root (resolved)
    pub site_root: PathBuf,
    /// Homepage document
    pub index_path: PathBuf,
    /// Reviewable copy of the patched homepage
    pub review_path: PathBuf,
}

impl HomeCard {
    /// Create a new instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join(CONFIG_FILE);

        let config = if config_path.exists() {
            tracing::debug!("Loading config from {:?}", config_path);
            config::CardConfig::load(&config_path)?
        } else {
            config::CardConfig::default()
        };

        let root = base_dir.join(&config.root);
        Self::assemble(config, base_dir, &root)
    }

    /// Use `root` as the site root instead of the configured one
    pub fn with_root<P: AsRef<Path>>(self, root: P) -> Result<Self> {
        let root = self.base_dir.join(root.as_ref());
        Self::assemble(self.config, self.base_dir, &root)
    }

    fn assemble(config: config::CardConfig, base_dir: PathBuf, root: &Path) -> Result<Self> {
        let site_root = helpers::resolve_path(root)?;
        let index_path = site_root.join(&config.index_file);
        let review_path = site_root.join(&config.review_file);

        Ok(Self {
            config,
            base_dir,
            site_root,
            index_path,
            review_path,
        })
    }

    /// Interpret a user-supplied path relative to the base directory
    pub fn input_path<P: AsRef<Path>>(&self, path: P) -> PathBuf {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            return PathBuf::new();
        }
        self.base_dir.join(path)
    }

    /// Add a post card to the homepage
    pub fn add(&self, inputs: &content::CardInputs, inplace: bool) -> Result<PathBuf> {
        commands::add::run(self, inputs, inplace)
    }

    /// Render a post card without touching the homepage
    pub fn render(&self, inputs: &content::CardInputs) -> Result<String> {
        commands::render::run(self, inputs)
    }

    /// Remove a leftover review copy
    pub fn clean(&self) -> Result<()> {
        commands::clean::run(self)
    }
}
