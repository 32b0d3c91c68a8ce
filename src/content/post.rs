//! Post reference model

use serde::Serialize;
use std::path::{Path, PathBuf};

use super::{FrontMatter, Wants};
use crate::config::CardConfig;
use crate::error::{Error, Result};
use crate::helpers;

/// What the user supplied for one card
#[derive(Debug, Clone, Default)]
pub struct CardInputs {
    /// Path to the html or markdown source of the post
    pub post: PathBuf,
    /// Path to the image shown on the card
    pub image: PathBuf,
    /// Title override
    pub title: Option<String>,
    /// Description override
    pub description: Option<String>,
    /// Button text override
    pub button: Option<String>,
}

impl CardInputs {
    /// Fail on missing required inputs before any file is touched
    pub fn validate(&self) -> Result<()> {
        if self.post.as_os_str().is_empty() {
            return Err(Error::Input("Path to the post must be provided".to_string()));
        }
        if self.image.as_os_str().is_empty() {
            return Err(Error::Input("Path to the image must be provided".to_string()));
        }
        Ok(())
    }

    /// Fields that have to come from the post's front-matter
    pub fn wants(&self) -> Wants {
        Wants {
            title: self.title.is_none(),
            description: self.description.is_none(),
        }
    }
}

/// Everything a homepage card shows about a post
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostReference {
    pub title: String,
    pub description: String,
    pub button: String,
    /// Root-relative URL of the post
    pub post_url: String,
    /// Root-relative URL of the image
    pub image_url: String,
}

impl PostReference {
    /// Build the reference, reading front-matter only for fields not overridden
    pub fn resolve(inputs: &CardInputs, config: &CardConfig, site_root: &Path) -> Result<Self> {
        inputs.validate()?;

        let post_path = helpers::resolve_path(&inputs.post)?;
        let image_path = helpers::resolve_path(&inputs.image)?;

        let wants = inputs.wants();
        let found = if wants.is_empty() {
            FrontMatter::default()
        } else {
            FrontMatter::extract(&post_path, wants)?
        };

        // Extraction guarantees every wanted field is present
        let title = inputs.title.clone().or(found.title).unwrap_or_default();
        let description = inputs
            .description
            .clone()
            .or(found.description)
            .unwrap_or_default();
        let button = inputs.button.clone().unwrap_or_else(|| title.clone());

        let post_url = helpers::post_url(config, &post_path)?;
        let image_url = helpers::image_url(&image_path, site_root);

        Ok(Self {
            title,
            description,
            button,
            post_url,
            image_url,
        })
    }
}
