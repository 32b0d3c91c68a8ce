//! URL helper functions

use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::config::{CardConfig, SlugStyle};
use crate::error::{Error, Result};

/// Resolve a user-supplied path to its real location on disk
pub fn resolve_path<P: AsRef<Path>>(path: P) -> Result<PathBuf> {
    let path = path.as_ref();
    fs::canonicalize(path).map_err(|source| Error::PathResolution {
        path: path.to_path_buf(),
        source,
    })
}

/// Derive the slug of a post from its file name
///
/// # Examples
/// ```ignore
/// post_slug("/a/2024-01-01-hello.md", SlugStyle::Basename, 11) // -> "2024-01-01-hello"
/// post_slug("/a/2024-01-01-hello.md", SlugStyle::Dated, 11)    // -> "hello"
/// ```
pub fn post_slug(post_path: &Path, style: SlugStyle, date_prefix_len: usize) -> Result<String> {
    let stem = post_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    match style {
        SlugStyle::Basename => Ok(stem),
        SlugStyle::Dated => strip_date_prefix(&stem, date_prefix_len),
    }
}

fn strip_date_prefix(stem: &str, prefix_len: usize) -> Result<String> {
    let split = match stem.char_indices().nth(prefix_len) {
        Some((idx, _)) => idx,
        None => {
            return Err(Error::InvalidSlug {
                name: stem.to_string(),
                prefix_len,
            })
        }
    };

    let (prefix, rest) = stem.split_at(split);
    let date = prefix.trim_end_matches(['-', '_']);
    if chrono::NaiveDate::parse_from_str(date, "%Y-%m-%d").is_err() {
        tracing::warn!("Stripped prefix {:?} of {:?} is not a date", prefix, stem);
    }

    Ok(rest.to_string())
}

/// Root-relative URL of a post: `<posts_prefix><slug>/`
pub fn post_url(config: &CardConfig, post_path: &Path) -> Result<String> {
    let slug = post_slug(post_path, config.slug_style, config.date_prefix_len)?;
    let prefix = config.posts_prefix.trim_matches('/');

    if prefix.is_empty() {
        Ok(format!("/{}/", slug))
    } else {
        Ok(format!("/{}/{}/", prefix, slug))
    }
}

/// Root-relative URL of an image: its path relative to `site_root`, prefixed with `/`
///
/// # Examples
/// ```ignore
/// image_url("/site/assets/img/a.png", "/site") // -> "/assets/img/a.png"
/// ```
pub fn image_url(image_path: &Path, site_root: &Path) -> String {
    format!("/{}", relative_path(site_root, image_path))
}

/// Calculate the relative path from a directory to a file
///
/// Paths outside `from` climb with `..` segments.
pub fn relative_path(from: &Path, to: &Path) -> String {
    let from_parts = normal_parts(from);
    let to_parts = normal_parts(to);

    // Find common prefix
    let common = from_parts
        .iter()
        .zip(&to_parts)
        .take_while(|(a, b)| a == b)
        .count();

    let mut parts: Vec<String> = vec!["..".to_string(); from_parts.len() - common];
    parts.extend(to_parts[common..].iter().cloned());

    if parts.is_empty() {
        ".".to_string()
    } else {
        parts.join("/")
    }
}

fn normal_parts(path: &Path) -> Vec<String> {
    path.components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect()
}
