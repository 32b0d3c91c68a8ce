//! Add a post card to the homepage

use std::path::PathBuf;

use super::render::build_fragment;
use crate::content::CardInputs;
use crate::error::Result;
use crate::patcher;
use crate::HomeCard;

/// Insert the card into the homepage
///
/// The patched page is written to the review copy. With `inplace` the
/// review copy then replaces the homepage. Returns the path written.
pub fn run(hc: &HomeCard, inputs: &CardInputs, inplace: bool) -> Result<PathBuf> {
    let fragment = build_fragment(hc, inputs)?;

    patcher::patch_file(
        &hc.index_path,
        &hc.review_path,
        &fragment,
        &hc.config.marker,
    )?;

    if inplace {
        patcher::commit(&hc.review_path, &hc.index_path)?;
        Ok(hc.index_path.clone())
    } else {
        Ok(hc.review_path.clone())
    }
}
