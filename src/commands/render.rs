//! Render a post card without touching the homepage

use crate::content::{CardInputs, PostReference};
use crate::error::Result;
use crate::templates::TemplateRenderer;
use crate::HomeCard;

/// Build the card fragment for the given inputs
pub fn build_fragment(hc: &HomeCard, inputs: &CardInputs) -> Result<String> {
    let post = PostReference::resolve(inputs, &hc.config, &hc.site_root)?;
    tracing::debug!("Resolved post reference: {:?}", post);

    let renderer = TemplateRenderer::new()?;
    renderer.render_card(hc.config.layout, &post, &hc.config)
}

/// Run the render command
pub fn run(hc: &HomeCard, inputs: &CardInputs) -> Result<String> {
    build_fragment(hc, inputs)
}
