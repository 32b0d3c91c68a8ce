//! Homepage card templates using the Tera template engine
//!
//! Both card layouts are embedded in the binary. Every layout has the same
//! three zones: the thumbnail linking to the post, the description, and a
//! button linking to the post.

use serde::Serialize;
use tera::{Context, Tera};

use crate::config::{CardConfig, Layout};
use crate::content::PostReference;
use crate::error::Result;

/// Template renderer with the embedded card layouts
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Create a new renderer with all card layouts loaded
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();

        // Card text is trusted authoring content and goes in verbatim
        tera.autoescape_on(vec![]);

        tera.add_raw_templates(vec![
            (
                Layout::Columns.template_name(),
                include_str!("cards/card_columns.html"),
            ),
            (
                Layout::Flex.template_name(),
                include_str!("cards/card_flex.html"),
            ),
        ])?;

        Ok(Self { tera })
    }

    /// Render the card fragment for a post
    pub fn render_card(
        &self,
        layout: Layout,
        post: &PostReference,
        config: &CardConfig,
    ) -> Result<String> {
        let mut context = Context::new();
        context.insert("post", post);
        context.insert(
            "image",
            &ImageData {
                alt: &config.image_alt,
                size: config.image_size,
            },
        );

        let html = self.tera.render(layout.template_name(), &context)?;
        Ok(html.trim_end().to_string())
    }
}

#[derive(Debug, Serialize)]
struct ImageData<'a> {
    alt: &'a str,
    size: u32,
}
