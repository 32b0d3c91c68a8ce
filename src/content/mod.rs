//! Content module - post front-matter and card data

mod frontmatter;
mod post;

pub use frontmatter::{FrontMatter, Wants};
pub use post::{CardInputs, PostReference};
