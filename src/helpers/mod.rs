//! Helper functions for deriving card URLs

mod url;

pub use url::*;
