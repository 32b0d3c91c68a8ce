//! Command implementations

pub mod add;
pub mod clean;
pub mod render;
