//! Configuration module

mod card;

pub use card::CardConfig;
pub use card::Layout;
pub use card::SlugStyle;
