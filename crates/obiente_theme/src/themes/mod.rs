//! Built-in theme catalog
//!
//! The static definitions every registry starts from. Registration happens
//! explicitly through [`crate::ThemeRegistry::with_builtin`]; nothing here
//! is discovered or loaded dynamically.

mod base;
mod catppuccin;
mod flair;

pub use base::base_themes;
pub use catppuccin::catppuccin_themes;
pub use flair::flair_themes;

use crate::types::Theme;

/// Every built-in theme definition, in registration order.
pub fn builtin() -> Vec<Theme> {
    let mut themes = Vec::new();
    themes.extend(base_themes().into_iter().map(Theme::Base));
    themes.extend(catppuccin_themes().into_iter().map(Theme::Color));
    themes.extend(flair_themes().into_iter().map(Theme::Flair));
    themes
}
