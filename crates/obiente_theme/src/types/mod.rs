//! Theme definition types
//!
//! The three theme layers and their supporting types:
//! - Base themes (numeric multipliers)
//! - Color themes (semantic palette)
//! - Flair themes (stackable overrides)

mod base;
mod color;
mod flair;
mod theme;

pub use base::*;
pub use color::*;
pub use flair::*;
pub use theme::*;
