//! Obiente CSS generation
//!
//! Turns resolved themes into stylesheet text, `<link>` markup, and a
//! JSON manifest for the build output. Everything here is pure string
//! generation; file emission lives with the build tooling.
//!
//! Generation degrades instead of aborting: a theme with an empty variable
//! map is skipped with a warning so one broken theme never takes down the
//! whole asset batch.

pub mod assets;
pub mod css;
pub mod links;
pub mod manifest;

pub use assets::{THEME_INIT_FILE, THEME_INIT_JS, THEME_MANAGER_FILE, THEME_MANAGER_JS};
pub use css::{bundle_css, theme_css, variable_block};
pub use links::{inject_theme_assets, preload_links, stylesheet_links, INJECT_MARKER};
pub use manifest::{manifest, ThemeManifest};
