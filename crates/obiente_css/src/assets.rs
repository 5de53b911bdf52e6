//! Static runtime assets
//!
//! Browser-side scripts copied verbatim into the build output. The init
//! script runs before first paint to avoid a flash of the wrong theme; the
//! manager script is the full client-side preference API.

pub const THEME_MANAGER_FILE: &str = "obiente-theme-manager.js";
pub const THEME_INIT_FILE: &str = "obiente-theme-init.js";

pub const THEME_MANAGER_JS: &str = include_str!("../assets/obiente-theme-manager.js");
pub const THEME_INIT_JS: &str = include_str!("../assets/obiente-theme-init.js");
