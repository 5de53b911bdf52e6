//! On-disk theme definition loading
//!
//! Theme definitions are TOML files tagged with `type = "base" | "color" |
//! "flair"`, registered on top of the built-in catalog. A file that fails
//! to parse or register is skipped with a warning; one bad definition
//! never sinks the build.

use anyhow::{Context, Result};
use obiente_theme::{Theme, ThemeRegistry};
use std::fs;
use std::path::Path;

/// Register every `*.toml` theme definition under `dir`, in path order.
/// Returns the number of themes registered.
pub fn load_themes_from_dir(registry: &mut ThemeRegistry, dir: &Path) -> Result<usize> {
    let mut paths: Vec<_> = fs::read_dir(dir)
        .with_context(|| format!("reading theme directory {}", dir.display()))?
        .filter_map(|entry| entry.ok().map(|entry| entry.path()))
        .filter(|path| path.extension().and_then(|ext| ext.to_str()) == Some("toml"))
        .collect();
    paths.sort();

    let mut loaded = 0;
    for path in paths {
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "skipping unreadable theme file");
                continue;
            }
        };
        let theme: Theme = match toml::from_str(&raw) {
            Ok(theme) => theme,
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "skipping malformed theme file");
                continue;
            }
        };
        match registry.register(theme) {
            Ok(id) => {
                tracing::debug!(path = %path.display(), id = %id, "registered theme");
                loaded += 1;
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "skipping rejected theme");
            }
        }
    }
    Ok(loaded)
}
