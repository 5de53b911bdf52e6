//! One-shot theme build
//!
//! Resolves every configured theme and writes the output tree:
//!
//! ```text
//! <out>/
//! ├── themes/
//! │   ├── <id>.css          one per resolved theme
//! │   └── manifest.json
//! ├── obiente-theme-manager.js
//! ├── obiente-theme-init.js
//! └── <template>            when HTML injection is configured
//! ```
//!
//! A theme that fails to resolve or renders empty is skipped with a
//! warning; the rest of the batch still builds.

use anyhow::{Context, Result};
use obiente_css::{
    inject_theme_assets, manifest, theme_css, INJECT_MARKER, THEME_INIT_FILE, THEME_INIT_JS,
    THEME_MANAGER_FILE, THEME_MANAGER_JS,
};
use obiente_theme::{resolver, ResolvedTheme, ThemeRegistry};
use std::ffi::OsStr;
use std::fs;

use crate::config::ObienteConfig;
use crate::loader::load_themes_from_dir;

/// Build the registry the config describes: built-ins plus any theme
/// definition directory.
pub fn build_registry(config: &ObienteConfig) -> Result<ThemeRegistry> {
    let mut registry = ThemeRegistry::with_builtin();
    if let Some(dir) = &config.themes.dir {
        if dir.exists() {
            let loaded = load_themes_from_dir(&mut registry, dir)?;
            tracing::info!(count = loaded, dir = %dir.display(), "loaded theme definitions");
        } else {
            tracing::warn!(dir = %dir.display(), "theme directory does not exist");
        }
    }
    Ok(registry)
}

/// Resolve every configured color theme against the configured base and
/// flair stack. Failures skip that theme and keep going.
pub fn resolve_configured(config: &ObienteConfig, registry: &ThemeRegistry) -> Vec<ResolvedTheme> {
    let mut resolved = Vec::with_capacity(config.themes.colors.len());
    for color_id in &config.themes.colors {
        match resolver::resolve(registry, &config.themes.base, color_id, &config.themes.flair) {
            Ok(theme) => resolved.push(theme),
            Err(err) => tracing::warn!(color = %color_id, %err, "skipping unresolvable theme"),
        }
    }
    resolved
}

/// Run the whole build.
pub fn run_build(config: &ObienteConfig) -> Result<()> {
    let registry = build_registry(config)?;
    let resolved = resolve_configured(config, &registry);
    if resolved.is_empty() {
        tracing::warn!("no themes resolved; output will carry assets only");
    }

    let out = &config.output.dir;
    let themes_out = out.join("themes");
    fs::create_dir_all(&themes_out)
        .with_context(|| format!("creating output directory {}", themes_out.display()))?;

    let mut written = Vec::with_capacity(resolved.len());
    for theme in &resolved {
        let Some(css) = theme_css(theme) else {
            continue;
        };
        let path = themes_out.join(format!("{}.css", theme.id));
        fs::write(&path, css).with_context(|| format!("writing {}", path.display()))?;
        tracing::info!(theme = %theme.id, path = %path.display(), "wrote stylesheet");
        written.push(theme.id.clone());
    }

    if config.output.manifest {
        let manifest = manifest(&resolved, &registry.collection());
        let path = themes_out.join("manifest.json");
        let json = serde_json::to_string_pretty(&manifest).context("serializing manifest")?;
        fs::write(&path, json).with_context(|| format!("writing {}", path.display()))?;
        tracing::info!(path = %path.display(), "wrote manifest");
    }

    // Runtime assets are copied verbatim.
    fs::write(out.join(THEME_MANAGER_FILE), THEME_MANAGER_JS)
        .with_context(|| format!("writing {THEME_MANAGER_FILE}"))?;
    fs::write(out.join(THEME_INIT_FILE), THEME_INIT_JS)
        .with_context(|| format!("writing {THEME_INIT_FILE}"))?;

    if let Some(template) = &config.html.template {
        let html = fs::read_to_string(template)
            .with_context(|| format!("reading template {}", template.display()))?;
        if html.contains(INJECT_MARKER) {
            // The configured default theme's stylesheet starts enabled.
            let active = resolved
                .iter()
                .find(|theme| theme.color.id == config.themes.default_theme)
                .map(|theme| theme.id.as_str());
            let injected = inject_theme_assets(&html, &written, active);
            let file_name = template
                .file_name()
                .unwrap_or_else(|| OsStr::new("index.html"));
            let path = out.join(file_name);
            fs::write(&path, injected).with_context(|| format!("writing {}", path.display()))?;
            tracing::info!(path = %path.display(), "injected theme assets");
        } else {
            tracing::warn!(template = %template.display(), "template has no inject marker");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{HtmlConfig, OutputConfig, ThemesConfig};
    use std::path::PathBuf;

    fn config(out: PathBuf, template: Option<PathBuf>) -> ObienteConfig {
        ObienteConfig {
            themes: ThemesConfig {
                flair: vec!["glow".to_string()],
                ..ThemesConfig::default()
            },
            output: OutputConfig {
                dir: out,
                manifest: true,
            },
            html: HtmlConfig { template },
        }
    }

    #[test]
    fn build_writes_stylesheets_manifest_and_assets() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("dist");
        run_build(&config(out.clone(), None)).unwrap();

        let latte = out.join("themes/default-catppuccin-latte-glow.css");
        let css = fs::read_to_string(latte).unwrap();
        assert!(css.contains(":root[data-theme=\"default-catppuccin-latte-glow\"]"));
        assert!(css.contains("--oi-shadow-lg: 0 0 20px var(--oi-accent-primary);"));

        let manifest = fs::read_to_string(out.join("themes/manifest.json")).unwrap();
        let manifest: serde_json::Value = serde_json::from_str(&manifest).unwrap();
        assert_eq!(manifest["themes"]["resolved"].as_array().unwrap().len(), 2);
        assert_eq!(manifest["collections"]["families"][0], "catppuccin");

        assert!(out.join("obiente-theme-manager.js").exists());
        assert!(out.join("obiente-theme-init.js").exists());
    }

    #[test]
    fn unresolvable_color_skips_without_failing_the_batch() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("dist");
        let mut config = config(out.clone(), None);
        config.themes.colors = vec!["catppuccin-mocha".to_string(), "gone".to_string()];
        run_build(&config).unwrap();

        assert!(out.join("themes/default-catppuccin-mocha-glow.css").exists());
        assert!(!out.join("themes/default-gone-glow.css").exists());
    }

    #[test]
    fn template_marker_is_replaced() {
        let dir = tempfile::tempdir().unwrap();
        let template = dir.path().join("index.html");
        fs::write(
            &template,
            format!("<html><head>\n{INJECT_MARKER}\n</head></html>"),
        )
        .unwrap();

        let out = dir.path().join("dist");
        run_build(&config(out.clone(), Some(template))).unwrap();

        let html = fs::read_to_string(out.join("index.html")).unwrap();
        assert!(!html.contains(INJECT_MARKER));
        assert!(html.contains("data-theme-css=\"default-catppuccin-latte-glow\""));
        // Only the default theme's stylesheet starts enabled.
        assert!(html.contains("data-theme-css=\"default-catppuccin-mocha-glow\" disabled"));
        assert!(html.contains("obiente-theme-init.js"));
    }
}
