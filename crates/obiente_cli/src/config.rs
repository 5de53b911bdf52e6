//! Obiente configuration file handling

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Top-level build configuration (obiente.toml)
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ObienteConfig {
    #[serde(default)]
    pub themes: ThemesConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub html: HtmlConfig,
}

/// Which themes the build resolves and emits
#[derive(Debug, Deserialize, Serialize)]
pub struct ThemesConfig {
    /// Base theme every emitted theme is resolved against
    #[serde(default = "default_base")]
    pub base: String,
    /// Color themes to emit, one stylesheet each
    #[serde(default = "default_colors")]
    pub colors: Vec<String>,
    /// Flair themes stacked onto every emitted theme
    #[serde(default)]
    pub flair: Vec<String>,
    /// Theme preselected in generated markup
    #[serde(rename = "default", default = "default_color")]
    pub default_theme: String,
    /// Directory of extra theme definitions (one TOML file per theme)
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

fn default_base() -> String {
    "default".to_string()
}

fn default_color() -> String {
    "catppuccin-latte".to_string()
}

fn default_colors() -> Vec<String> {
    vec![default_color(), "catppuccin-mocha".to_string()]
}

impl Default for ThemesConfig {
    fn default() -> Self {
        Self {
            base: default_base(),
            colors: default_colors(),
            flair: Vec::new(),
            default_theme: default_color(),
            dir: None,
        }
    }
}

/// Output configuration
#[derive(Debug, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Output directory; stylesheets land under `<dir>/themes/`
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,
    /// Emit `themes/manifest.json`
    #[serde(default = "default_true")]
    pub manifest: bool,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("dist")
}

fn default_true() -> bool {
    true
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
            manifest: true,
        }
    }
}

/// HTML template injection
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct HtmlConfig {
    /// Template whose inject marker is replaced with theme links and the
    /// init script; the result is written next to the other output
    #[serde(default)]
    pub template: Option<PathBuf>,
}

impl ObienteConfig {
    /// Load a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        toml::from_str(&raw).with_context(|| format!("parsing config {}", path.display()))
    }

    /// Load a config file, or defaults when it does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }
}
