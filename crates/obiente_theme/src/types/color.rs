//! Color themes: the semantic palette layer

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Light/dark variant of a color theme.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Light,
    Dark,
}

impl Variant {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// The opposite variant.
    pub fn toggle(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl Display for Variant {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Surface colors for component backgrounds.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurfaceColors {
    /// Default surface (cards, panels).
    pub base: String,
    /// Elevated surfaces (modals, popovers).
    pub raised: String,
    /// Overlay backgrounds (dropdowns, tooltips).
    pub overlay: String,
    /// Subtle surfaces (disabled states, separators).
    pub muted: String,
}

impl SurfaceColors {
    pub fn entries(&self) -> [(&'static str, &str); 4] {
        [
            ("base", &self.base),
            ("raised", &self.raised),
            ("overlay", &self.overlay),
            ("muted", &self.muted),
        ]
    }
}

/// Text colors for content states.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextColors {
    pub primary: String,
    pub secondary: String,
    pub tertiary: String,
    pub disabled: String,
}

impl TextColors {
    pub fn entries(&self) -> [(&'static str, &str); 4] {
        [
            ("primary", &self.primary),
            ("secondary", &self.secondary),
            ("tertiary", &self.tertiary),
            ("disabled", &self.disabled),
        ]
    }
}

/// Border colors.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BorderColors {
    /// Standard border color.
    pub default: String,
    /// Subtle borders (separators).
    pub muted: String,
    /// High-contrast borders (focus rings).
    pub strong: String,
}

impl BorderColors {
    pub fn entries(&self) -> [(&'static str, &str); 3] {
        [
            ("default", &self.default),
            ("muted", &self.muted),
            ("strong", &self.strong),
        ]
    }
}

/// Accent colors for semantic actions and statuses.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccentColors {
    pub primary: String,
    pub secondary: String,
    pub success: String,
    pub warning: String,
    pub danger: String,
    pub info: String,
}

impl AccentColors {
    pub fn entries(&self) -> [(&'static str, &str); 6] {
        [
            ("primary", &self.primary),
            ("secondary", &self.secondary),
            ("success", &self.success),
            ("warning", &self.warning),
            ("danger", &self.danger),
            ("info", &self.info),
        ]
    }
}

/// Colors for interactive component states.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractiveColors {
    pub hover: String,
    pub active: String,
    pub disabled: String,
    pub focus: String,
}

impl InteractiveColors {
    pub fn entries(&self) -> [(&'static str, &str); 4] {
        [
            ("hover", &self.hover),
            ("active", &self.active),
            ("disabled", &self.disabled),
            ("focus", &self.focus),
        ]
    }
}

/// The complete semantic palette of a color theme.
///
/// Every group is required; `extended` is free-form and additive only.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorPalette {
    /// Main app background.
    pub background: String,
    /// Primary content color on backgrounds and surfaces.
    pub foreground: String,
    pub surface: SurfaceColors,
    pub text: TextColors,
    pub border: BorderColors,
    pub accent: AccentColors,
    pub interactive: InteractiveColors,
    /// Extra palette entries, emitted as `--oi-extended-<key>`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extended: Option<IndexMap<String, String>>,
}

/// A color theme carries the palette plus variant/family metadata used for
/// dark-mode switching and theme grouping.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColorTheme {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub variant: Variant,
    /// Optional grouping tag, e.g. "catppuccin" or "nord".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
    pub colors: ColorPalette,
}
