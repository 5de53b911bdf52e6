//! Theme registry
//!
//! Holds every registered theme definition, indexed by id across all three
//! kinds. Ids share a single namespace: a flair theme cannot reuse a color
//! theme's id, and nothing may use a reserved word.

use rustc_hash::FxHashMap;

use crate::error::ThemeError;
use crate::types::{BaseTheme, ColorTheme, FlairTheme, Theme, ThemeCollection, ThemeKind, Variant};

/// Ids that can never be registered; they collide with attribute values and
/// serialization sentinels consumers rely on.
pub const RESERVED_IDS: [&str; 13] = [
    "light",
    "dark",
    "system",
    "auto",
    "base",
    "color",
    "flair",
    "resolved",
    "none",
    "null",
    "undefined",
    "true",
    "false",
];

/// Catalog of theme definitions, usually populated once at startup.
///
/// The registry is an explicit value, not a process-wide singleton; hand it
/// to whatever owns your application context.
#[derive(Clone, Debug, Default)]
pub struct ThemeRegistry {
    themes: Vec<Theme>,
    index: FxHashMap<String, usize>,
}

impl ThemeRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry seeded with the built-in catalog.
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        for theme in crate::themes::builtin() {
            // The built-in catalog keeps its ids unique; a rejection here is
            // a catalog bug.
            if let Err(err) = registry.register(theme) {
                tracing::error!(%err, "built-in theme rejected");
            }
        }
        registry
    }

    /// Register a theme, returning its id.
    ///
    /// Fails with [`ThemeError::DuplicateId`] if the id is reserved or
    /// already taken by any previously registered theme of any kind.
    pub fn register(&mut self, theme: Theme) -> Result<String, ThemeError> {
        let id = theme.id().to_string();
        if RESERVED_IDS.contains(&id.as_str()) || self.index.contains_key(&id) {
            return Err(ThemeError::DuplicateId(id));
        }
        self.index.insert(id.clone(), self.themes.len());
        self.themes.push(theme);
        Ok(id)
    }

    /// Look up a theme by id, optionally requiring a specific kind.
    pub fn get_by_id(&self, id: &str, kind: Option<ThemeKind>) -> Option<&Theme> {
        let theme = self.index.get(id).map(|&slot| &self.themes[slot])?;
        match kind {
            Some(kind) if theme.kind() != kind => None,
            _ => Some(theme),
        }
    }

    /// Typed lookup of a base theme.
    pub fn base(&self, id: &str) -> Option<&BaseTheme> {
        match self.get_by_id(id, Some(ThemeKind::Base)) {
            Some(Theme::Base(theme)) => Some(theme),
            _ => None,
        }
    }

    /// Typed lookup of a color theme.
    pub fn color(&self, id: &str) -> Option<&ColorTheme> {
        match self.get_by_id(id, Some(ThemeKind::Color)) {
            Some(Theme::Color(theme)) => Some(theme),
            _ => None,
        }
    }

    /// Typed lookup of a flair theme.
    pub fn flair(&self, id: &str) -> Option<&FlairTheme> {
        match self.get_by_id(id, Some(ThemeKind::Flair)) {
            Some(Theme::Flair(theme)) => Some(theme),
            _ => None,
        }
    }

    /// All themes of one kind, in registration order.
    pub fn list_by_kind(&self, kind: ThemeKind) -> impl Iterator<Item = &Theme> {
        self.themes.iter().filter(move |theme| theme.kind() == kind)
    }

    /// Color themes tagged with the given family.
    pub fn list_by_family<'a>(&'a self, family: &'a str) -> impl Iterator<Item = &'a ColorTheme> {
        self.color_themes()
            .filter(move |theme| theme.family.as_deref() == Some(family))
    }

    /// Color themes with the given light/dark variant.
    pub fn list_by_variant(&self, variant: Variant) -> impl Iterator<Item = &ColorTheme> {
        self.color_themes()
            .filter(move |theme| theme.variant == variant)
    }

    fn color_themes(&self) -> impl Iterator<Item = &ColorTheme> {
        self.themes.iter().filter_map(|theme| match theme {
            Theme::Color(theme) => Some(theme),
            _ => None,
        })
    }

    /// Snapshot of the whole catalog split by kind.
    pub fn collection(&self) -> ThemeCollection {
        ThemeCollection::categorize(self.themes.iter().cloned())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Theme> {
        self.themes.iter()
    }

    pub fn len(&self) -> usize {
        self.themes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }
}
