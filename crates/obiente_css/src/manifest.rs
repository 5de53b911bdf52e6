//! Theme manifest generation
//!
//! The manifest enumerates every theme the build produced plus the full
//! catalog by category, so pickers and loaders can present themes without
//! parsing CSS.

use chrono::Utc;
use obiente_theme::{BaseTheme, ColorTheme, FlairTheme, ResolvedTheme, ThemeCollection, Variant};
use serde::Serialize;

pub const MANIFEST_VERSION: &str = "1.0.0";

#[derive(Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ManifestEntryKind {
    Resolved,
    Base,
    Color,
    Flair,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestComponents {
    pub base: String,
    pub color: String,
    pub flair: Vec<String>,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestEntry {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub kind: ManifestEntryKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant: Option<Variant>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub components: Option<ManifestComponents>,
    pub css_file: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<ManifestMetadata>,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestThemes {
    pub resolved: Vec<ManifestEntry>,
    pub base: Vec<ManifestEntry>,
    pub color: Vec<ManifestEntry>,
    pub flair: Vec<ManifestEntry>,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestCollections {
    pub families: Vec<String>,
    pub variants: Vec<String>,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeManifest {
    pub version: String,
    pub generated: String,
    pub themes: ManifestThemes,
    pub collections: ManifestCollections,
}

fn resolved_entry(theme: &ResolvedTheme) -> ManifestEntry {
    ManifestEntry {
        id: theme.id.clone(),
        name: theme.name.clone(),
        description: theme.color.description.clone(),
        kind: ManifestEntryKind::Resolved,
        variant: Some(theme.color.variant),
        family: theme.color.family.clone(),
        components: Some(ManifestComponents {
            base: theme.base.id.clone(),
            color: theme.color.id.clone(),
            flair: theme.flair.iter().map(|flair| flair.id.clone()).collect(),
        }),
        css_file: format!("{}.css", theme.id),
        metadata: None,
    }
}

fn base_entry(theme: &BaseTheme) -> ManifestEntry {
    ManifestEntry {
        id: theme.id.clone(),
        name: theme.name.clone(),
        description: theme.description.clone(),
        kind: ManifestEntryKind::Base,
        variant: None,
        family: None,
        components: None,
        css_file: format!("base/{}.css", theme.id),
        metadata: None,
    }
}

fn color_entry(theme: &ColorTheme) -> ManifestEntry {
    ManifestEntry {
        id: theme.id.clone(),
        name: theme.name.clone(),
        description: theme.description.clone(),
        kind: ManifestEntryKind::Color,
        variant: Some(theme.variant),
        family: theme.family.clone(),
        components: None,
        css_file: format!("color/{}.css", theme.id),
        metadata: None,
    }
}

fn flair_entry(theme: &FlairTheme) -> ManifestEntry {
    ManifestEntry {
        id: theme.id.clone(),
        name: theme.name.clone(),
        description: theme.description.clone(),
        kind: ManifestEntryKind::Flair,
        variant: None,
        family: None,
        components: None,
        css_file: format!("flair/{}.css", theme.id),
        metadata: Some(ManifestMetadata {
            tags: theme
                .priority
                .map(|priority| vec![format!("priority-{priority}")]),
        }),
    }
}

/// Build the manifest for a batch of resolved themes and the catalog they
/// came from. `families` and `variants` deduplicate in first-seen order.
pub fn manifest(resolved: &[ResolvedTheme], collection: &ThemeCollection) -> ThemeManifest {
    let mut families: Vec<String> = Vec::new();
    let mut variants: Vec<String> = Vec::new();
    for theme in &collection.color {
        if let Some(family) = &theme.family {
            if !families.contains(family) {
                families.push(family.clone());
            }
        }
        let variant = theme.variant.as_str().to_string();
        if !variants.contains(&variant) {
            variants.push(variant);
        }
    }

    ThemeManifest {
        version: MANIFEST_VERSION.to_string(),
        generated: Utc::now().to_rfc3339(),
        themes: ManifestThemes {
            resolved: resolved.iter().map(resolved_entry).collect(),
            base: collection.base.iter().map(base_entry).collect(),
            color: collection.color.iter().map(color_entry).collect(),
            flair: collection.flair.iter().map(flair_entry).collect(),
        },
        collections: ManifestCollections { families, variants },
    }
}
