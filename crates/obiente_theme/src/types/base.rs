//! Base themes: numeric multipliers for design primitives

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A base theme scales the design primitives through numeric multipliers.
///
/// Every multiplier defaults to `1.0` in the `default` built-in theme;
/// denser or roomier layouts ship smaller or larger factors. Base themes
/// are immutable once registered.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BaseTheme {
    /// Unique identifier, checked against the reserved-word set at
    /// registration.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Spacing multiplier (margins, padding, gaps).
    pub spacing: f64,
    /// Sizing multiplier (widths, heights).
    pub sizing: f64,
    /// Radius multiplier (border radii).
    pub radius: f64,
    /// Typography multiplier (font sizes).
    pub typography: f64,
    /// Elevation multiplier (z-index, shadow intensity).
    pub elevation: f64,

    /// Extra named multipliers, emitted as `--oi-<key>`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom: Option<IndexMap<String, f64>>,
}
