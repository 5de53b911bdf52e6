//! Flair themes: stackable CSS-variable overrides

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A flair theme is an open-ended set of CSS-variable overrides (shadows,
/// blurs, glows, animation tweaks) meant to be stacked on top of a resolved
/// base + color pair.
///
/// When two active flair themes define the same token, the one with the
/// higher `priority` wins; equal priorities keep their activation order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlairTheme {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Stacking priority; unset counts as 0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
    /// Token keys use the `oi-` prefix (`oi-shadow-lg`, `oi-blur`); keys
    /// without it are prefixed on resolution, never doubled.
    pub tokens: IndexMap<String, String>,
}
