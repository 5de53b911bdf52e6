//! Persisted theme preferences
//!
//! The one mutable, persisted entity in the system: the user's selected
//! base/color/flair ids. Resolved values are never stored; they are
//! recomputed from these ids so they cannot go stale.

use serde::{Deserialize, Serialize};

/// Key under which preferences are persisted, in both storage and cookie.
pub const STORAGE_KEY: &str = "oi-theme-prefs";

/// Fallback base theme id.
pub const DEFAULT_BASE_ID: &str = "default";

/// Fallback color theme id.
pub const DEFAULT_COLOR_ID: &str = "catppuccin-latte";

/// The user's theme selection.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemePreferences {
    pub base: Option<String>,
    pub color: Option<String>,
    #[serde(default)]
    pub flair: Vec<String>,
}

impl Default for ThemePreferences {
    fn default() -> Self {
        Self {
            base: Some(DEFAULT_BASE_ID.to_string()),
            color: Some(DEFAULT_COLOR_ID.to_string()),
            flair: Vec::new(),
        }
    }
}

impl ThemePreferences {
    /// Parse persisted preferences.
    ///
    /// Never fails: unparseable input falls back to the defaults, and
    /// individually malformed fields fall back on their own so one bad
    /// field does not discard the rest.
    pub fn parse(json: &str) -> Self {
        let value: serde_json::Value = match serde_json::from_str(json) {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!(%err, "malformed theme preferences, using defaults");
                return Self::default();
            }
        };
        let defaults = Self::default();

        let base = match value.get("base") {
            Some(serde_json::Value::String(id)) => Some(id.clone()),
            _ => defaults.base,
        };
        let color = match value.get("color") {
            Some(serde_json::Value::String(id)) => Some(id.clone()),
            _ => defaults.color,
        };
        let flair = match value.get("flair") {
            Some(serde_json::Value::Array(ids)) => ids
                .iter()
                .filter_map(|id| id.as_str().map(str::to_string))
                .collect(),
            _ => defaults.flair,
        };

        Self { base, color, flair }
    }

    /// Serialize for persistence.
    pub fn serialize(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|err| {
            tracing::warn!(%err, "failed to serialize theme preferences");
            String::from("{}")
        })
    }

    /// Add a flair id if not already active. Returns whether it was added.
    pub fn add_flair(&mut self, id: &str) -> bool {
        if self.flair.iter().any(|active| active == id) {
            return false;
        }
        self.flair.push(id.to_string());
        true
    }

    /// Remove a flair id. Returns whether it was active.
    pub fn remove_flair(&mut self, id: &str) -> bool {
        let before = self.flair.len();
        self.flair.retain(|active| active != id);
        self.flair.len() != before
    }

    /// Toggle a flair id on or off.
    pub fn toggle_flair(&mut self, id: &str) {
        if !self.remove_flair(id) {
            self.flair.push(id.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_preserves_preferences() {
        let mut preferences = ThemePreferences::default();
        preferences.color = Some("catppuccin-mocha".to_string());
        preferences.add_flair("glow");

        let parsed = ThemePreferences::parse(&preferences.serialize());
        assert_eq!(parsed, preferences);
    }

    #[test]
    fn garbage_falls_back_to_defaults() {
        assert_eq!(ThemePreferences::parse("not json"), ThemePreferences::default());
        assert_eq!(ThemePreferences::parse(""), ThemePreferences::default());
        assert_eq!(ThemePreferences::parse("[1, 2]"), ThemePreferences::default());
    }

    #[test]
    fn malformed_fields_fall_back_individually() {
        let parsed = ThemePreferences::parse(r#"{"base": 7, "color": "catppuccin-frappe", "flair": ["glow", 3]}"#);
        assert_eq!(parsed.base.as_deref(), Some(DEFAULT_BASE_ID));
        assert_eq!(parsed.color.as_deref(), Some("catppuccin-frappe"));
        assert_eq!(parsed.flair, ["glow"]);
    }

    #[test]
    fn flair_toggling_is_involutive() {
        let mut preferences = ThemePreferences::default();
        preferences.toggle_flair("glow");
        assert_eq!(preferences.flair, ["glow"]);
        preferences.toggle_flair("glow");
        assert!(preferences.flair.is_empty());

        assert!(preferences.add_flair("glass"));
        assert!(!preferences.add_flair("glass"));
        assert!(preferences.remove_flair("glass"));
        assert!(!preferences.remove_flair("glass"));
    }
}
