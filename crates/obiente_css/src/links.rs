//! Link tag and HTML injection helpers

use crate::assets::THEME_INIT_FILE;

/// Marker comment replaced by [`inject_theme_assets`].
pub const INJECT_MARKER: &str = "<!-- obiente-theme-inject -->";

/// `<link rel="preload">` tags for the given theme stylesheets.
pub fn preload_links(ids: &[String]) -> String {
    ids.iter()
        .map(|id| format!("<link rel=\"preload\" href=\"/themes/{id}.css\" as=\"style\">"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// `<link rel="stylesheet">` tags for the given theme stylesheets.
///
/// Every non-active stylesheet is marked `disabled` so only one theme's
/// rules apply without an extra class toggle on the root element.
pub fn stylesheet_links(ids: &[String], active: Option<&str>) -> String {
    ids.iter()
        .map(|id| {
            let disabled = match active {
                Some(active) if active != id => " disabled",
                _ => "",
            };
            format!(
                "<link rel=\"stylesheet\" href=\"/themes/{id}.css\" data-theme-css=\"{id}\"{disabled}>"
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Replace the [`INJECT_MARKER`] comment with stylesheet links and the
/// init script tag. When `active` is given, every other stylesheet starts
/// disabled so the first paint is themed before any script runs.
pub fn inject_theme_assets(html: &str, ids: &[String], active: Option<&str>) -> String {
    let links = stylesheet_links(ids, active);
    let script = format!("<script src=\"/{THEME_INIT_FILE}\"></script>");
    html.replace(INJECT_MARKER, &format!("{links}\n{script}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids() -> Vec<String> {
        vec![
            "default-catppuccin-latte".to_string(),
            "default-catppuccin-mocha".to_string(),
        ]
    }

    #[test]
    fn preload_links_cover_every_theme() {
        let links = preload_links(&ids());
        assert_eq!(links.lines().count(), 2);
        assert!(links.contains("href=\"/themes/default-catppuccin-latte.css\" as=\"style\""));
    }

    #[test]
    fn non_active_stylesheets_are_disabled() {
        let links = stylesheet_links(&ids(), Some("default-catppuccin-latte"));
        let lines: Vec<&str> = links.lines().collect();
        assert!(!lines[0].contains("disabled"));
        assert!(lines[1].ends_with(" disabled>"));
    }

    #[test]
    fn injection_replaces_the_marker() {
        let html = format!("<head>\n{INJECT_MARKER}\n</head>");
        let injected = inject_theme_assets(&html, &ids(), Some("default-catppuccin-latte"));
        assert!(!injected.contains(INJECT_MARKER));
        assert!(injected.contains("data-theme-css=\"default-catppuccin-mocha\" disabled"));
        assert!(injected.contains("<script src=\"/obiente-theme-init.js\"></script>"));
    }
}
