//! Root-element attributes for a resolved theme

use indexmap::IndexMap;
use obiente_theme::ResolvedTheme;

/// Ordered attribute map for the root element. The `class` key carries
/// class names rather than an attribute value.
pub type HtmlProps = IndexMap<String, String>;

/// The attributes a document root carries for a resolved theme.
///
/// Servers render these into the `<html>` tag; the client session applies
/// the same set, so markup agrees before and after hydration.
pub fn html_props(resolved: &ResolvedTheme) -> HtmlProps {
    let mut props = HtmlProps::new();
    props.insert("data-base-theme".into(), resolved.base.id.clone());
    props.insert("data-color-theme".into(), resolved.color.id.clone());
    props.insert(
        "data-theme-variant".into(),
        resolved.color.variant.as_str().into(),
    );
    if resolved.color.variant.is_dark() {
        props.insert("class".into(), "dark".into());
    }
    if !resolved.flair.is_empty() {
        props.insert(
            "data-flair-themes".into(),
            resolved
                .flair
                .iter()
                .map(|flair| flair.id.as_str())
                .collect::<Vec<_>>()
                .join(","),
        );
    }

    // Legacy combined id, kept for consumers predating per-layer attributes.
    let mut legacy = format!("{}+{}", resolved.base.id, resolved.color.id);
    for flair in &resolved.flair {
        legacy.push('+');
        legacy.push_str(&flair.id);
    }
    props.insert("data-theme".into(), legacy);
    props
}
