//! Stylesheet text generation

use chrono::Utc;
use obiente_theme::{ResolvedTheme, VariableMap};

/// Render one selector-scoped declaration block, one variable per line.
pub fn variable_block(variables: &VariableMap, selector: &str) -> String {
    let mut css = String::with_capacity(selector.len() + variables.len() * 32);
    css.push_str(selector);
    css.push_str(" {\n");
    for (key, value) in variables {
        css.push_str("  ");
        css.push_str(key);
        css.push_str(": ");
        css.push_str(value);
        css.push_str(";\n");
    }
    css.push('}');
    css
}

/// Render a resolved theme as CSS.
///
/// The same variable set is emitted twice, under an attribute selector and
/// a class selector, so a theme can be activated either way. Returns `None`
/// (with a warning) for a theme with no variables; the caller skips it.
pub fn theme_css(resolved: &ResolvedTheme) -> Option<String> {
    if resolved.css_variables.is_empty() {
        tracing::warn!(id = %resolved.id, "resolved theme has no CSS variables, skipping");
        return None;
    }

    let attribute_block = variable_block(
        &resolved.css_variables,
        &format!(":root[data-theme=\"{}\"]", resolved.id),
    );
    let class_block = variable_block(&resolved.css_variables, &format!(".theme-{}", resolved.id));

    Some(format!(
        "/* Theme: {} */\n{attribute_block}\n\n{class_block}",
        resolved.name
    ))
}

/// Concatenate per-theme blocks under a generation header.
///
/// Output is deterministic for a given theme list except for the timestamp.
pub fn bundle_css(themes: &[ResolvedTheme]) -> String {
    let names: Vec<&str> = themes.iter().map(|theme| theme.name.as_str()).collect();
    let header = format!(
        "/*!\n * Obiente UI Themes\n * Generated at: {}\n * Themes: {}\n */",
        Utc::now().to_rfc3339(),
        names.join(", "),
    );

    let blocks: Vec<String> = themes.iter().filter_map(theme_css).collect();
    format!("{header}\n\n{}", blocks.join("\n\n"))
}
