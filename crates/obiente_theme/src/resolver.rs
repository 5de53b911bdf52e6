//! Theme resolution
//!
//! Pure mapping from `(base id, color id, flair ids)` to a merged CSS
//! custom-property map. The merge order is a hard contract: base, then
//! color, then flair, with later layers winning on key collision. Within
//! the flair layer themes merge in ascending priority order, so the
//! highest priority writes last and wins.

use indexmap::IndexMap;

use crate::error::ThemeError;
use crate::registry::ThemeRegistry;
use crate::types::{BaseTheme, ColorTheme, FlairTheme, ThemeKind};

/// Ordered CSS-variable map; iteration order is emission order.
pub type VariableMap = IndexMap<String, String>;

/// The merged output of one base + one color + zero-or-more flair themes.
///
/// Derived data: never persist it, recompute from ids so it can't go stale.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedTheme {
    /// Synthetic id, `<base>-<color>[-<flair>...]`.
    pub id: String,
    /// Synthetic display name, `"<Base> + <Color>[ + <Flair>...]"`.
    pub name: String,
    pub base: BaseTheme,
    pub color: ColorTheme,
    /// The flair themes that resolved, in requested order.
    pub flair: Vec<FlairTheme>,
    pub css_variables: VariableMap,
}

/// CSS variables contributed by a base theme.
pub fn base_variables(base: &BaseTheme) -> VariableMap {
    let mut variables = VariableMap::new();
    variables.insert("--oi-spacing-base".into(), base.spacing.to_string());
    variables.insert("--oi-sizing-base".into(), base.sizing.to_string());
    variables.insert("--oi-radius-base".into(), base.radius.to_string());
    variables.insert("--oi-typography-base".into(), base.typography.to_string());
    variables.insert("--oi-elevation-base".into(), base.elevation.to_string());
    if let Some(custom) = &base.custom {
        for (key, value) in custom {
            variables.insert(format!("--oi-{key}"), value.to_string());
        }
    }
    variables
}

/// CSS variables contributed by a color theme, in palette field order.
pub fn color_variables(color: &ColorTheme) -> VariableMap {
    let palette = &color.colors;
    let mut variables = VariableMap::new();
    variables.insert("--oi-background".into(), palette.background.clone());
    variables.insert("--oi-foreground".into(), palette.foreground.clone());

    for (key, value) in palette.surface.entries() {
        variables.insert(format!("--oi-surface-{key}"), value.to_string());
    }
    for (key, value) in palette.text.entries() {
        variables.insert(format!("--oi-text-{key}"), value.to_string());
    }
    for (key, value) in palette.border.entries() {
        variables.insert(format!("--oi-border-{key}"), value.to_string());
    }
    for (key, value) in palette.accent.entries() {
        variables.insert(format!("--oi-accent-{key}"), value.to_string());
    }
    for (key, value) in palette.interactive.entries() {
        variables.insert(format!("--oi-interactive-{key}"), value.to_string());
    }
    if let Some(extended) = &palette.extended {
        for (key, value) in extended {
            variables.insert(format!("--oi-extended-{key}"), value.clone());
        }
    }
    variables
}

/// CSS variables contributed by a stack of flair themes.
///
/// Themes merge in ascending priority order (stable for equal priorities),
/// so on token collision the highest-priority theme wins. Token keys that
/// already carry the `oi-` prefix are not double-prefixed.
pub fn flair_variables(flair: &[FlairTheme]) -> VariableMap {
    let mut ordered: Vec<&FlairTheme> = flair.iter().collect();
    ordered.sort_by_key(|theme| theme.priority.unwrap_or(0));

    let mut variables = VariableMap::new();
    for theme in ordered {
        for (key, value) in &theme.tokens {
            let css_var = if key.starts_with("oi-") {
                format!("--{key}")
            } else {
                format!("--oi-{key}")
            };
            variables.insert(css_var, value.clone());
        }
    }
    variables
}

/// Resolve theme ids into a merged [`ResolvedTheme`].
///
/// A missing base or color id is an error; missing flair ids are logged and
/// dropped so a stale preference degrades instead of breaking theming.
pub fn resolve(
    registry: &ThemeRegistry,
    base_id: &str,
    color_id: &str,
    flair_ids: &[String],
) -> Result<ResolvedTheme, ThemeError> {
    let base = registry
        .base(base_id)
        .ok_or_else(|| ThemeError::UnresolvedTheme {
            kind: ThemeKind::Base,
            id: base_id.to_string(),
        })?
        .clone();
    let color = registry
        .color(color_id)
        .ok_or_else(|| ThemeError::UnresolvedTheme {
            kind: ThemeKind::Color,
            id: color_id.to_string(),
        })?
        .clone();

    let mut flair = Vec::with_capacity(flair_ids.len());
    for id in flair_ids {
        match registry.flair(id) {
            Some(theme) => flair.push(theme.clone()),
            None => tracing::warn!(id = %id, "flair theme not found, skipping"),
        }
    }

    // Fixed override order: base, then color, then flair. IndexMap keeps
    // the first insertion position on overwrite, matching stable emission
    // order for colliding keys.
    let mut css_variables = base_variables(&base);
    css_variables.extend(color_variables(&color));
    css_variables.extend(flair_variables(&flair));

    let mut id = format!("{}-{}", base.id, color.id);
    let mut name = format!("{} + {}", base.name, color.name);
    for theme in &flair {
        id.push('-');
        id.push_str(&theme.id);
        name.push_str(" + ");
        name.push_str(&theme.name);
    }

    Ok(ResolvedTheme {
        id,
        name,
        base,
        color,
        flair,
        css_variables,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Theme;
    use indexmap::IndexMap;

    fn base_theme() -> BaseTheme {
        BaseTheme {
            id: "dense".into(),
            name: "Dense".into(),
            description: None,
            spacing: 0.85,
            sizing: 1.0,
            radius: 0.5,
            typography: 1.0,
            elevation: 1.0,
            custom: Some(IndexMap::from([("gutter".to_string(), 2.0)])),
        }
    }

    fn flair_theme(id: &str, priority: Option<i32>, tokens: &[(&str, &str)]) -> FlairTheme {
        FlairTheme {
            id: id.into(),
            name: id.into(),
            description: None,
            priority,
            tokens: tokens
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    #[test]
    fn base_variables_render_minimal_decimals() {
        let variables = base_variables(&base_theme());
        assert_eq!(variables["--oi-spacing-base"], "0.85");
        assert_eq!(variables["--oi-sizing-base"], "1");
        assert_eq!(variables["--oi-radius-base"], "0.5");
        assert_eq!(variables["--oi-gutter"], "2");
    }

    #[test]
    fn flair_tokens_are_prefixed_once() {
        let flair = [flair_theme(
            "fx",
            None,
            &[("oi-shadow-lg", "none"), ("sparkle", "gold")],
        )];
        let variables = flair_variables(&flair);
        assert_eq!(variables["--oi-shadow-lg"], "none");
        assert_eq!(variables["--oi-sparkle"], "gold");
        assert!(!variables.contains_key("--oi-oi-shadow-lg"));
    }

    #[test]
    fn higher_priority_flair_wins_regardless_of_input_order() {
        let strong = flair_theme("strong", Some(5), &[("oi-glow", "red")]);
        let weak = flair_theme("weak", Some(1), &[("oi-glow", "blue")]);

        let forward = flair_variables(&[weak.clone(), strong.clone()]);
        let reversed = flair_variables(&[strong, weak]);
        assert_eq!(forward["--oi-glow"], "red");
        assert_eq!(reversed["--oi-glow"], "red");
    }

    #[test]
    fn equal_priority_flair_keeps_input_order() {
        let first = flair_theme("first", None, &[("oi-glow", "red")]);
        let second = flair_theme("second", None, &[("oi-glow", "blue")]);
        let variables = flair_variables(&[first, second]);
        assert_eq!(variables["--oi-glow"], "blue");
    }

    #[test]
    fn missing_flair_degrades_gracefully() {
        let mut registry = ThemeRegistry::new();
        registry.register(Theme::Base(base_theme())).unwrap();
        registry
            .register(Theme::Color(crate::themes::catppuccin_themes().remove(0)))
            .unwrap();

        let resolved = resolve(
            &registry,
            "dense",
            "catppuccin-latte",
            &["no-such-flair".to_string()],
        )
        .unwrap();
        assert!(resolved.flair.is_empty());
        assert_eq!(resolved.id, "dense-catppuccin-latte");
    }

    #[test]
    fn missing_color_is_an_error() {
        let mut registry = ThemeRegistry::new();
        registry.register(Theme::Base(base_theme())).unwrap();

        let err = resolve(&registry, "dense", "missing", &[]).unwrap_err();
        assert!(matches!(
            err,
            ThemeError::UnresolvedTheme {
                kind: ThemeKind::Color,
                ..
            }
        ));
    }
}
