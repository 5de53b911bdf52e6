//! Built-in base themes

use crate::types::BaseTheme;

fn base_theme(
    id: &str,
    name: &str,
    description: &str,
    spacing: f64,
    sizing: f64,
    radius: f64,
    typography: f64,
    elevation: f64,
) -> BaseTheme {
    BaseTheme {
        id: id.into(),
        name: name.into(),
        description: Some(description.into()),
        spacing,
        sizing,
        radius,
        typography,
        elevation,
        custom: None,
    }
}

/// The built-in base theme scales.
pub fn base_themes() -> Vec<BaseTheme> {
    vec![
        base_theme(
            "default",
            "Default",
            "Standard scale for Obiente UI",
            1.0,
            1.0,
            1.0,
            1.0,
            1.0,
        ),
        base_theme(
            "compact",
            "Compact",
            "Reduced spacing and sizing, suitable for dense UIs",
            0.7,
            0.85,
            0.7,
            0.95,
            0.8,
        ),
        base_theme(
            "cozy",
            "Cozy",
            "Increased spacing and rounded corners for relaxed layouts",
            1.25,
            1.1,
            1.3,
            1.05,
            1.15,
        ),
        base_theme(
            "flat",
            "Flat",
            "Minimal elevation and sharp corners for a modern look",
            1.0,
            1.0,
            0.4,
            1.0,
            0.5,
        ),
    ]
}
