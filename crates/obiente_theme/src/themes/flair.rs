//! Built-in flair themes

use indexmap::IndexMap;

use crate::types::FlairTheme;

fn tokens(entries: &[(&str, &str)]) -> IndexMap<String, String> {
    entries
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}

/// The built-in flair overrides.
pub fn flair_themes() -> Vec<FlairTheme> {
    vec![
        FlairTheme {
            id: "glow".into(),
            name: "Glow".into(),
            description: Some("Soft accent glow around elevated surfaces".into()),
            priority: Some(5),
            tokens: tokens(&[
                ("oi-glow", "0 0 12px var(--oi-accent-primary)"),
                ("oi-shadow-lg", "0 0 20px var(--oi-accent-primary)"),
            ]),
        },
        FlairTheme {
            id: "glass".into(),
            name: "Glass".into(),
            description: Some("Translucent, blurred surfaces".into()),
            priority: Some(1),
            tokens: tokens(&[
                ("oi-blur", "12px"),
                ("oi-surface-opacity", "0.72"),
                ("oi-shadow-lg", "0 8px 32px rgba(0, 0, 0, 0.12)"),
            ]),
        },
    ]
}
