//! Catppuccin color themes
//!
//! Catppuccin is a community-driven pastel palette with four flavors:
//! Latte (light), Frappé, Macchiato, and Mocha (dark). Each flavor maps
//! onto the semantic palette the same way; only the hex values differ.

use indexmap::IndexMap;

use crate::types::{
    AccentColors, BorderColors, ColorPalette, ColorTheme, InteractiveColors, SurfaceColors,
    TextColors, Variant,
};

struct Flavor {
    id: &'static str,
    name: &'static str,
    variant: Variant,
    // Accent palette, upstream order
    rosewater: &'static str,
    flamingo: &'static str,
    pink: &'static str,
    mauve: &'static str,
    red: &'static str,
    maroon: &'static str,
    peach: &'static str,
    yellow: &'static str,
    green: &'static str,
    teal: &'static str,
    sky: &'static str,
    sapphire: &'static str,
    blue: &'static str,
    lavender: &'static str,
    // Neutrals
    text: &'static str,
    subtext1: &'static str,
    subtext0: &'static str,
    overlay1: &'static str,
    overlay0: &'static str,
    surface2: &'static str,
    surface1: &'static str,
    surface0: &'static str,
    base: &'static str,
    mantle: &'static str,
    crust: &'static str,
}

const LATTE: Flavor = Flavor {
    id: "catppuccin-latte",
    name: "Catppuccin Latte",
    variant: Variant::Light,
    rosewater: "#dc8a78",
    flamingo: "#dd7878",
    pink: "#ea76cb",
    mauve: "#8839ef",
    red: "#d20f39",
    maroon: "#e64553",
    peach: "#fe640b",
    yellow: "#df8e1d",
    green: "#40a02b",
    teal: "#179299",
    sky: "#04a5e5",
    sapphire: "#209fb5",
    blue: "#1e66f5",
    lavender: "#7287fd",
    text: "#4c4f69",
    subtext1: "#5c5f77",
    subtext0: "#6c6f85",
    overlay1: "#8c8fa1",
    overlay0: "#9ca0b0",
    surface2: "#acb0be",
    surface1: "#bcc0cc",
    surface0: "#ccd0da",
    base: "#eff1f5",
    mantle: "#e6e9ef",
    crust: "#dce0e8",
};

const FRAPPE: Flavor = Flavor {
    id: "catppuccin-frappe",
    name: "Catppuccin Frappe",
    variant: Variant::Dark,
    rosewater: "#f2d5cf",
    flamingo: "#eebebe",
    pink: "#f4b8e4",
    mauve: "#ca9ee6",
    red: "#e78284",
    maroon: "#ea999c",
    peach: "#ef9f76",
    yellow: "#e5c890",
    green: "#a6d189",
    teal: "#81c8be",
    sky: "#99d1db",
    sapphire: "#85c1dc",
    blue: "#8caaee",
    lavender: "#babbf1",
    text: "#c6d0f5",
    subtext1: "#b5bfe2",
    subtext0: "#a5adce",
    overlay1: "#838ba7",
    overlay0: "#737994",
    surface2: "#626880",
    surface1: "#51576d",
    surface0: "#414559",
    base: "#303446",
    mantle: "#292c3c",
    crust: "#232634",
};

const MACCHIATO: Flavor = Flavor {
    id: "catppuccin-macchiato",
    name: "Catppuccin Macchiato",
    variant: Variant::Dark,
    rosewater: "#f4dbd6",
    flamingo: "#f0c6c6",
    pink: "#f5bde6",
    mauve: "#c6a0f6",
    red: "#ed8796",
    maroon: "#ee99a0",
    peach: "#f5a97f",
    yellow: "#eed49f",
    green: "#a6da95",
    teal: "#8bd5ca",
    sky: "#91d7e3",
    sapphire: "#7dc4e4",
    blue: "#8aadf4",
    lavender: "#b7bdf8",
    text: "#cad3f5",
    subtext1: "#b8c0e0",
    subtext0: "#a5adcb",
    overlay1: "#8087a2",
    overlay0: "#6e738d",
    surface2: "#5b6078",
    surface1: "#494d64",
    surface0: "#363a4f",
    base: "#24273a",
    mantle: "#1e2030",
    crust: "#181926",
};

const MOCHA: Flavor = Flavor {
    id: "catppuccin-mocha",
    name: "Catppuccin Mocha",
    variant: Variant::Dark,
    rosewater: "#f5e0dc",
    flamingo: "#f2cdcd",
    pink: "#f5c2e7",
    mauve: "#cba6f7",
    red: "#f38ba8",
    maroon: "#eba0ac",
    peach: "#fab387",
    yellow: "#f9e2af",
    green: "#a6e3a1",
    teal: "#94e2d5",
    sky: "#89dceb",
    sapphire: "#74c7ec",
    blue: "#89b4fa",
    lavender: "#b4befe",
    text: "#cdd6f4",
    subtext1: "#bac2de",
    subtext0: "#a6adc8",
    overlay1: "#7f849c",
    overlay0: "#6c7086",
    surface2: "#585b70",
    surface1: "#45475a",
    surface0: "#313244",
    base: "#1e1e2e",
    mantle: "#181825",
    crust: "#11111b",
};

fn flavor_theme(flavor: &Flavor) -> ColorTheme {
    let extended: IndexMap<String, String> = [
        ("rosewater", flavor.rosewater),
        ("flamingo", flavor.flamingo),
        ("pink", flavor.pink),
        ("mauve", flavor.mauve),
        ("red", flavor.red),
        ("maroon", flavor.maroon),
        ("peach", flavor.peach),
        ("yellow", flavor.yellow),
        ("green", flavor.green),
        ("teal", flavor.teal),
        ("sky", flavor.sky),
        ("sapphire", flavor.sapphire),
        ("blue", flavor.blue),
        ("lavender", flavor.lavender),
    ]
    .into_iter()
    .map(|(key, value)| (key.to_string(), value.to_string()))
    .collect();

    ColorTheme {
        id: flavor.id.into(),
        name: flavor.name.into(),
        description: Some("Soothing pastel theme for the high-spirited!".into()),
        variant: flavor.variant,
        family: Some("catppuccin".into()),
        colors: ColorPalette {
            background: flavor.base.into(),
            foreground: flavor.text.into(),
            surface: SurfaceColors {
                base: flavor.base.into(),
                raised: flavor.mantle.into(),
                overlay: flavor.surface0.into(),
                muted: flavor.surface1.into(),
            },
            text: TextColors {
                primary: flavor.text.into(),
                secondary: flavor.subtext1.into(),
                tertiary: flavor.subtext0.into(),
                disabled: flavor.overlay0.into(),
            },
            border: BorderColors {
                default: flavor.overlay0.into(),
                muted: flavor.surface2.into(),
                strong: flavor.overlay1.into(),
            },
            accent: AccentColors {
                primary: flavor.blue.into(),
                secondary: flavor.mauve.into(),
                success: flavor.green.into(),
                warning: flavor.yellow.into(),
                danger: flavor.red.into(),
                info: flavor.sky.into(),
            },
            interactive: InteractiveColors {
                hover: flavor.crust.into(),
                active: flavor.surface2.into(),
                disabled: flavor.overlay0.into(),
                focus: flavor.blue.into(),
            },
            extended: Some(extended),
        },
    }
}

/// All four Catppuccin flavors, light first.
pub fn catppuccin_themes() -> Vec<ColorTheme> {
    [&LATTE, &FRAPPE, &MACCHIATO, &MOCHA]
        .into_iter()
        .map(flavor_theme)
        .collect()
}
