//! The theme sum type and collection

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

use super::{BaseTheme, ColorTheme, FlairTheme};

/// Discriminant of the three theme layers.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeKind {
    Base,
    Color,
    Flair,
}

impl ThemeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Base => "base",
            Self::Color => "color",
            Self::Flair => "flair",
        }
    }
}

impl Display for ThemeKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Any theme definition, tagged by its layer.
///
/// Serialized with a `type` tag (`base`/`color`/`flair`), which is also the
/// on-disk format for theme definition files.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Theme {
    Base(BaseTheme),
    Color(ColorTheme),
    Flair(FlairTheme),
}

impl Theme {
    pub fn id(&self) -> &str {
        match self {
            Self::Base(theme) => &theme.id,
            Self::Color(theme) => &theme.id,
            Self::Flair(theme) => &theme.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Base(theme) => &theme.name,
            Self::Color(theme) => &theme.name,
            Self::Flair(theme) => &theme.name,
        }
    }

    pub fn description(&self) -> Option<&str> {
        match self {
            Self::Base(theme) => theme.description.as_deref(),
            Self::Color(theme) => theme.description.as_deref(),
            Self::Flair(theme) => theme.description.as_deref(),
        }
    }

    pub fn kind(&self) -> ThemeKind {
        match self {
            Self::Base(_) => ThemeKind::Base,
            Self::Color(_) => ThemeKind::Color,
            Self::Flair(_) => ThemeKind::Flair,
        }
    }
}

/// A flat theme list split by kind, insertion order preserved per kind.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ThemeCollection {
    pub base: Vec<BaseTheme>,
    pub color: Vec<ColorTheme>,
    pub flair: Vec<FlairTheme>,
}

impl ThemeCollection {
    /// Split a flat list of themes by their `type` tag.
    pub fn categorize(themes: impl IntoIterator<Item = Theme>) -> Self {
        let mut collection = Self::default();
        for theme in themes {
            match theme {
                Theme::Base(theme) => collection.base.push(theme),
                Theme::Color(theme) => collection.color.push(theme),
                Theme::Flair(theme) => collection.flair.push(theme),
            }
        }
        collection
    }
}
