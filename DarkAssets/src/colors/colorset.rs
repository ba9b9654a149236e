//! `.colorset` descriptor model

use serde::{Deserialize, Serialize};

use super::hex::Rgb;

/// Alpha written for every variant
pub const OPAQUE_ALPHA: &str = "1.000";

/// `Contents.json` of a `.colorset` directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorSetContents {
    pub info: CatalogInfo,
    pub colors: Vec<ColorVariant>,
}

/// The `info` block shared by catalog descriptors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogInfo {
    pub version: u32,
    pub author: String,
}

impl CatalogInfo {
    #[must_use]
    pub fn new(author: impl Into<String>) -> Self {
        Self {
            version: 1,
            author: author.into(),
        }
    }
}

/// Value of the `luminosity` appearance axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Luminosity {
    Light,
    Dark,
}

impl Luminosity {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

/// `{ "appearance": ..., "value": ... }`
///
/// Kept as strings so compiled descriptors with other axes still load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appearance {
    pub appearance: String,
    pub value: String,
}

impl Appearance {
    #[must_use]
    pub fn luminosity(value: Luminosity) -> Self {
        Self {
            appearance: "luminosity".to_string(),
            value: value.as_str().to_string(),
        }
    }

    #[must_use]
    pub fn is_luminosity(&self, value: Luminosity) -> bool {
        self.appearance == "luminosity" && self.value == value.as_str()
    }
}

/// One entry of the `colors` array
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorVariant {
    pub idiom: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub appearances: Option<Vec<Appearance>>,
    pub color: ColorValue,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorValue {
    #[serde(rename = "color-space")]
    pub color_space: String,
    pub components: Components,
}

/// Channel values as decimal strings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Components {
    pub red: String,
    pub green: String,
    pub blue: String,
    pub alpha: String,
}

impl From<Rgb> for Components {
    fn from(rgb: Rgb) -> Self {
        Self {
            red: rgb.r.to_string(),
            green: rgb.g.to_string(),
            blue: rgb.b.to_string(),
            alpha: OPAQUE_ALPHA.to_string(),
        }
    }
}

impl ColorVariant {
    fn new(rgb: Rgb, appearance: Option<Luminosity>) -> Self {
        Self {
            idiom: "universal".to_string(),
            appearances: appearance.map(|value| vec![Appearance::luminosity(value)]),
            color: ColorValue {
                color_space: "srgb".to_string(),
                components: rgb.into(),
            },
        }
    }
}

/// Resolved values of one color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdaptiveColor {
    pub default: Rgb,
    pub light: Rgb,
    pub dark: Rgb,
}

impl ColorSetContents {
    /// Descriptor with variants in the order default, light, dark
    #[must_use]
    pub fn new(color: AdaptiveColor, author: &str) -> Self {
        Self {
            info: CatalogInfo::new(author),
            colors: vec![
                ColorVariant::new(color.default, None),
                ColorVariant::new(color.light, Some(Luminosity::Light)),
                ColorVariant::new(color.dark, Some(Luminosity::Dark)),
            ],
        }
    }
}
