//! Styling theme for the site's utility-CSS build.
//!
//! The theme is static data: the source globs the CSS build scans for
//! class names, the font-family tokens, and the brand colours layered on
//! top of the default palette. It is emitted as the JSON shape the build
//! tool's config expects, or loaded from a TOML override file.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::error::{Error, Result};

/// A named font-family token and its CSS font stack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontFamily {
    pub name: String,
    pub stack: String,
}

/// A named colour constant, as written in the theme (`#rrggbb`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedColor {
    pub name: String,
    pub value: String,
}

/// An sRGB colour parsed from `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl HexColor {
    /// Parse a `#rrggbb` string (case-insensitive).
    pub fn parse(value: &str) -> Option<Self> {
        let hex = value.strip_prefix('#')?;
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some(Self {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
        })
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// The site's styling theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    /// File globs scanned for class names.
    #[serde(default)]
    pub content: Vec<String>,

    #[serde(default)]
    pub fonts: Vec<FontFamily>,

    /// Colours added to the default palette.
    #[serde(default)]
    pub colors: Vec<NamedColor>,

    #[serde(default)]
    pub plugins: Vec<String>,
}

impl Default for Theme {
    fn default() -> Self {
        Self::summit()
    }
}

impl Theme {
    /// The built-in Summit theme.
    #[must_use]
    pub fn summit() -> Self {
        let font = |name: &str, stack: &str| FontFamily {
            name: name.to_string(),
            stack: stack.to_string(),
        };
        let color = |name: &str, value: &str| NamedColor {
            name: name.to_string(),
            value: value.to_string(),
        };

        Self {
            content: vec![
                "./app/**/*.{js,ts,vue}".to_string(),
                "./slices/**/*.{js,ts,vue}".to_string(),
            ],
            fonts: vec![
                font(
                    "sans",
                    "Inter, ui-sans-serif, system-ui, -apple-system, BlinkMacSystemFont, \
                     \"Segoe UI\", Roboto, \"Helvetica Neue\", Arial, \"Noto Sans\", sans-serif, \
                     \"Apple Color Emoji\", \"Segoe UI Emoji\", \"Segoe UI Symbol\", \"Noto Color Emoji\"",
                ),
                font(
                    "barlow-condensed",
                    "\"Barlow Condensed\", ui-sans-serif, system-ui, sans-serif",
                ),
                font("barlow", "Barlow, ui-sans-serif, system-ui, sans-serif"),
            ],
            colors: vec![
                color("summit-green", "#18392b"),
                color("summit-cream", "#f0e2d0"),
                color("summit-gold", "#e5ccad"),
            ],
            plugins: vec!["@tailwindcss/aspect-ratio".to_string()],
        }
    }

    /// Load a theme from TOML and validate it.
    pub fn from_toml_str(input: &str) -> Result<Self> {
        let theme: Self = toml::from_str(input)?;
        theme.validate()?;
        Ok(theme)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Check every colour is `#rrggbb` and every token name is non-empty.
    pub fn validate(&self) -> Result<()> {
        for color in &self.colors {
            if color.name.is_empty() || HexColor::parse(&color.value).is_none() {
                return Err(Error::InvalidColor {
                    name: color.name.clone(),
                    value: color.value.clone(),
                });
            }
        }
        if let Some(font) = self.fonts.iter().find(|f| f.name.is_empty()) {
            return Err(Error::InvalidData(format!(
                "font family with empty name: {}",
                font.stack
            )));
        }
        Ok(())
    }

    pub fn color(&self, name: &str) -> Option<HexColor> {
        self.colors
            .iter()
            .find(|c| c.name == name)
            .and_then(|c| HexColor::parse(&c.value))
    }

    /// Render the theme in the CSS build tool's config shape.
    pub fn to_config_json(&self) -> Value {
        let font_family: Map<String, Value> = self
            .fonts
            .iter()
            .map(|f| (f.name.clone(), Value::String(f.stack.clone())))
            .collect();
        let colors: Map<String, Value> = self
            .colors
            .iter()
            .map(|c| (c.name.clone(), Value::String(c.value.clone())))
            .collect();

        json!({
            "content": self.content,
            "theme": {
                "fontFamily": font_family,
                "extend": { "colors": colors },
            },
            "plugins": self.plugins,
        })
    }
}
