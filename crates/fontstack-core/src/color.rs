//! Color presets for dark and light mode.

use std::borrow::Cow;
use std::fmt;

use crate::errors::InvalidColorError;

/// A CSS hex color such as `#111827`.
///
/// Values are passed through to generated code verbatim. The `From`
/// conversions trust their input; deserialization goes through
/// [`ColorHex::parse`] so an untrusted value cannot close the declaration
/// it is written into.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String"))]
pub struct ColorHex(Cow<'static, str>);

impl ColorHex {
    pub const fn from_static(hex: &'static str) -> Self {
        Self(Cow::Borrowed(hex))
    }

    /// Accept a color value that fits inside a single CSS declaration.
    pub fn parse(value: impl Into<String>) -> Result<Self, InvalidColorError> {
        let value = value.into();
        let breaks_out = |c: char| c.is_control() || matches!(c, ';' | '{' | '}' | '\\' | '\'' | '"');
        if value.trim().is_empty() || value.contains(breaks_out) {
            return Err(InvalidColorError(value));
        }
        Ok(Self(Cow::Owned(value)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ColorHex {
    type Error = InvalidColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<&str> for ColorHex {
    fn from(s: &str) -> Self {
        ColorHex(Cow::Owned(s.to_string()))
    }
}

impl From<String> for ColorHex {
    fn from(s: String) -> Self {
        ColorHex(Cow::Owned(s))
    }
}

impl fmt::Display for ColorHex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A named bundle of the five color roles.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColorPreset {
    pub name: Cow<'static, str>,
    pub bg: ColorHex,
    pub border: ColorHex,
    pub text: ColorHex,
    pub accent: ColorHex,
    pub muted: ColorHex,
}

impl ColorPreset {
    const fn new(
        name: &'static str,
        bg: &'static str,
        border: &'static str,
        text: &'static str,
        accent: &'static str,
        muted: &'static str,
    ) -> Self {
        Self {
            name: Cow::Borrowed(name),
            bg: ColorHex::from_static(bg),
            border: ColorHex::from_static(border),
            text: ColorHex::from_static(text),
            accent: ColorHex::from_static(accent),
            muted: ColorHex::from_static(muted),
        }
    }
}

/// Dark or light appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ColorMode {
    #[default]
    Dark,
    Light,
}

impl ColorMode {
    /// The preset table for this mode.
    pub fn presets(self) -> &'static [ColorPreset] {
        match self {
            Self::Dark => &DARK_PRESETS,
            Self::Light => &LIGHT_PRESETS,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dark => write!(f, "dark"),
            Self::Light => write!(f, "light"),
        }
    }
}

/// Number of presets in each mode's table.
pub const PRESET_COUNT: usize = 5;

/// Dark-mode presets. Names line up index for index with [`LIGHT_PRESETS`].
pub static DARK_PRESETS: [ColorPreset; PRESET_COUNT] = [
    ColorPreset::new("Default", "#121318", "#1b1d24", "#ffffff", "#2dd4bf", "#9aa1ad"),
    ColorPreset::new("Purple", "#1a1625", "#2d2438", "#ffffff", "#a855f7", "#a78bfa"),
    ColorPreset::new("Blue", "#0f172a", "#1e293b", "#ffffff", "#3b82f6", "#64748b"),
    ColorPreset::new("Green", "#0f1419", "#1f2937", "#ffffff", "#10b981", "#6ee7b7"),
    ColorPreset::new("Orange", "#1c1917", "#292524", "#ffffff", "#f97316", "#fdba74"),
];

/// Light-mode presets.
pub static LIGHT_PRESETS: [ColorPreset; PRESET_COUNT] = [
    ColorPreset::new("Default", "#ffffff", "#e5e7eb", "#111827", "#0d9488", "#6b7280"),
    ColorPreset::new("Purple", "#faf5ff", "#e9d5ff", "#581c87", "#7c3aed", "#8b5cf6"),
    ColorPreset::new("Blue", "#f8fafc", "#e2e8f0", "#0f172a", "#2563eb", "#64748b"),
    ColorPreset::new("Green", "#f0fdf4", "#dcfce7", "#14532d", "#059669", "#16a34a"),
    ColorPreset::new("Orange", "#fff7ed", "#fed7aa", "#9a3412", "#ea580c", "#f97316"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_match_across_modes() {
        let dark: Vec<&str> = DARK_PRESETS.iter().map(|p| &*p.name).collect();
        let light: Vec<&str> = LIGHT_PRESETS.iter().map(|p| &*p.name).collect();
        assert_eq!(dark, ["Default", "Purple", "Blue", "Green", "Orange"]);
        assert_eq!(dark, light);
    }

    #[test]
    fn test_mode_tables() {
        assert_eq!(ColorMode::Dark.presets()[0].bg.as_str(), "#121318");
        assert_eq!(ColorMode::Light.presets()[0].text.as_str(), "#111827");
        assert_eq!(ColorMode::Dark.toggled(), ColorMode::Light);
        assert_eq!(ColorMode::Light.toggled(), ColorMode::Dark);
    }

    #[test]
    fn test_color_hex_parse() {
        assert_eq!(ColorHex::parse("#111827").unwrap().as_str(), "#111827");
        assert_eq!(ColorHex::parse("rgb(1, 2, 3)").unwrap().as_str(), "rgb(1, 2, 3)");
        assert!(ColorHex::parse("red;}\n.x{color:blue").is_err());
        assert!(ColorHex::parse("#fff'").is_err());
        assert!(ColorHex::parse("  ").is_err());
        assert_eq!(
            ColorHex::try_from("a{b".to_string()),
            Err(InvalidColorError("a{b".to_string()))
        );
    }

    #[test]
    fn test_color_hex_display() {
        let owned = ColorHex::from("#abcdef");
        assert_eq!(owned.to_string(), "#abcdef");
        assert_eq!(owned, ColorHex::from_static("#abcdef"));
    }
}
