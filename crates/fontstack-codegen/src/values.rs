//! The style values every generator renders.

use convert_case::{Case, Casing};
use fontstack_core::GenerationSnapshot;

/// A typography property shared by all targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleProperty {
    FontFamily,
    Color,
    FontSize,
    LineHeight,
    LetterSpacing,
}

impl StyleProperty {
    /// Declaration order used by every target.
    pub const ALL: [StyleProperty; 5] = [
        StyleProperty::FontFamily,
        StyleProperty::Color,
        StyleProperty::FontSize,
        StyleProperty::LineHeight,
        StyleProperty::LetterSpacing,
    ];

    /// Property name as a JavaScript style key (`fontFamily`).
    pub const fn js_name(self) -> &'static str {
        match self {
            Self::FontFamily => "fontFamily",
            Self::Color => "color",
            Self::FontSize => "fontSize",
            Self::LineHeight => "lineHeight",
            Self::LetterSpacing => "letterSpacing",
        }
    }

    /// Property name in CSS (`font-family`).
    pub fn css_name(self) -> String {
        self.js_name().to_case(Case::Kebab)
    }

    /// Name of the design token holding this value, used for CSS custom
    /// properties and Sass variables.
    pub const fn token_name(self) -> &'static str {
        match self {
            Self::FontFamily => "font-family-system",
            Self::Color => "font-color",
            Self::FontSize => "font-size",
            Self::LineHeight => "line-height",
            Self::LetterSpacing => "letter-spacing",
        }
    }
}

/// Rendered values of one snapshot: the same five strings go into every
/// target, only the surrounding syntax differs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleValues {
    pub font_family: &'static str,
    pub color: String,
    pub font_size: String,
    pub line_height: String,
    pub letter_spacing: String,
}

impl StyleValues {
    pub fn from_snapshot(snapshot: &GenerationSnapshot) -> Self {
        let typography = &snapshot.typography;
        Self {
            font_family: snapshot.active_stack.definition().font_family_css,
            color: snapshot.font_color.to_string(),
            font_size: format!("{}%", format_number(typography.font_size_pct)),
            line_height: format!("{}%", format_number(typography.line_height_pct)),
            letter_spacing: format!("{}px", format_number(typography.letter_spacing_px)),
        }
    }

    pub fn get(&self, property: StyleProperty) -> &str {
        match property {
            StyleProperty::FontFamily => self.font_family,
            StyleProperty::Color => &self.color,
            StyleProperty::FontSize => &self.font_size,
            StyleProperty::LineHeight => &self.line_height,
            StyleProperty::LetterSpacing => &self.letter_spacing,
        }
    }

    /// `(property, value)` pairs in declaration order.
    pub fn entries(&self) -> impl Iterator<Item = (StyleProperty, &str)> {
        StyleProperty::ALL.into_iter().map(move |p| (p, self.get(p)))
    }

    /// The font-family alternatives with their double quotes removed, for
    /// targets that take the family as a list.
    pub fn font_family_list(&self) -> Vec<&'static str> {
        self.font_family
            .split(',')
            .map(|name| name.trim().trim_matches('"'))
            .filter(|name| !name.is_empty())
            .collect()
    }
}

/// Format a number the way the browser prints it: no trailing `.0`, no
/// negative zero.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else {
        value.to_string()
    }
}
