//! The read-only input of code generation.

use crate::color::ColorHex;
use crate::stack::PlatformStackId;
use crate::typography::TypographyConfig;

/// Everything code generation reads: the active stack, the font color and
/// the typography values.
///
/// Preview text and the non-selected presets are not part of it: two stores
/// that differ only in those produce the same output.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct GenerationSnapshot {
    /// Unknown ids deserialize as [`PlatformStackId::Apple`].
    #[cfg_attr(feature = "serde", serde(deserialize_with = "deserialize_stack_lenient"))]
    pub active_stack: PlatformStackId,
    pub font_color: ColorHex,
    #[cfg_attr(feature = "serde", serde(default))]
    pub typography: TypographyConfig,
}

impl GenerationSnapshot {
    pub fn new(
        active_stack: PlatformStackId,
        font_color: impl Into<ColorHex>,
        typography: TypographyConfig,
    ) -> Self {
        Self {
            active_stack,
            font_color: font_color.into(),
            typography,
        }
    }

    /// Hashable identity of this snapshot, for memoizing generated output.
    pub fn key(&self) -> SnapshotKey {
        SnapshotKey {
            active_stack: self.active_stack,
            font_color: self.font_color.clone(),
            font_size_bits: self.typography.font_size_pct.to_bits(),
            line_height_bits: self.typography.line_height_pct.to_bits(),
            letter_spacing_bits: self.typography.letter_spacing_px.to_bits(),
        }
    }
}

/// Cache key over `(stack, color, size, line height, spacing)`.
///
/// Floats are compared by bit pattern.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SnapshotKey {
    active_stack: PlatformStackId,
    font_color: ColorHex,
    font_size_bits: u64,
    line_height_bits: u64,
    letter_spacing_bits: u64,
}

#[cfg(feature = "serde")]
fn deserialize_stack_lenient<'de, D>(deserializer: D) -> Result<PlatformStackId, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let id = <String as serde::Deserialize>::deserialize(deserializer)?;
    Ok(PlatformStackId::resolve(&id))
}
