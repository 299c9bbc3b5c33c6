//! Typography settings.

/// An inclusive numeric range with an optional step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumericRange {
    pub min: f64,
    pub max: f64,
    /// Granularity values are snapped to, if any.
    pub step: Option<f64>,
}

impl NumericRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            step: None,
        }
    }

    pub const fn with_step(self, step: f64) -> Self {
        Self {
            step: Some(step),
            ..self
        }
    }

    /// Clamp `value` into the range and snap it to the step.
    ///
    /// Returns `None` for non-finite input.
    pub fn clamp(&self, value: f64) -> Option<f64> {
        if !value.is_finite() {
            return None;
        }
        let clamped = value.clamp(self.min, self.max);
        let snapped = match self.step {
            Some(step) => {
                let scale = 1.0 / step;
                ((clamped * scale).round() / scale).clamp(self.min, self.max)
            }
            None => clamped,
        };
        // Keep -0.0 out of generated code.
        Some(if snapped == 0.0 { 0.0 } else { snapped })
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Font size, line height and letter spacing of the preview text.
///
/// Deserialized values go through the same clamping as the setters; fields
/// that are missing or non-finite take their default.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", from = "RawTypography"))]
pub struct TypographyConfig {
    /// Font size in percent.
    pub font_size_pct: f64,
    /// Line height in percent.
    pub line_height_pct: f64,
    /// Letter spacing in pixels.
    pub letter_spacing_px: f64,
}

impl TypographyConfig {
    pub const FONT_SIZE_RANGE: NumericRange = NumericRange::new(50.0, 200.0);
    pub const LINE_HEIGHT_RANGE: NumericRange = NumericRange::new(90.0, 180.0);
    pub const LETTER_SPACING_RANGE: NumericRange = NumericRange::new(-3.0, 3.0).with_step(0.1);

    pub const DEFAULT: TypographyConfig = TypographyConfig {
        font_size_pct: 100.0,
        line_height_pct: 105.0,
        letter_spacing_px: -1.0,
    };

    /// Set the font size, clamped to [`Self::FONT_SIZE_RANGE`].
    pub fn set_font_size(&mut self, pct: f64) {
        if let Some(v) = Self::FONT_SIZE_RANGE.clamp(pct) {
            self.font_size_pct = v;
        }
    }

    /// Set the line height, clamped to [`Self::LINE_HEIGHT_RANGE`].
    pub fn set_line_height(&mut self, pct: f64) {
        if let Some(v) = Self::LINE_HEIGHT_RANGE.clamp(pct) {
            self.line_height_pct = v;
        }
    }

    /// Set the letter spacing, clamped and snapped to 0.1px.
    pub fn set_letter_spacing(&mut self, px: f64) {
        if let Some(v) = Self::LETTER_SPACING_RANGE.clamp(px) {
            self.letter_spacing_px = v;
        }
    }

    pub fn reset_font_size(&mut self) {
        self.font_size_pct = Self::DEFAULT.font_size_pct;
    }

    pub fn reset_line_height(&mut self) {
        self.line_height_pct = Self::DEFAULT.line_height_pct;
    }

    pub fn reset_letter_spacing(&mut self) {
        self.letter_spacing_px = Self::DEFAULT.letter_spacing_px;
    }

    /// Restore all three values at once.
    pub fn reset(&mut self) {
        *self = Self::DEFAULT;
    }
}

impl Default for TypographyConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Unvalidated wire form of [`TypographyConfig`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct RawTypography {
    font_size_pct: f64,
    line_height_pct: f64,
    letter_spacing_px: f64,
}

#[cfg(feature = "serde")]
impl Default for RawTypography {
    fn default() -> Self {
        let d = TypographyConfig::DEFAULT;
        Self {
            font_size_pct: d.font_size_pct,
            line_height_pct: d.line_height_pct,
            letter_spacing_px: d.letter_spacing_px,
        }
    }
}

#[cfg(feature = "serde")]
impl From<RawTypography> for TypographyConfig {
    fn from(raw: RawTypography) -> Self {
        let mut config = TypographyConfig::DEFAULT;
        config.set_font_size(raw.font_size_pct);
        config.set_line_height(raw.line_height_pct);
        config.set_letter_spacing(raw.letter_spacing_px);
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_font_size_clamps() {
        let mut t = TypographyConfig::default();
        t.set_font_size(400.0);
        assert_eq!(t.font_size_pct, 200.0);
        t.set_font_size(-50.0);
        assert_eq!(t.font_size_pct, 50.0);
        t.set_font_size(137.5);
        assert_eq!(t.font_size_pct, 137.5);
    }

    #[test]
    fn test_line_height_clamps() {
        let mut t = TypographyConfig::default();
        t.set_line_height(10.0);
        assert_eq!(t.line_height_pct, 90.0);
        t.set_line_height(1000.0);
        assert_eq!(t.line_height_pct, 180.0);
    }

    #[test]
    fn test_letter_spacing_snaps_to_step() {
        let mut t = TypographyConfig::default();
        t.set_letter_spacing(0.74);
        assert_eq!(t.letter_spacing_px, 0.7);
        t.set_letter_spacing(-0.04);
        assert_eq!(t.letter_spacing_px, 0.0);
        assert!(t.letter_spacing_px.is_sign_positive());
        t.set_letter_spacing(-9.0);
        assert_eq!(t.letter_spacing_px, -3.0);
    }

    #[test]
    fn test_nan_is_ignored() {
        let mut t = TypographyConfig::default();
        t.set_font_size(f64::NAN);
        t.set_line_height(f64::INFINITY);
        t.set_letter_spacing(f64::NEG_INFINITY);
        assert_eq!(t, TypographyConfig::DEFAULT);
    }

    #[test]
    fn test_individual_resets() {
        let mut t = TypographyConfig::default();
        t.set_font_size(150.0);
        t.set_line_height(150.0);
        t.reset_font_size();
        assert_eq!(t.font_size_pct, 100.0);
        assert_eq!(t.line_height_pct, 150.0);
        t.reset_line_height();
        t.set_letter_spacing(2.0);
        t.reset_letter_spacing();
        assert_eq!(t, TypographyConfig::DEFAULT);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_clamps() {
        let json = serde_json::json!({ "fontSizePct": 400, "lineHeightPct": 10, "letterSpacingPx": -50 });
        let t: TypographyConfig = serde_json::from_value(json).unwrap();
        assert_eq!((t.font_size_pct, t.line_height_pct, t.letter_spacing_px), (200.0, 90.0, -3.0));

        let t: TypographyConfig = serde_json::from_value(serde_json::json!({ "letterSpacingPx": 0.74 })).unwrap();
        assert_eq!(t.font_size_pct, 100.0);
        assert_eq!(t.line_height_pct, 105.0);
        assert_eq!(t.letter_spacing_px, 0.7);
    }

    proptest! {
        #[test]
        fn prop_setters_stay_in_range(size in -1e6f64..1e6, height in -1e6f64..1e6, spacing in -1e6f64..1e6) {
            let mut t = TypographyConfig::default();
            t.set_font_size(size);
            t.set_line_height(height);
            t.set_letter_spacing(spacing);
            prop_assert!(TypographyConfig::FONT_SIZE_RANGE.contains(t.font_size_pct));
            prop_assert!(TypographyConfig::LINE_HEIGHT_RANGE.contains(t.line_height_pct));
            prop_assert!(TypographyConfig::LETTER_SPACING_RANGE.contains(t.letter_spacing_px));
        }

        #[test]
        fn prop_reset_restores_defaults(size in any::<f64>(), height in any::<f64>(), spacing in any::<f64>()) {
            let mut t = TypographyConfig::default();
            t.set_font_size(size);
            t.set_line_height(height);
            t.set_letter_spacing(spacing);
            t.reset();
            prop_assert_eq!(t, TypographyConfig { font_size_pct: 100.0, line_height_pct: 105.0, letter_spacing_px: -1.0 });
        }
    }
}
