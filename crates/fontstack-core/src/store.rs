//! Session state for one FontStack Studio session.

use crate::color::{ColorMode, ColorPreset};
use crate::errors::{StoreError, StoreResult};
use crate::snapshot::GenerationSnapshot;
use crate::stack::PlatformStackId;
use crate::text::{TextContent, TextSlot};
use crate::typography::TypographyConfig;

/// Holds the current selection: platform stack, color mode and preset
/// indices, typography values and preview text.
///
/// All state is created from fixed defaults and changed one field at a time
/// through the setters below. Nothing is persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigurationStore {
    active_stack: PlatformStackId,
    color_mode: ColorMode,
    color_index: usize,
    font_color_index: usize,
    typography: TypographyConfig,
    text: TextContent,
}

impl ConfigurationStore {
    /// Create a store holding the session defaults.
    pub fn new() -> Self {
        Self {
            active_stack: PlatformStackId::default(),
            color_mode: ColorMode::default(),
            color_index: 0,
            font_color_index: 0,
            typography: TypographyConfig::default(),
            text: TextContent::default(),
        }
    }

    // Platform stack

    pub fn active_stack(&self) -> PlatformStackId {
        self.active_stack
    }

    pub fn set_active_stack(&mut self, id: PlatformStackId) {
        self.active_stack = id;
    }

    /// Select a stack by string id. Unknown ids are rejected and leave the
    /// current selection in place.
    pub fn set_active_stack_id(&mut self, id: &str) -> StoreResult<()> {
        let stack = id.parse::<PlatformStackId>().map_err(|err| {
            tracing::debug!(%err, "rejected stack selection");
            StoreError::UnknownStack(err.id)
        })?;
        self.active_stack = stack;
        Ok(())
    }

    // Colors

    pub fn color_mode(&self) -> ColorMode {
        self.color_mode
    }

    pub fn is_dark_mode(&self) -> bool {
        self.color_mode == ColorMode::Dark
    }

    /// Switch dark/light mode. Stored preset indices are kept as they are, so
    /// the same preset name stays selected.
    pub fn set_color_mode(&mut self, mode: ColorMode) {
        self.color_mode = mode;
    }

    pub fn toggle_color_mode(&mut self) {
        self.color_mode = self.color_mode.toggled();
    }

    /// Presets of the active mode.
    pub fn presets(&self) -> &'static [ColorPreset] {
        self.color_mode.presets()
    }

    pub fn color_index(&self) -> usize {
        self.color_index
    }

    pub fn font_color_index(&self) -> usize {
        self.font_color_index
    }

    /// Select the page color preset.
    pub fn set_color_index(&mut self, index: usize) -> StoreResult<()> {
        self.color_index = self.check_preset_index(index)?;
        Ok(())
    }

    /// Select the preset whose text color is used for the font.
    pub fn set_font_color_index(&mut self, index: usize) -> StoreResult<()> {
        self.font_color_index = self.check_preset_index(index)?;
        Ok(())
    }

    /// The page color preset in the active mode.
    pub fn selected_color(&self) -> &'static ColorPreset {
        self.preset_at(self.color_index)
    }

    /// The font color preset in the active mode.
    pub fn font_color(&self) -> &'static ColorPreset {
        self.preset_at(self.font_color_index)
    }

    fn check_preset_index(&self, index: usize) -> StoreResult<usize> {
        let len = self.presets().len();
        if index < len {
            Ok(index)
        } else {
            tracing::debug!(index, len, mode = %self.color_mode, "rejected preset index");
            Err(StoreError::PresetIndexOutOfRange {
                index,
                len,
                mode: self.color_mode,
            })
        }
    }

    fn preset_at(&self, index: usize) -> &'static ColorPreset {
        // Both tables have the same length, so a validated index stays valid
        // across mode switches.
        let presets = self.presets();
        presets.get(index).unwrap_or(&presets[0])
    }

    // Typography

    pub fn typography(&self) -> &TypographyConfig {
        &self.typography
    }

    pub fn font_size(&self) -> f64 {
        self.typography.font_size_pct
    }

    pub fn line_height(&self) -> f64 {
        self.typography.line_height_pct
    }

    pub fn letter_spacing(&self) -> f64 {
        self.typography.letter_spacing_px
    }

    pub fn set_font_size(&mut self, pct: f64) {
        self.typography.set_font_size(pct);
    }

    pub fn set_line_height(&mut self, pct: f64) {
        self.typography.set_line_height(pct);
    }

    pub fn set_letter_spacing(&mut self, px: f64) {
        self.typography.set_letter_spacing(px);
    }

    pub fn reset_font_size(&mut self) {
        self.typography.reset_font_size();
    }

    pub fn reset_line_height(&mut self) {
        self.typography.reset_line_height();
    }

    pub fn reset_letter_spacing(&mut self) {
        self.typography.reset_letter_spacing();
    }

    /// Restore font size, line height and letter spacing to their defaults.
    pub fn reset_typography(&mut self) {
        self.typography.reset();
    }

    // Text

    pub fn text(&self, slot: TextSlot) -> &str {
        self.text.get(slot)
    }

    pub fn texts(&self) -> &TextContent {
        &self.text
    }

    pub fn set_text(&mut self, slot: TextSlot, text: impl Into<String>) {
        self.text.set(slot, text);
    }

    /// Restore every text slot to its default.
    pub fn reset_text(&mut self) {
        self.text.reset();
    }

    /// The read-only view the code generator consumes.
    pub fn snapshot(&self) -> GenerationSnapshot {
        GenerationSnapshot {
            active_stack: self.active_stack,
            font_color: self.font_color().text.clone(),
            typography: self.typography,
        }
    }
}

impl Default for ConfigurationStore {
    fn default() -> Self {
        Self::new()
    }
}
