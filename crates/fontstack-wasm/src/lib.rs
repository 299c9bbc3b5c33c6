//! WebAssembly bindings for the FontStack Studio engine.
//!
//! This crate exposes the configuration store and the code generator to a
//! browser front end. The front end owns layout, widgets and clipboard
//! access; everything it shows as code comes from here.
//!
//! ## Example
//!
//! ```js
//! import { FontStackStudio } from 'fontstack-wasm';
//!
//! const studio = new FontStackStudio();
//! studio.setActiveStack('windows');
//! studio.setFontSize(120);
//!
//! const css = studio.generateCss();
//! const snippets = studio.generateFrameworkSnippets(); // { react: '...', tailwind: '...', ... }
//! navigator.clipboard.writeText(studio.frameworkSnippet('sass'));
//! ```

use fontstack_codegen::{
    generate_css, generate_framework_snippets, FrameworkId, GenerationCache,
};
use fontstack_core::{
    ColorMode, ConfigurationStore, GenerationSnapshot, ParseIdError, PlatformStackId, TextSlot,
};
use wasm_bindgen::prelude::*;

mod types;

pub use types::*;

/// Initialize panic hook for better error messages in the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(debug_assertions)]
    console_error_panic_hook::set_once();
}

/// One FontStack Studio session.
#[wasm_bindgen]
pub struct FontStackStudio {
    store: ConfigurationStore,
    cache: GenerationCache,
}

#[wasm_bindgen]
impl FontStackStudio {
    /// Create a session holding the default settings.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            store: ConfigurationStore::new(),
            cache: GenerationCache::new(),
        }
    }

    /// Get the version of the engine.
    #[wasm_bindgen(js_name = version)]
    pub fn version() -> String {
        env!("CARGO_PKG_VERSION").to_string()
    }

    // Platform stack

    #[wasm_bindgen(js_name = activeStack)]
    pub fn active_stack(&self) -> String {
        self.store.active_stack().as_str().to_string()
    }

    /// Select a platform stack by id. Unknown ids are rejected.
    #[wasm_bindgen(js_name = setActiveStack)]
    pub fn set_active_stack(&mut self, id: &str) -> Result<(), JsError> {
        self.store
            .set_active_stack_id(id)
            .map_err(|e| JsError::new(&error_message("Invalid stack", e)))
    }

    /// Stack picker entries: id, label, comment and the stack's CSS source.
    #[wasm_bindgen(js_name = stackOptions)]
    pub fn stack_options() -> Result<JsValue, JsError> {
        let options: Vec<StackOptionJs> = PlatformStackId::ALL.into_iter().map(Into::into).collect();
        to_js(&options)
    }

    // Colors

    #[wasm_bindgen(js_name = isDarkMode)]
    pub fn is_dark_mode(&self) -> bool {
        self.store.is_dark_mode()
    }

    #[wasm_bindgen(js_name = setDarkMode)]
    pub fn set_dark_mode(&mut self, dark: bool) {
        self.store
            .set_color_mode(if dark { ColorMode::Dark } else { ColorMode::Light });
    }

    #[wasm_bindgen(js_name = toggleDarkMode)]
    pub fn toggle_dark_mode(&mut self) {
        self.store.toggle_color_mode();
    }

    /// Presets of the active mode.
    #[wasm_bindgen]
    pub fn presets(&self) -> Result<JsValue, JsError> {
        to_js(self.store.presets())
    }

    #[wasm_bindgen(js_name = colorIndex)]
    pub fn color_index(&self) -> usize {
        self.store.color_index()
    }

    #[wasm_bindgen(js_name = setColorIndex)]
    pub fn set_color_index(&mut self, index: usize) -> Result<(), JsError> {
        self.store
            .set_color_index(index)
            .map_err(|e| JsError::new(&error_message("Invalid color preset", e)))
    }

    #[wasm_bindgen(js_name = fontColorIndex)]
    pub fn font_color_index(&self) -> usize {
        self.store.font_color_index()
    }

    #[wasm_bindgen(js_name = setFontColorIndex)]
    pub fn set_font_color_index(&mut self, index: usize) -> Result<(), JsError> {
        self.store
            .set_font_color_index(index)
            .map_err(|e| JsError::new(&error_message("Invalid font color preset", e)))
    }

    /// The page color preset.
    #[wasm_bindgen(js_name = selectedColor)]
    pub fn selected_color(&self) -> Result<JsValue, JsError> {
        to_js(self.store.selected_color())
    }

    /// The preset supplying the font color.
    #[wasm_bindgen(js_name = fontColor)]
    pub fn font_color(&self) -> Result<JsValue, JsError> {
        to_js(self.store.font_color())
    }

    // Typography

    #[wasm_bindgen(js_name = fontSize)]
    pub fn font_size(&self) -> f64 {
        self.store.font_size()
    }

    #[wasm_bindgen(js_name = setFontSize)]
    pub fn set_font_size(&mut self, pct: f64) {
        self.store.set_font_size(pct);
    }

    #[wasm_bindgen(js_name = lineHeight)]
    pub fn line_height(&self) -> f64 {
        self.store.line_height()
    }

    #[wasm_bindgen(js_name = setLineHeight)]
    pub fn set_line_height(&mut self, pct: f64) {
        self.store.set_line_height(pct);
    }

    #[wasm_bindgen(js_name = letterSpacing)]
    pub fn letter_spacing(&self) -> f64 {
        self.store.letter_spacing()
    }

    #[wasm_bindgen(js_name = setLetterSpacing)]
    pub fn set_letter_spacing(&mut self, px: f64) {
        self.store.set_letter_spacing(px);
    }

    #[wasm_bindgen]
    pub fn typography(&self) -> Result<JsValue, JsError> {
        to_js(&TypographyJs {
            font_size: self.store.font_size(),
            line_height: self.store.line_height(),
            letter_spacing: self.store.letter_spacing(),
        })
    }

    #[wasm_bindgen(js_name = resetFontSize)]
    pub fn reset_font_size(&mut self) {
        self.store.reset_font_size();
    }

    #[wasm_bindgen(js_name = resetLineHeight)]
    pub fn reset_line_height(&mut self) {
        self.store.reset_line_height();
    }

    #[wasm_bindgen(js_name = resetLetterSpacing)]
    pub fn reset_letter_spacing(&mut self) {
        self.store.reset_letter_spacing();
    }

    #[wasm_bindgen(js_name = resetTypography)]
    pub fn reset_typography(&mut self) {
        self.store.reset_typography();
    }

    // Text

    #[wasm_bindgen]
    pub fn text(&self, slot: &str) -> Result<String, JsError> {
        let slot = parse_slot(slot).map_err(|e| JsError::new(&e.to_string()))?;
        Ok(self.store.text(slot).to_string())
    }

    #[wasm_bindgen(js_name = setText)]
    pub fn set_text(&mut self, slot: &str, text: String) -> Result<(), JsError> {
        let slot = parse_slot(slot).map_err(|e| JsError::new(&e.to_string()))?;
        self.store.set_text(slot, text);
        Ok(())
    }

    #[wasm_bindgen(js_name = resetText)]
    pub fn reset_text(&mut self) {
        self.store.reset_text();
    }

    // Generated code

    /// CSS block for the current settings.
    #[wasm_bindgen(js_name = generateCss)]
    pub fn generate_css(&mut self) -> String {
        let snapshot = self.store.snapshot();
        self.cache.css(&snapshot).to_string()
    }

    /// All framework snippets as an `{ id: code }` object.
    #[wasm_bindgen(js_name = generateFrameworkSnippets)]
    pub fn generate_framework_snippets(&mut self) -> Result<JsValue, JsError> {
        let snapshot = self.store.snapshot();
        to_js(self.cache.snippets(&snapshot))
    }

    /// The snippet of one framework, for a copy action. Unknown ids return
    /// the React snippet.
    #[wasm_bindgen(js_name = frameworkSnippet)]
    pub fn framework_snippet(&mut self, id: &str) -> String {
        let snapshot = self.store.snapshot();
        self.cache.snippets(&snapshot).get_by_id(id).to_string()
    }

    /// Framework ids and headings in display order.
    #[wasm_bindgen(js_name = frameworkOptions)]
    pub fn framework_options() -> Result<JsValue, JsError> {
        let options: Vec<FrameworkOptionJs> = FrameworkId::ALL.into_iter().map(Into::into).collect();
        to_js(&options)
    }

    /// The snapshot the generator currently reads.
    #[wasm_bindgen]
    pub fn snapshot(&self) -> Result<JsValue, JsError> {
        to_js(&self.store.snapshot())
    }
}

impl Default for FontStackStudio {
    fn default() -> Self {
        Self::new()
    }
}

fn error_message(context: &str, err: impl std::fmt::Display) -> String {
    format!("{}: {}", context, err)
}

fn parse_slot(slot: &str) -> Result<TextSlot, ParseIdError> {
    slot.parse()
}

fn to_js<T: serde::Serialize + ?Sized>(value: &T) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(value)
        .map_err(|e| JsError::new(&error_message("Serialization error", e)))
}

fn from_js_snapshot(snapshot: JsValue) -> Result<GenerationSnapshot, JsError> {
    serde_wasm_bindgen::from_value(snapshot)
        .map_err(|e| JsError::new(&error_message("Invalid snapshot", e)))
}

/// Generate CSS for a serialized snapshot (for simpler usage).
///
/// Unknown stack ids generate the Apple stack.
#[wasm_bindgen(js_name = generateCss)]
pub fn generate_css_standalone(snapshot: JsValue) -> Result<String, JsError> {
    Ok(generate_css(&from_js_snapshot(snapshot)?))
}

/// Generate all framework snippets for a serialized snapshot.
#[wasm_bindgen(js_name = generateFrameworkSnippets)]
pub fn generate_framework_snippets_standalone(snapshot: JsValue) -> Result<JsValue, JsError> {
    to_js(&generate_framework_snippets(&from_js_snapshot(snapshot)?))
}

/// Get the engine version.
#[wasm_bindgen(js_name = getVersion)]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
