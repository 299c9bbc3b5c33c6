//! JS-facing data shapes.

use fontstack_codegen::FrameworkId;
use fontstack_core::PlatformStackId;
use serde::Serialize;

/// An entry of the platform stack picker.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StackOptionJs {
    pub id: &'static str,
    pub label: &'static str,
    pub comment: &'static str,
    pub source_css: String,
}

impl From<PlatformStackId> for StackOptionJs {
    fn from(id: PlatformStackId) -> Self {
        let definition = id.definition();
        Self {
            id: id.as_str(),
            label: id.label(),
            comment: definition.comment,
            source_css: definition.source_css(),
        }
    }
}

/// A framework target and its heading.
#[derive(Debug, Clone, Serialize)]
pub struct FrameworkOptionJs {
    pub id: &'static str,
    pub label: &'static str,
}

impl From<FrameworkId> for FrameworkOptionJs {
    fn from(id: FrameworkId) -> Self {
        Self {
            id: id.as_str(),
            label: id.label(),
        }
    }
}

/// Current typography values.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypographyJs {
    pub font_size: f64,
    pub line_height: f64,
    pub letter_spacing: f64,
}
