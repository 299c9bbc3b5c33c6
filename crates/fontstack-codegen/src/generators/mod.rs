//! Framework-specific snippet generators.
//!
//! Each target is a template function over [`StyleValues`]. The set of
//! targets is closed and ordered: [`FrameworkId::ALL`] binds every id to its
//! template, and [`generate_framework_snippets`] renders all of them on every
//! call.

mod components;
mod stylesheets;

use std::fmt;
use std::str::FromStr;

use fontstack_core::{GenerationSnapshot, ParseIdError};
use indexmap::IndexMap;
use serde::{Serialize, Serializer};

use crate::values::{StyleProperty, StyleValues};

/// A template rendering one framework's snippet.
pub type SnippetTemplate = fn(&StyleValues) -> String;

/// Supported framework targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameworkId {
    React,
    Tailwind,
    StyledComponents,
    Vue,
    Angular,
    Svelte,
    CssCustomProperties,
    Sass,
}

impl FrameworkId {
    /// All targets in display order.
    pub const ALL: [FrameworkId; 8] = [
        FrameworkId::React,
        FrameworkId::Tailwind,
        FrameworkId::StyledComponents,
        FrameworkId::Vue,
        FrameworkId::Angular,
        FrameworkId::Svelte,
        FrameworkId::CssCustomProperties,
        FrameworkId::Sass,
    ];

    /// Stable string id.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::React => "react",
            Self::Tailwind => "tailwind",
            Self::StyledComponents => "styledComponents",
            Self::Vue => "vue",
            Self::Angular => "angular",
            Self::Svelte => "svelte",
            Self::CssCustomProperties => "cssCustomProperties",
            Self::Sass => "sass",
        }
    }

    /// Heading shown above the snippet.
    pub const fn label(self) -> &'static str {
        match self {
            Self::React => "React/JSX",
            Self::Tailwind => "Tailwind CSS",
            Self::StyledComponents => "Styled Components",
            Self::Vue => "Vue.js",
            Self::Angular => "Angular",
            Self::Svelte => "Svelte",
            Self::CssCustomProperties => "CSS Custom Properties",
            Self::Sass => "Sass/SCSS",
        }
    }

    /// The template bound to this target.
    pub fn template(self) -> SnippetTemplate {
        match self {
            Self::React => components::react,
            Self::Tailwind => stylesheets::tailwind,
            Self::StyledComponents => stylesheets::styled_components,
            Self::Vue => components::vue,
            Self::Angular => components::angular,
            Self::Svelte => components::svelte,
            Self::CssCustomProperties => stylesheets::css_custom_properties,
            Self::Sass => stylesheets::sass,
        }
    }

    /// Resolve an id leniently, falling back to [`FrameworkId::React`].
    pub fn resolve(id: &str) -> Self {
        id.parse().unwrap_or_else(|_| {
            tracing::debug!(id, "unknown framework; falling back to react");
            Self::React
        })
    }
}

impl fmt::Display for FrameworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FrameworkId {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| ParseIdError::new("framework", s))
    }
}

impl Serialize for FrameworkId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// One generated snippet per framework, in [`FrameworkId::ALL`] order.
///
/// Serializes as an ordered `id -> code` map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FrameworkSnippets {
    snippets: IndexMap<FrameworkId, String>,
}

impl FrameworkSnippets {
    pub fn get(&self, id: FrameworkId) -> &str {
        // Every id is rendered on construction.
        self.snippets.get(&id).map(String::as_str).unwrap_or_default()
    }

    /// Look up a snippet by string id; unknown ids fall back to React.
    pub fn get_by_id(&self, id: &str) -> &str {
        self.get(FrameworkId::resolve(id))
    }

    pub fn iter(&self) -> impl Iterator<Item = (FrameworkId, &str)> {
        self.snippets.iter().map(|(id, code)| (*id, code.as_str()))
    }

    pub fn len(&self) -> usize {
        self.snippets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snippets.is_empty()
    }
}

/// Render the snippet of every framework target for `snapshot`.
pub fn generate_framework_snippets(snapshot: &GenerationSnapshot) -> FrameworkSnippets {
    let values = StyleValues::from_snapshot(snapshot);
    let snippets = FrameworkId::ALL
        .into_iter()
        .map(|id| (id, id.template()(&values)))
        .collect::<IndexMap<_, _>>();
    debug_assert_eq!(snippets.len(), FrameworkId::ALL.len());

    tracing::trace!(stack = %snapshot.active_stack, "generated framework snippets");
    FrameworkSnippets { snippets }
}

/// Quote `value` as a single-quoted JavaScript string literal.
pub(crate) fn js_string(value: &str) -> String {
    format!("'{}'", value.replace('\\', "\\\\").replace('\'', "\\'"))
}

/// Object literal entries `key: 'value'`, one per line, comma separated.
pub(crate) fn js_object_entries(
    values: &StyleValues,
    indent: usize,
    key: impl Fn(StyleProperty) -> String,
) -> String {
    let spaces = " ".repeat(indent);
    values
        .entries()
        .map(|(property, value)| format!("{}{}: {}", spaces, key(property), js_string(value)))
        .collect::<Vec<_>>()
        .join(",\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use fontstack_core::{PlatformStackId, TypographyConfig};
    use proptest::prelude::*;

    fn snapshot(stack: PlatformStackId) -> GenerationSnapshot {
        GenerationSnapshot::new(stack, "#111827", TypographyConfig::default())
    }

    #[test]
    fn test_all_targets_generated_in_order() {
        let snippets = generate_framework_snippets(&snapshot(PlatformStackId::Apple));
        assert_eq!(snippets.len(), 8);
        let ids: Vec<&str> = snippets.iter().map(|(id, _)| id.as_str()).collect();
        assert_eq!(
            ids,
            [
                "react",
                "tailwind",
                "styledComponents",
                "vue",
                "angular",
                "svelte",
                "cssCustomProperties",
                "sass"
            ]
        );
        assert!(snippets.iter().all(|(_, code)| !code.is_empty()));
        assert!(FrameworkId::ALL.into_iter().all(|id| !snippets.get(id).is_empty()));
    }

    #[test]
    fn test_every_snippet_carries_the_values() {
        let mut typography = TypographyConfig::default();
        typography.set_font_size(120.0);
        typography.set_line_height(140.0);
        typography.set_letter_spacing(0.3);
        let snapshot = GenerationSnapshot::new(PlatformStackId::Android, "#581c87", typography);
        let snippets = generate_framework_snippets(&snapshot);

        for (id, code) in snippets.iter() {
            assert!(code.contains("#581c87"), "{id}");
            assert!(code.contains("120%"), "{id}");
            assert!(code.contains("140%"), "{id}");
            assert!(code.contains("0.3px"), "{id}");
            assert!(code.contains("Droid Sans"), "{id}");
        }
    }

    #[test]
    fn test_framework_ids() {
        for id in FrameworkId::ALL {
            assert_eq!(id.as_str().parse::<FrameworkId>(), Ok(id));
        }
        assert!("ember".parse::<FrameworkId>().is_err());
        assert_eq!(FrameworkId::resolve("ember"), FrameworkId::React);
        assert_eq!(FrameworkId::resolve("sass"), FrameworkId::Sass);
    }

    #[test]
    fn test_get_by_id_falls_back_to_react() {
        let snippets = generate_framework_snippets(&snapshot(PlatformStackId::Windows));
        assert_eq!(snippets.get_by_id("vue"), snippets.get(FrameworkId::Vue));
        assert_eq!(snippets.get_by_id("jquery"), snippets.get(FrameworkId::React));
    }

    #[test]
    fn test_serializes_as_ordered_map() {
        let snippets = generate_framework_snippets(&snapshot(PlatformStackId::Cross));
        let json = serde_json::to_string(&snippets).unwrap();
        assert!(json.starts_with("{\"react\":"));
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["sass"], snippets.get(FrameworkId::Sass));
    }

    #[test]
    fn test_unknown_stack_matches_apple() {
        assert_eq!(
            generate_framework_snippets(&snapshot(PlatformStackId::resolve("plan9"))),
            generate_framework_snippets(&snapshot(PlatformStackId::Apple))
        );
    }

    #[test]
    fn test_js_string_escapes() {
        assert_eq!(js_string("Arial"), "'Arial'");
        assert_eq!(js_string("it's"), r"'it\'s'");
    }

    proptest! {
        #[test]
        fn prop_always_eight_snippets(
            stack in 0usize..4,
            color in "#[0-9a-f]{6}",
            size in any::<f64>(),
            spacing in any::<f64>(),
        ) {
            let mut typography = TypographyConfig::default();
            typography.set_font_size(size);
            typography.set_letter_spacing(spacing);
            let snapshot = GenerationSnapshot::new(PlatformStackId::ALL[stack], color, typography);

            let snippets = generate_framework_snippets(&snapshot);
            prop_assert_eq!(snippets.len(), 8);
            prop_assert_eq!(&snippets, &generate_framework_snippets(&snapshot));
        }
    }
}
