//! Platform font stacks.
//!
//! Each stack is a hand-authored `font-family` list approximating the default
//! UI font of one operating system. The definitions are fixed; nothing here
//! validates or loads fonts.

use std::fmt;
use std::str::FromStr;

use crate::errors::ParseIdError;

/// Identifier of a platform font stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PlatformStackId {
    /// San Francisco on macOS/iOS via `-apple-system`.
    #[default]
    Apple,
    /// Roboto.
    Android,
    /// Segoe UI.
    Windows,
    /// Inter loaded from Google Fonts, with native fallbacks.
    Cross,
}

impl PlatformStackId {
    /// All stacks in picker order.
    pub const ALL: [PlatformStackId; 4] = [
        PlatformStackId::Apple,
        PlatformStackId::Android,
        PlatformStackId::Windows,
        PlatformStackId::Cross,
    ];

    /// Stable string id.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Apple => "apple",
            Self::Android => "android",
            Self::Windows => "windows",
            Self::Cross => "cross",
        }
    }

    /// Human-readable label for the stack picker.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Apple => "iOS",
            Self::Android => "Android",
            Self::Windows => "Windows",
            Self::Cross => "Cross-Platform",
        }
    }

    /// The fixed definition for this stack.
    pub const fn definition(self) -> &'static StackDefinition {
        match self {
            Self::Apple => &APPLE,
            Self::Android => &ANDROID,
            Self::Windows => &WINDOWS,
            Self::Cross => &CROSS,
        }
    }

    /// Resolve an id leniently, falling back to [`PlatformStackId::Apple`].
    ///
    /// This is the generation-side policy: code generation stays total even
    /// for ids it does not know. Use [`str::parse`] where an unknown id must
    /// be rejected.
    pub fn resolve(id: &str) -> Self {
        id.parse().unwrap_or_else(|_| {
            tracing::debug!(id, "unknown platform stack; falling back to apple");
            Self::default()
        })
    }
}

impl fmt::Display for PlatformStackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlatformStackId {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| ParseIdError::new("platform stack", s))
    }
}

/// Immutable description of a font stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StackDefinition {
    /// Comment text, without the `/* */` delimiters.
    pub comment: &'static str,
    /// Value of the `font-family` declaration.
    pub font_family_css: &'static str,
    /// Stylesheet import that must precede any rule block.
    pub import_statement: Option<&'static str>,
}

impl StackDefinition {
    /// The `font-family: ...;` declaration.
    pub fn declaration(&self) -> String {
        format!("font-family: {};", self.font_family_css)
    }

    /// The hand-authored stack block as shown next to the stack picker.
    pub fn source_css(&self) -> String {
        let mut lines = vec![format!("/* {} */", self.comment)];
        if let Some(import) = self.import_statement {
            lines.push(import.to_string());
            lines.push(String::new());
        }
        lines.push(self.declaration());
        lines.join("\n")
    }
}

const APPLE: StackDefinition = StackDefinition {
    comment: "Apple system stack (renders San Francisco on macOS/iOS)",
    font_family_css: r#"-apple-system, BlinkMacSystemFont, "Helvetica Neue", Arial, sans-serif"#,
    import_statement: None,
};

const ANDROID: StackDefinition = StackDefinition {
    comment: "Android system stack (renders Roboto)",
    font_family_css: r#"Roboto, "Droid Sans", "Helvetica Neue", Arial, sans-serif"#,
    import_statement: None,
};

const WINDOWS: StackDefinition = StackDefinition {
    comment: "Windows system stack (renders Segoe UI)",
    font_family_css: r#""Segoe UI", Tahoma, Geneva, Verdana, sans-serif"#,
    import_statement: None,
};

const CROSS: StackDefinition = StackDefinition {
    comment: "Cross-platform fallback (SF-like)",
    font_family_css: r#"Inter, "Segoe UI", Roboto, "Helvetica Neue", Arial, sans-serif"#,
    import_statement: Some(
        "@import url('https://fonts.googleapis.com/css2?family=Inter:wght@400;600;700;800&display=swap');",
    ),
};
