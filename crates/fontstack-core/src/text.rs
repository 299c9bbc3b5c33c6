//! Editable preview text.

use std::fmt;
use std::str::FromStr;

use crate::errors::ParseIdError;

/// A slot of preview text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TextSlot {
    Heading1,
    Heading2,
    Heading3,
    Heading4,
    Paragraph,
}

impl TextSlot {
    pub const ALL: [TextSlot; 5] = [
        TextSlot::Heading1,
        TextSlot::Heading2,
        TextSlot::Heading3,
        TextSlot::Heading4,
        TextSlot::Paragraph,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Heading1 => "heading1",
            Self::Heading2 => "heading2",
            Self::Heading3 => "heading3",
            Self::Heading4 => "heading4",
            Self::Paragraph => "paragraph",
        }
    }

    /// The text a fresh session starts with.
    pub const fn default_text(self) -> &'static str {
        match self {
            Self::Heading1 => "See what you can do.",
            Self::Heading2 => "Beautiful typography with system stacks.",
            Self::Heading3 => "Apple view: San Francisco (via -apple-system)",
            Self::Heading4 => "Other view: Inter / Segoe UI / Roboto fallback",
            Self::Paragraph => {
                "Toggle between different platform-specific font stacks to see how typography \
                 renders across iOS, Android, Windows, and cross-platform environments."
            }
        }
    }

    const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for TextSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TextSlot {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|slot| slot.as_str() == s)
            .ok_or_else(|| ParseIdError::new("text slot", s))
    }
}

/// The user-editable strings shown in the preview, one per [`TextSlot`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextContent {
    slots: [String; 5],
}

impl TextContent {
    pub fn get(&self, slot: TextSlot) -> &str {
        &self.slots[slot.index()]
    }

    pub fn set(&mut self, slot: TextSlot, text: impl Into<String>) {
        self.slots[slot.index()] = text.into();
    }

    /// Restore every slot to its default text.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn iter(&self) -> impl Iterator<Item = (TextSlot, &str)> {
        TextSlot::ALL.into_iter().map(move |slot| (slot, self.get(slot)))
    }
}

impl Default for TextContent {
    fn default() -> Self {
        Self {
            slots: TextSlot::ALL.map(|slot| slot.default_text().to_string()),
        }
    }
}
