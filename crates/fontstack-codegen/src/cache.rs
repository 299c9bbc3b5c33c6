//! Memoization of generated output.

use fontstack_core::{GenerationSnapshot, SnapshotKey};

use crate::css::generate_css;
use crate::generators::{generate_framework_snippets, FrameworkSnippets};

/// Output generated for one snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedCode {
    pub css: String,
    pub snippets: FrameworkSnippets,
}

impl GeneratedCode {
    pub fn generate(snapshot: &GenerationSnapshot) -> Self {
        Self {
            css: generate_css(snapshot),
            snippets: generate_framework_snippets(snapshot),
        }
    }
}

/// Single-entry cache over [`SnapshotKey`].
///
/// Generation is pure, so the last output can be reused for as long as the
/// snapshot stays the same; any change to the key regenerates everything.
#[derive(Debug, Default)]
pub struct GenerationCache {
    entry: Option<(SnapshotKey, GeneratedCode)>,
    hits: u64,
    misses: u64,
}

impl GenerationCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Output for `snapshot`, generated only if the snapshot changed.
    pub fn get(&mut self, snapshot: &GenerationSnapshot) -> &GeneratedCode {
        let key = snapshot.key();

        if self.entry.as_ref().is_some_and(|(cached, _)| *cached == key) {
            self.hits += 1;
            tracing::trace!(hits = self.hits, "generation cache hit");
        } else {
            self.misses += 1;
            tracing::trace!(misses = self.misses, "generation cache miss");
            self.entry = None;
        }

        let (_, code) = self
            .entry
            .get_or_insert_with(|| (key, GeneratedCode::generate(snapshot)));
        code
    }

    pub fn css(&mut self, snapshot: &GenerationSnapshot) -> &str {
        &self.get(snapshot).css
    }

    pub fn snippets(&mut self, snapshot: &GenerationSnapshot) -> &FrameworkSnippets {
        &self.get(snapshot).snippets
    }

    /// Drop the cached output.
    pub fn clear(&mut self) {
        self.entry = None;
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }
}
