//! Code generation from FontStack Studio settings.
//!
//! Turns a [`GenerationSnapshot`](fontstack_core::GenerationSnapshot) into
//! code that reproduces the chosen font stack, color and typography:
//!
//! - [`generate_css`] - one plain CSS block for the active platform stack
//! - [`generate_framework_snippets`] - the same values for each
//!   [`FrameworkId`]: React, Tailwind CSS, styled-components, Vue, Angular,
//!   Svelte, CSS custom properties and Sass
//!
//! Both functions are pure and total; [`GenerationCache`] memoizes them for
//! hosts that regenerate on every change event.
//!
//! # Example
//!
//! ```
//! use fontstack_core::{ConfigurationStore, PlatformStackId};
//! use fontstack_codegen::{generate_css, generate_framework_snippets, FrameworkId};
//!
//! let mut store = ConfigurationStore::new();
//! store.set_active_stack(PlatformStackId::Windows);
//! store.set_font_size(120.0);
//!
//! let css = generate_css(&store.snapshot());
//! assert!(css.contains("font-size: 120%;"));
//!
//! let snippets = generate_framework_snippets(&store.snapshot());
//! assert!(snippets.get(FrameworkId::Sass).contains("$font-size: 120%;"));
//! ```

pub mod cache;
pub mod css;
pub mod generators;
pub mod values;

pub use cache::{GeneratedCode, GenerationCache};
pub use css::generate_css;
pub use generators::{generate_framework_snippets, FrameworkId, FrameworkSnippets, SnippetTemplate};
pub use values::{StyleProperty, StyleValues};
