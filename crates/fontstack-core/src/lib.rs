//! Core types for the FontStack Studio engine.
//!
//! This crate provides the data model shared by the code generator and the
//! WebAssembly bindings:
//! - Platform font stacks and their hand-authored definitions
//! - Dark and light color preset tables
//! - Typography settings with their clamped ranges
//! - Editable preview text
//! - The [`ConfigurationStore`] holding one session's state, and the
//!   [`GenerationSnapshot`] it hands to the generator
//! - Error types

pub mod color;
pub mod errors;
pub mod snapshot;
pub mod stack;
pub mod store;
pub mod text;
pub mod typography;

pub use color::*;
pub use errors::*;
pub use snapshot::*;
pub use stack::*;
pub use store::*;
pub use text::*;
pub use typography::*;
