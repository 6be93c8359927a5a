//! Wiki markup to HTML fragment rendering.
//!
//! The supported dialect is small: `= headings =`, `'''bold'''`,
//! `''italic''`, `[[internal links]]` and `[https://external links]`.

pub mod engine;
mod patterns;
pub mod pipeline;
pub mod tree;

pub use engine::{MarkupEngine, engine_for};
