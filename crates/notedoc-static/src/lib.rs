//! Document renderer for notedoc.
//!
//! Turns a namespace snapshot into a single self-contained documentation
//! page, either as HTML or as JSON for tooling.

pub mod builder;
pub mod render;
pub mod templates;

pub use builder::{render_documentation, RenderError, RenderOptions, DEFAULT_TITLE};
pub use render::{Document, OutputFormat, Renderer};
