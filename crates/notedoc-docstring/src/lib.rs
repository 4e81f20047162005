//! Docstring parsing and normalization.
//!
//! This crate parses Google-style docstrings into a [`Docstring`] and merges
//! them with the declared types gathered by `notedoc-collect` into
//! [`NormalizedFunctionRecord`]s ready for rendering.

pub mod normalize;
pub mod parser;
pub mod record;
pub mod section;
pub mod text;

pub use normalize::{normalize, normalize_record};
pub use parser::{parse, DocExample, DocParam, DocRaises, DocReturns, Docstring, ParseError};
pub use record::{ErrorDoc, ExampleDoc, NormalizedFunctionRecord, ParameterDoc, ReturnDoc};
pub use section::{SectionKind, SectionShape};
pub use text::{cleandoc, display_safe};
