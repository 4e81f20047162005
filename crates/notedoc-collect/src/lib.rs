//! Signature collection for notebook documentation.
//!
//! This crate holds the namespace model captured from a notebook's top-level
//! scope and turns every locally defined function in it into a
//! [`RawFunctionRecord`]: rendered signature, raw docstring and resolved
//! parameter/return types.

pub mod collector;
pub mod namespace;
pub mod signature;
pub mod snapshot;
pub mod traits;
pub mod types;

pub use collector::{collect, RawFunctionRecord};
pub use namespace::{
    FunctionDescriptor, Namespace, NamespaceValue, ParameterDescriptor, ParameterKind,
    DEFAULT_MODULE,
};
pub use signature::format_signature;
pub use snapshot::{JsonDecoder, SnapshotFile, TomlDecoder, YamlDecoder};
pub use traits::{SnapshotDecoder, SourceError};
pub use types::{ResolvedType, TypeAnnotation};
