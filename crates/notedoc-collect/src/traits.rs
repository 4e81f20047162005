//! Trait definitions for namespace snapshot decoders.

use crate::namespace::Namespace;

/// Errors that can occur while loading a namespace snapshot.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("Failed to read snapshot {path}: {message}")]
    Io { path: String, message: String },

    #[error("Unsupported snapshot format: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid {format} snapshot: {message}")]
    Decode {
        format: &'static str,
        message: String,
    },
}

/// Trait for snapshot formats a notebook adapter can export.
pub trait SnapshotDecoder: Send + Sync {
    /// Format identifier (e.g., "json", "yaml")
    fn name(&self) -> &'static str;

    /// File extensions this decoder handles
    fn extensions(&self) -> &[&'static str];

    /// Decode snapshot text into a namespace.
    fn decode(&self, source: &str) -> Result<Namespace, SourceError>;
}
