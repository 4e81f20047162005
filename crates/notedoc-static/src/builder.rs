//! Documentation pipeline: collect, normalize, render.

use notedoc_collect::{collect, Namespace};
use notedoc_docstring::normalize;

use crate::render::{Document, OutputFormat};

/// Title used when the caller does not name the document.
pub const DEFAULT_TITLE: &str = "Notebook";

/// Options for rendering a namespace.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Document title, [`DEFAULT_TITLE`] when absent
    pub title: Option<String>,

    /// Link side panel entries to the function anchors
    pub enable_links: bool,

    /// Output format
    pub format: OutputFormat,
}

impl RenderOptions {
    /// The effective document title.
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or(DEFAULT_TITLE)
    }
}

/// Errors that can occur while rendering.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Failed to render template: {0}")]
    TemplateError(String),

    #[error("Failed to serialize document: {0}")]
    SerializeError(String),
}

/// Render documentation for every function defined in the namespace's own
/// module.
///
/// Performs no I/O; the caller decides where the returned text goes.
pub fn render_documentation(
    namespace: &Namespace,
    options: &RenderOptions,
) -> Result<String, RenderError> {
    let raw = collect(namespace);
    let functions = normalize(&raw);

    tracing::debug!(
        "Documenting {} of {} namespace entries as {}",
        functions.len(),
        namespace.len(),
        options.format
    );

    let renderer = options.format.renderer()?;
    renderer.render(&Document {
        title: options.title(),
        links: options.enable_links,
        functions: &functions,
    })
}
