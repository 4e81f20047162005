//! JSON renderer: structured output for tooling integration.
//!
//! Serializes the normalized records together with the title.

use crate::builder::RenderError;
use crate::render::{Document, Renderer};

pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, doc: &Document<'_>) -> Result<String, RenderError> {
        let mut out = serde_json::to_string_pretty(doc)
            .map_err(|e| RenderError::SerializeError(e.to_string()))?;
        out.push('\n');
        Ok(out)
    }

    fn file_extension(&self) -> &str {
        "json"
    }
}
