//! HTML renderer: the Bootstrap documentation page.

use crate::builder::RenderError;
use crate::render::{Document, Renderer};
use crate::templates::TemplateEngine;

pub struct HtmlRenderer {
    templates: TemplateEngine,
}

impl HtmlRenderer {
    pub fn new() -> Result<Self, RenderError> {
        let templates =
            TemplateEngine::new().map_err(|e| RenderError::TemplateError(e.to_string()))?;
        Ok(Self { templates })
    }
}

impl Renderer for HtmlRenderer {
    fn render(&self, doc: &Document<'_>) -> Result<String, RenderError> {
        self.templates
            .render_document(doc)
            .map_err(|e| RenderError::TemplateError(e.to_string()))
    }

    fn file_extension(&self) -> &str {
        "html"
    }
}
