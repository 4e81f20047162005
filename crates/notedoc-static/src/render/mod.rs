//! Renderer module: trait-based format dispatch.

pub mod html;
pub mod json;

use std::fmt;
use std::str::FromStr;

use notedoc_docstring::NormalizedFunctionRecord;
use serde::{Deserialize, Serialize};

use crate::builder::RenderError;

pub use html::HtmlRenderer;
pub use json::JsonRenderer;

/// Everything a renderer needs to produce the page.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Document<'a> {
    /// Document title, shown as `{title} - Documentation`
    pub title: &'a str,

    /// Link side panel entries to the function anchors
    pub links: bool,

    /// Functions in collection order
    pub functions: &'a [NormalizedFunctionRecord],
}

/// Trait for rendering a [`Document`] into a specific output format.
pub trait Renderer {
    fn render(&self, doc: &Document<'_>) -> Result<String, RenderError>;
    fn file_extension(&self) -> &str;
}

/// Output format selectable from the CLI and the config file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Html,
    Json,
}

impl OutputFormat {
    /// Create the renderer for this format.
    pub fn renderer(&self) -> Result<Box<dyn Renderer>, RenderError> {
        match self {
            Self::Html => Ok(Box::new(HtmlRenderer::new()?)),
            Self::Json => Ok(Box::new(JsonRenderer)),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "html" => Ok(Self::Html),
            "json" => Ok(Self::Json),
            _ => Err(format!("unknown format: {}. Use html or json", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Html => f.write_str("html"),
            Self::Json => f.write_str("json"),
        }
    }
}
