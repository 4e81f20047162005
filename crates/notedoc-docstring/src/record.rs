//! Normalized function records consumed by the renderers.

use serde::Serialize;

/// Everything the document shows for one function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedFunctionRecord {
    /// Function name, also the anchor id
    pub name: String,

    /// Rendered call signature
    pub signature_text: String,

    /// Summary line
    pub short_description: Option<String>,

    /// Display-safe long description
    pub long_description: Option<String>,

    /// `None` when the docstring declares no parameters section
    pub parameters: Option<Vec<ParameterDoc>>,

    pub raised_errors: Option<Vec<ErrorDoc>>,

    pub return_doc: Option<ReturnDoc>,

    pub examples: Option<Vec<ExampleDoc>>,
}

impl NormalizedFunctionRecord {
    /// A record carrying only a name, signature and optional summary.
    pub fn summary_only(
        name: impl Into<String>,
        signature_text: impl Into<String>,
        short_description: Option<String>,
    ) -> Self {
        Self {
            name: name.into(),
            signature_text: signature_text.into(),
            short_description,
            long_description: None,
            parameters: None,
            raised_errors: None,
            return_doc: None,
            examples: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParameterDoc {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: Option<String>,
    pub is_optional: bool,
    pub default: Option<String>,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReturnDoc {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub type_name: Option<String>,
    /// Display-safe
    pub description: String,
    pub is_generator: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorDoc {
    #[serde(rename = "type")]
    pub type_name: String,
    /// Display-safe
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExampleDoc {
    /// Display-safe
    pub description: String,
    pub snippet: Option<String>,
}
