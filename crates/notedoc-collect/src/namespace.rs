//! Namespace snapshot model.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::types::TypeAnnotation;

/// Module name a notebook's own definitions are owned by.
pub const DEFAULT_MODULE: &str = "__main__";

fn default_module() -> String {
    DEFAULT_MODULE.to_string()
}

/// Named values visible at the top level of a notebook.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Namespace {
    /// Module that owns the notebook's own definitions
    #[serde(default = "default_module")]
    pub module: String,

    /// Entries in definition order
    #[serde(default)]
    pub entries: IndexMap<String, NamespaceValue>,
}

impl Default for Namespace {
    fn default() -> Self {
        Self::new(DEFAULT_MODULE)
    }
}

impl Namespace {
    /// Create an empty namespace owned by `module`.
    pub fn new(module: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            entries: IndexMap::new(),
        }
    }

    /// Bind `name` to `value`. Rebinding keeps the original position.
    pub fn insert(&mut self, name: impl Into<String>, value: NamespaceValue) {
        self.entries.insert(name.into(), value);
    }

    /// Builder-style [`Namespace::insert`].
    pub fn with(mut self, name: impl Into<String>, value: NamespaceValue) -> Self {
        self.insert(name, value);
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in definition order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &NamespaceValue)> {
        self.entries.iter()
    }
}

/// A value bound in the namespace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NamespaceValue {
    /// A callable function.
    Function(FunctionDescriptor),
    /// Anything that cannot be called (data, modules, constants).
    Value {
        /// Runtime type name, for diagnostics only.
        #[serde(default)]
        type_name: String,
    },
}

impl NamespaceValue {
    /// Create a non-callable value.
    pub fn value(type_name: impl Into<String>) -> Self {
        Self::Value {
            type_name: type_name.into(),
        }
    }
}

impl From<FunctionDescriptor> for NamespaceValue {
    fn from(descriptor: FunctionDescriptor) -> Self {
        Self::Function(descriptor)
    }
}

/// Everything the collector needs to know about a function.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FunctionDescriptor {
    /// Module the function was defined in
    #[serde(default = "default_module")]
    pub module: String,

    /// Declared parameters in order
    #[serde(default)]
    pub parameters: Vec<ParameterDescriptor>,

    /// Return annotation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub returns: Option<TypeAnnotation>,

    /// Docstring text, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub docstring: Option<String>,
}

impl FunctionDescriptor {
    /// Create a descriptor for a function defined in `module`.
    pub fn new(module: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            ..Default::default()
        }
    }

    /// Create a descriptor for a function defined in the notebook itself.
    pub fn local() -> Self {
        Self::new(DEFAULT_MODULE)
    }

    /// Append a parameter.
    pub fn with_param(mut self, param: ParameterDescriptor) -> Self {
        self.parameters.push(param);
        self
    }

    /// Set the return annotation.
    pub fn with_returns(mut self, returns: TypeAnnotation) -> Self {
        self.returns = Some(returns);
        self
    }

    /// Set the docstring.
    pub fn with_docstring(mut self, docstring: impl Into<String>) -> Self {
        self.docstring = Some(docstring.into());
        self
    }
}

/// Kind of a declared parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParameterKind {
    PositionalOnly,
    #[default]
    PositionalOrKeyword,
    VarPositional,
    KeywordOnly,
    VarKeyword,
}

/// A declared parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterDescriptor {
    /// Parameter name
    pub name: String,

    /// Parameter kind
    #[serde(default)]
    pub kind: ParameterKind,

    /// Default value as source text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,

    /// Type annotation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annotation: Option<TypeAnnotation>,
}

impl ParameterDescriptor {
    /// Create an unannotated positional-or-keyword parameter.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ParameterKind::default(),
            default: None,
            annotation: None,
        }
    }

    /// Create an annotated positional-or-keyword parameter.
    pub fn typed(name: impl Into<String>, annotation: TypeAnnotation) -> Self {
        Self::new(name).with_annotation(annotation)
    }

    pub fn with_kind(mut self, kind: ParameterKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    pub fn with_annotation(mut self, annotation: TypeAnnotation) -> Self {
        self.annotation = Some(annotation);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rebinding_keeps_position() {
        let mut ns = Namespace::default();
        ns.insert("a", NamespaceValue::value("int"));
        ns.insert("b", NamespaceValue::value("int"));
        ns.insert("a", FunctionDescriptor::local().into());

        let names: Vec<_> = ns.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names, vec!["a", "b"]);
        assert!(matches!(ns.entries["a"], NamespaceValue::Function(_)));
    }

    #[test]
    fn deserializes_snapshot_with_defaults() {
        let json = r#"{
            "entries": {
                "add": {
                    "kind": "function",
                    "parameters": [{"name": "a"}, {"name": "b", "kind": "keyword_only", "default": "2"}]
                },
                "np": {"kind": "value", "type_name": "module"}
            }
        }"#;

        let ns: Namespace = serde_json::from_str(json).unwrap();

        assert_eq!(ns.module, DEFAULT_MODULE);
        assert_eq!(ns.len(), 2);
        let Some(NamespaceValue::Function(add)) = ns.entries.get("add") else {
            panic!("add should be a function");
        };
        assert_eq!(add.module, DEFAULT_MODULE);
        assert_eq!(add.parameters[1].kind, ParameterKind::KeywordOnly);
        assert_eq!(add.parameters[1].default.as_deref(), Some("2"));
        assert!(add.docstring.is_none());
        assert!(matches!(ns.entries["np"], NamespaceValue::Value { .. }));
    }
}
