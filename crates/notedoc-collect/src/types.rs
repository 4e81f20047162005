//! Type annotations and their resolution to display names.

use serde::{Deserialize, Serialize};

/// A declared type annotation as captured from the notebook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TypeAnnotation {
    /// A named type (`int`, `list[str]`, `DataFrame`).
    Named {
        /// Display name of the type.
        name: String,
        /// Generic arguments, if any.
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        args: Vec<TypeAnnotation>,
    },
    /// A union of alternatives (`Union[int, str]`, `int | str`).
    Union {
        /// The member types.
        members: Vec<TypeAnnotation>,
    },
    /// An annotation with no resolvable display name, kept as source text.
    Opaque {
        /// Annotation text as written.
        text: String,
    },
}

impl TypeAnnotation {
    /// Create a named type without arguments.
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named {
            name: name.into(),
            args: vec![],
        }
    }

    /// Create a named type with generic arguments.
    pub fn named_with_args(name: impl Into<String>, args: Vec<TypeAnnotation>) -> Self {
        Self::Named {
            name: name.into(),
            args,
        }
    }

    /// Create a union type.
    pub fn union(members: Vec<TypeAnnotation>) -> Self {
        Self::Union { members }
    }

    /// Create an opaque annotation.
    pub fn opaque(text: impl Into<String>) -> Self {
        Self::Opaque { text: text.into() }
    }

    /// Resolve this annotation to its display form.
    ///
    /// Unions are flattened; a union with any unresolvable member resolves
    /// to [`ResolvedType::Unresolved`] as a whole.
    pub fn resolve(&self) -> ResolvedType {
        match self {
            Self::Named { name, .. } if !name.trim().is_empty() => {
                ResolvedType::Single(name.clone())
            }
            Self::Named { .. } | Self::Opaque { .. } => ResolvedType::Unresolved,
            Self::Union { members } => {
                let mut names = Vec::new();
                if !flatten_union(members, &mut names) || names.is_empty() {
                    return ResolvedType::Unresolved;
                }
                ResolvedType::Union(names)
            }
        }
    }

    /// Render the annotation the way it reads in a signature.
    pub fn to_source(&self) -> String {
        match self {
            Self::Named { name, args } => {
                let name = if name == "NoneType" { "None" } else { name };
                if args.is_empty() {
                    name.to_string()
                } else {
                    let args: Vec<String> = args.iter().map(|a| a.to_source()).collect();
                    format!("{}[{}]", name, args.join(", "))
                }
            }
            Self::Union { members } => members
                .iter()
                .map(|m| m.to_source())
                .collect::<Vec<_>>()
                .join(" | "),
            Self::Opaque { text } => text.clone(),
        }
    }
}

/// Collect member display names, descending into nested unions.
/// Returns false as soon as a member cannot be resolved.
fn flatten_union(members: &[TypeAnnotation], names: &mut Vec<String>) -> bool {
    for member in members {
        match member {
            TypeAnnotation::Union { members } => {
                if !flatten_union(members, names) {
                    return false;
                }
            }
            other => match other.resolve() {
                ResolvedType::Single(name) => names.push(name),
                _ => return false,
            },
        }
    }
    true
}

/// The outcome of resolving a declared annotation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ResolvedType {
    /// A single type with a known display name.
    Single(String),
    /// A flattened union of display names.
    Union(Vec<String>),
    /// No annotation, or one whose display name cannot be determined.
    #[default]
    Unresolved,
}

impl ResolvedType {
    /// Resolve an optional annotation; a missing annotation is unresolved.
    pub fn from_annotation(annotation: Option<&TypeAnnotation>) -> Self {
        annotation.map(TypeAnnotation::resolve).unwrap_or_default()
    }

    /// Human-readable projection: `"int"`, `"int or str"`, or `None`.
    pub fn display(&self) -> Option<String> {
        match self {
            Self::Single(name) => Some(name.clone()),
            Self::Union(names) => Some(names.join(" or ")),
            Self::Unresolved => None,
        }
    }

    /// Check whether a display name is known.
    pub fn is_resolved(&self) -> bool {
        !matches!(self, Self::Unresolved)
    }
}
