//! Signature collector.
//!
//! Walks a [`Namespace`] and extracts a [`RawFunctionRecord`] for every
//! callable entry owned by the namespace's own module.

use indexmap::IndexMap;

use crate::namespace::{FunctionDescriptor, Namespace, NamespaceValue};
use crate::signature::format_signature;
use crate::types::ResolvedType;

/// Metadata extracted from one function, before docstring parsing.
#[derive(Debug, Clone, PartialEq)]
pub struct RawFunctionRecord {
    /// Rendered call signature, e.g. `add(a: int, b: int) -> int`
    pub signature_text: String,

    /// Docstring verbatim, empty when the function has none
    pub docstring_text: String,

    /// Every declared parameter with its resolved type
    pub param_types: IndexMap<String, ResolvedType>,

    /// Resolved return annotation
    pub return_type: ResolvedType,
}

impl RawFunctionRecord {
    /// Build the record for a single function.
    pub fn from_descriptor(name: &str, function: &FunctionDescriptor) -> Self {
        let param_types = function
            .parameters
            .iter()
            .map(|p| {
                (
                    p.name.clone(),
                    ResolvedType::from_annotation(p.annotation.as_ref()),
                )
            })
            .collect();

        Self {
            signature_text: format_signature(name, function),
            docstring_text: function.docstring.clone().unwrap_or_default(),
            param_types,
            return_type: ResolvedType::from_annotation(function.returns.as_ref()),
        }
    }

    /// Declared resolution for a parameter, if the function declares it.
    pub fn param_type(&self, name: &str) -> Option<&ResolvedType> {
        self.param_types.get(name)
    }
}

/// Collect raw records for every locally defined function, in namespace order.
pub fn collect(namespace: &Namespace) -> IndexMap<String, RawFunctionRecord> {
    let mut records = IndexMap::new();

    for (name, value) in namespace.iter() {
        let function = match value {
            NamespaceValue::Function(function) => function,
            NamespaceValue::Value { type_name } => {
                tracing::debug!("Skipping {} (not callable: {})", name, type_name);
                continue;
            }
        };

        if function.module != namespace.module {
            tracing::debug!(
                "Skipping {} (defined in {}, not {})",
                name,
                function.module,
                namespace.module
            );
            continue;
        }

        records.insert(name.clone(), RawFunctionRecord::from_descriptor(name, function));
    }

    tracing::debug!(
        "Collected {} of {} namespace entries",
        records.len(),
        namespace.len()
    );

    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::namespace::ParameterDescriptor;
    use crate::types::TypeAnnotation;
    use pretty_assertions::assert_eq;

    fn add() -> FunctionDescriptor {
        FunctionDescriptor::local()
            .with_param(ParameterDescriptor::typed("a", TypeAnnotation::named("int")))
            .with_param(ParameterDescriptor::typed("b", TypeAnnotation::named("int")))
            .with_returns(TypeAnnotation::named("int"))
            .with_docstring("Adds two numbers.")
    }

    #[test]
    fn collects_local_functions() {
        let ns = Namespace::default().with("add", add().into());

        let records = collect(&ns);

        let record = &records["add"];
        assert_eq!(record.signature_text, "add(a: int, b: int) -> int");
        assert_eq!(record.docstring_text, "Adds two numbers.");
        assert_eq!(
            record.param_type("a"),
            Some(&ResolvedType::Single("int".to_string()))
        );
        assert_eq!(record.return_type.display(), Some("int".to_string()));
    }

    #[test]
    fn imported_only_namespace_collects_nothing() {
        let ns = Namespace::default()
            .with("read_csv", FunctionDescriptor::new("pandas.io.parsers").into())
            .with("sqrt", FunctionDescriptor::new("math").into());

        assert!(collect(&ns).is_empty());
    }

    #[test]
    fn skips_non_callables() {
        let ns = Namespace::default()
            .with("threshold", NamespaceValue::value("float"))
            .with("add", add().into());

        let records = collect(&ns);

        assert_eq!(records.keys().collect::<Vec<_>>(), vec!["add"]);
    }

    #[test]
    fn preserves_namespace_order() {
        let ns = Namespace::default()
            .with("zeta", FunctionDescriptor::local().into())
            .with("alpha", FunctionDescriptor::local().into())
            .with("mid", FunctionDescriptor::local().into());

        let names: Vec<_> = collect(&ns).into_keys().collect();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn missing_docstring_is_empty_text() {
        let ns = Namespace::default().with("f", FunctionDescriptor::local().into());
        assert_eq!(collect(&ns)["f"].docstring_text, "");
    }

    #[test]
    fn unannotated_and_opaque_parameters_are_recorded_unresolved() {
        let f = FunctionDescriptor::local()
            .with_param(ParameterDescriptor::new("x"))
            .with_param(ParameterDescriptor::typed("frame", TypeAnnotation::opaque("'Frame'")));
        let ns = Namespace::default().with("f", f.into());

        let records = collect(&ns);
        let record = &records["f"];

        assert_eq!(record.param_types.len(), 2);
        assert_eq!(record.param_type("x"), Some(&ResolvedType::Unresolved));
        assert_eq!(record.param_type("frame"), Some(&ResolvedType::Unresolved));
        assert_eq!(record.return_type, ResolvedType::Unresolved);
        assert_eq!(record.signature_text, "f(x, frame: 'Frame')");
    }

    #[test]
    fn union_return_resolves_to_or_string() {
        let f = FunctionDescriptor::local().with_returns(TypeAnnotation::union(vec![
            TypeAnnotation::named("int"),
            TypeAnnotation::named("str"),
        ]));
        let ns = Namespace::default().with("f", f.into());

        assert_eq!(
            collect(&ns)["f"].return_type.display(),
            Some("int or str".to_string())
        );
    }

    #[test]
    fn respects_custom_owner_module() {
        let ns = Namespace::new("analysis")
            .with("local", FunctionDescriptor::new("analysis").into())
            .with("main", FunctionDescriptor::local().into());

        let names: Vec<_> = collect(&ns).into_keys().collect();
        assert_eq!(names, vec!["local"]);
    }
}
