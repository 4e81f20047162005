//! Docstring normalizer.
//!
//! Parses each raw record's docstring and reconciles the documented
//! parameter and return types with the declared annotations. Declared
//! annotations always win over type names written in the docstring.

use indexmap::IndexMap;
use notedoc_collect::RawFunctionRecord;

use crate::parser::{parse, Docstring};
use crate::record::{ErrorDoc, ExampleDoc, NormalizedFunctionRecord, ParameterDoc, ReturnDoc};
use crate::text::{cleandoc, display_safe};

/// Normalize every raw record, keeping the input order.
pub fn normalize(records: &IndexMap<String, RawFunctionRecord>) -> Vec<NormalizedFunctionRecord> {
    records
        .iter()
        .map(|(name, raw)| normalize_record(name, raw))
        .collect()
}

/// Normalize a single function.
///
/// A docstring that does not parse degrades to a summary-only record.
pub fn normalize_record(name: &str, raw: &RawFunctionRecord) -> NormalizedFunctionRecord {
    match parse(&raw.docstring_text) {
        Ok(doc) => from_docstring(name, raw, doc),
        Err(e) => {
            tracing::warn!("Docstring of {} is malformed, keeping the summary only: {}", name, e);
            NormalizedFunctionRecord::summary_only(
                name,
                raw.signature_text.clone(),
                best_summary_line(&raw.docstring_text),
            )
        }
    }
}

fn from_docstring(name: &str, raw: &RawFunctionRecord, doc: Docstring) -> NormalizedFunctionRecord {
    let parameters = doc.params.map(|params| {
        params
            .into_iter()
            .map(|p| {
                let type_name = match raw.param_type(&p.name) {
                    Some(declared) => declared.display(),
                    None => p.type_name,
                };
                ParameterDoc {
                    name: p.name,
                    type_name,
                    is_optional: p.is_optional,
                    default: p.default,
                    description: p.description,
                }
            })
            .collect()
    });

    let return_doc = doc.returns.map(|r| ReturnDoc {
        name: r.name,
        type_name: if raw.return_type.is_resolved() {
            raw.return_type.display()
        } else {
            r.type_name
        },
        description: display_safe(&r.description),
        is_generator: r.is_generator,
    });

    let raised_errors = doc.raises.map(|raises| {
        raises
            .into_iter()
            .map(|e| ErrorDoc {
                type_name: e.type_name,
                description: display_safe(&e.description),
            })
            .collect()
    });

    let examples = doc.examples.map(|examples| {
        examples
            .into_iter()
            .map(|e| ExampleDoc {
                description: display_safe(&e.description),
                snippet: e.snippet,
            })
            .collect()
    });

    NormalizedFunctionRecord {
        name: name.to_string(),
        signature_text: raw.signature_text.clone(),
        short_description: doc.short_description,
        long_description: doc.long_description.as_deref().map(display_safe),
        parameters,
        raised_errors,
        return_doc,
        examples,
    }
}

/// First non-blank line of the dedented docstring.
fn best_summary_line(text: &str) -> Option<String> {
    cleandoc(text)
        .lines()
        .map(str::trim)
        .find(|l| !l.is_empty())
        .map(str::to_string)
}
