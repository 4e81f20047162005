//! Call signature rendering.

use crate::namespace::{FunctionDescriptor, ParameterDescriptor, ParameterKind};

/// Render `name(params) -> ret` the way the notebook prints signatures.
///
/// A `/` follows the last positional-only parameter and a bare `*` precedes
/// the first keyword-only parameter unless a `*args` parameter already does.
pub fn format_signature(name: &str, function: &FunctionDescriptor) -> String {
    let mut parts: Vec<String> = Vec::with_capacity(function.parameters.len() + 2);
    let mut pending_positional_separator = false;
    let mut needs_keyword_separator = true;

    for param in &function.parameters {
        match param.kind {
            ParameterKind::PositionalOnly => pending_positional_separator = true,
            _ if pending_positional_separator => {
                parts.push("/".to_string());
                pending_positional_separator = false;
            }
            _ => {}
        }

        match param.kind {
            ParameterKind::VarPositional => needs_keyword_separator = false,
            ParameterKind::KeywordOnly if needs_keyword_separator => {
                parts.push("*".to_string());
                needs_keyword_separator = false;
            }
            _ => {}
        }

        parts.push(format_parameter(param));
    }

    if pending_positional_separator {
        parts.push("/".to_string());
    }

    let mut rendered = format!("{}({})", name, parts.join(", "));
    if let Some(ref returns) = function.returns {
        rendered.push_str(" -> ");
        rendered.push_str(&returns.to_source());
    }
    rendered
}

fn format_parameter(param: &ParameterDescriptor) -> String {
    let mut out = match param.kind {
        ParameterKind::VarPositional => format!("*{}", param.name),
        ParameterKind::VarKeyword => format!("**{}", param.name),
        _ => param.name.clone(),
    };

    if let Some(ref annotation) = param.annotation {
        out.push_str(": ");
        out.push_str(&annotation.to_source());
    }

    if let Some(ref default) = param.default {
        if param.annotation.is_some() {
            out.push_str(" = ");
        } else {
            out.push('=');
        }
        out.push_str(default);
    }

    out
}
