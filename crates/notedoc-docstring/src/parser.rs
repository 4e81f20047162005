//! Google-style docstring parser.
//!
//! A docstring is a summary line, an optional long description, and any
//! number of titled sections (`Args:`, `Returns:`, `Raises:`, `Examples:`,
//! ...). Section titles must start at column zero once the docstring has been
//! dedented with [`cleandoc`]; entries inside a section are indented.

use std::sync::LazyLock;

use indexmap::IndexMap;
use regex::Regex;

use crate::section::{SectionKind, SectionShape, TITLES};
use crate::text::cleandoc;

static TITLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(r"(?m)^({}):[ \t\r\f\v]*$", TITLES.join("|"));
    Regex::new(&pattern).expect("section title pattern is valid")
});

/// An unindented line that is not a title ends the current section.
static UNKNOWN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\S").expect("unknown line pattern is valid"));

/// `name (type)`
static TYPED_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(.+?)\s*\(\s*(.*[^\s]+)\s*\)").expect("typed name pattern is valid")
});

/// `... Defaults to value.`
static DEFAULT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^.*\. Defaults to (.+)\.").expect("default pattern is valid"));

/// Return bodies written as `type: description`, `list[int]: description`
/// or `name (type): description`.
static TYPED_RETURN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:\s*[^:\s]+:|[^:]*\]:.*|\s*[^:\s]+\s*\([^()]*\):)")
        .expect("typed return pattern is valid")
});

/// A parsed docstring.
///
/// Section fields are `None` when the docstring does not declare the section
/// and `Some(vec![])` when it declares an empty one.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Docstring {
    /// First line
    pub short_description: Option<String>,

    /// Text between the summary and the first section
    pub long_description: Option<String>,

    /// `Args:` entries
    pub params: Option<Vec<DocParam>>,

    /// `Raises:` entries
    pub raises: Option<Vec<DocRaises>>,

    /// First `Returns:`/`Yields:` entry
    pub returns: Option<DocReturns>,

    /// `Examples:` entries
    pub examples: Option<Vec<DocExample>>,
}

/// A documented parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocParam {
    pub name: String,
    /// Type written in parentheses after the name
    pub type_name: Option<String>,
    /// Type carried an `, optional` or `?` suffix
    pub is_optional: bool,
    /// Value from a `Defaults to X.` sentence
    pub default: Option<String>,
    pub description: String,
}

/// A documented return or yield value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocReturns {
    pub name: Option<String>,
    pub type_name: Option<String>,
    pub description: String,
    /// Declared under `Yields:`
    pub is_generator: bool,
}

/// A documented exception.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocRaises {
    pub type_name: String,
    pub description: String,
}

/// A documented usage example.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocExample {
    pub description: String,
    /// Doctest prompt lines (`>>>` and `...`)
    pub snippet: Option<String>,
}

impl DocExample {
    fn from_text(text: &str) -> Self {
        let prompts: Vec<&str> = text
            .lines()
            .map(str::trim_start)
            .filter(|l| l.starts_with(">>>") || l.starts_with("..."))
            .collect();

        Self {
            description: text.to_string(),
            snippet: (!prompts.is_empty()).then(|| prompts.join("\n")),
        }
    }
}

/// Errors raised by malformed docstrings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Expected a colon in {section} entry {text:?}")]
    MissingColon { section: &'static str, text: String },
}

/// Parse a Google-style docstring.
pub fn parse(text: &str) -> Result<Docstring, ParseError> {
    let mut doc = Docstring::default();
    if text.is_empty() {
        return Ok(doc);
    }

    let text = dedent(text);
    let (desc_chunk, meta_chunk) = match TITLE_RE.find(&text) {
        Some(m) => text.split_at(m.start()),
        None => (text.as_str(), ""),
    };

    let mut parts = desc_chunk.splitn(2, '\n');
    doc.short_description = parts.next().filter(|s| !s.is_empty()).map(str::to_string);
    doc.long_description = parts
        .next()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string);

    for (title, body) in section_bodies(meta_chunk) {
        let Some(kind) = SectionKind::from_title(title) else {
            continue;
        };
        doc.declare(kind);

        if body.trim().is_empty() {
            tracing::debug!("Empty {} section", title);
            continue;
        }

        match kind.shape() {
            SectionShape::Singular | SectionShape::SingularOrMultiple => {
                doc.add_entry(kind, &cleandoc(body))?;
            }
            SectionShape::Multiple => {
                for entry in split_entries(body) {
                    doc.add_entry(kind, entry.trim_matches('\n'))?;
                }
            }
        }
    }

    Ok(doc)
}

/// Dedent a docstring.
///
/// When the first line is already a section title it takes part in the
/// margin, so the entries below it stay indented.
fn dedent(text: &str) -> String {
    let first = text.split('\n').next().unwrap_or_default();
    if TITLE_RE.is_match(first.trim()) {
        cleandoc(&format!("\n{}", text))
    } else {
        cleandoc(text)
    }
}

/// Split the section part of a docstring into `(title, body)` pairs.
///
/// A repeated title replaces the earlier body but keeps its position.
fn section_bodies(meta_chunk: &str) -> IndexMap<&str, &str> {
    let titles: Vec<regex::Match> = TITLE_RE.find_iter(meta_chunk).collect();
    let mut bodies = IndexMap::new();

    for (i, m) in titles.iter().enumerate() {
        let end = titles
            .get(i + 1)
            .map_or(meta_chunk.len(), |next| next.start());
        let mut body = &meta_chunk[m.end()..end];

        if let Some(unknown) = UNKNOWN_RE.find(body) {
            body = &body[..unknown.start()];
        }

        let title = m.as_str().split(':').next().unwrap_or_default();
        bodies.insert(title, body.trim_matches('\n'));
    }

    bodies
}

/// Split a multiple-entry body at lines carrying exactly the indent of its
/// first non-blank line.
fn split_entries(body: &str) -> Vec<String> {
    let first = body
        .split('\n')
        .find(|line| !line.trim().is_empty())
        .unwrap_or_default();
    let indent_len = first.len() - first.trim_start_matches(|c: char| c == ' ' || c == '\t').len();
    let indent = &first[..indent_len];
    let mut entries: Vec<String> = Vec::new();

    for line in body.split('\n') {
        let starts_entry = line
            .strip_prefix(indent)
            .and_then(|rest| rest.chars().next())
            .is_some_and(|c| !c.is_whitespace());

        if starts_entry {
            entries.push(line[indent_len..].to_string());
        } else if let Some(last) = entries.last_mut() {
            last.push('\n');
            last.push_str(line);
        }
    }

    entries
}

/// Drop the space after the colon and dedent continuation lines.
fn tidy_description(desc: &str) -> String {
    let desc = desc.strip_prefix(' ').unwrap_or(desc);
    let desc = match desc.split_once('\n') {
        Some((first, rest)) => format!("{}\n{}", first, cleandoc(rest)),
        None => desc.to_string(),
    };
    desc.trim_matches('\n').to_string()
}

/// Split `name (type)` into its parts.
fn split_typed(spec: &str) -> Option<(&str, &str)> {
    let caps = TYPED_RE.captures(spec)?;
    Some((caps.get(1)?.as_str(), caps.get(2)?.as_str()))
}

fn non_empty(s: &str) -> Option<String> {
    let s = s.trim();
    (!s.is_empty()).then(|| s.to_string())
}

impl Docstring {
    fn declare(&mut self, kind: SectionKind) {
        match kind {
            SectionKind::Params => {
                self.params.get_or_insert_with(Vec::new);
            }
            SectionKind::Raises => {
                self.raises.get_or_insert_with(Vec::new);
            }
            SectionKind::Examples => {
                self.examples.get_or_insert_with(Vec::new);
            }
            SectionKind::Attributes | SectionKind::Returns | SectionKind::Yields => {}
        }
    }

    fn set_returns(&mut self, returns: DocReturns) {
        if self.returns.is_none() {
            self.returns = Some(returns);
        }
    }

    fn add_entry(&mut self, kind: SectionKind, text: &str) -> Result<(), ParseError> {
        let is_generator = kind == SectionKind::Yields;

        if kind == SectionKind::Examples {
            self.examples
                .get_or_insert_with(Vec::new)
                .push(DocExample::from_text(text));
            return Ok(());
        }

        if kind.shape() == SectionShape::SingularOrMultiple && !TYPED_RETURN_RE.is_match(text) {
            self.set_returns(DocReturns {
                name: None,
                type_name: None,
                description: text.to_string(),
                is_generator,
            });
            return Ok(());
        }

        let (before, desc) = text.split_once(':').ok_or_else(|| ParseError::MissingColon {
            section: kind.as_str(),
            text: text.to_string(),
        })?;
        let description = tidy_description(desc);

        match kind {
            SectionKind::Params => {
                let (name, type_name, is_optional) = match split_typed(before) {
                    Some((name, ty)) => {
                        if let Some(ty) = ty.strip_suffix(", optional") {
                            (name, Some(ty), true)
                        } else if let Some(ty) = ty.strip_suffix('?') {
                            (name, Some(ty), true)
                        } else {
                            (name, Some(ty), false)
                        }
                    }
                    None => (before.trim(), None, false),
                };
                let default = DEFAULT_RE
                    .captures(&description)
                    .and_then(|caps| caps.get(1))
                    .map(|m| m.as_str().to_string());

                self.params.get_or_insert_with(Vec::new).push(DocParam {
                    name: name.to_string(),
                    type_name: type_name.map(str::to_string),
                    is_optional,
                    default,
                    description,
                });
            }
            SectionKind::Raises => {
                self.raises.get_or_insert_with(Vec::new).push(DocRaises {
                    type_name: before.trim().to_string(),
                    description,
                });
            }
            SectionKind::Returns | SectionKind::Yields => {
                let (name, type_name) = match split_typed(before) {
                    Some((name, ty)) => (Some(name.to_string()), Some(ty.to_string())),
                    None => (None, non_empty(before)),
                };
                self.set_returns(DocReturns {
                    name,
                    type_name,
                    description,
                    is_generator,
                });
            }
            SectionKind::Attributes | SectionKind::Examples => {
                tracing::debug!("Discarding {} entry {:?}", kind.as_str(), before.trim());
            }
        }

        Ok(())
    }
}
