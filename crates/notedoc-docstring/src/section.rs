//! Docstring section titles.

/// What a section documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    Params,
    Raises,
    Attributes,
    Examples,
    Returns,
    Yields,
}

/// How a section body is split into entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionShape {
    /// One `name: description` entry per indented line.
    Multiple,
    /// The whole body is a single entry.
    Singular,
    /// A single entry, optionally written as `type: description`.
    SingularOrMultiple,
}

/// Every recognized title, in matching order.
pub const TITLES: &[&str] = &[
    "Arguments",
    "Args",
    "Parameters",
    "Params",
    "Raises",
    "Exceptions",
    "Except",
    "Attributes",
    "Example",
    "Examples",
    "Returns",
    "Yields",
];

impl SectionKind {
    /// Parse a section title (without the trailing colon).
    pub fn from_title(title: &str) -> Option<Self> {
        match title {
            "Arguments" | "Args" | "Parameters" | "Params" => Some(Self::Params),
            "Raises" | "Exceptions" | "Except" => Some(Self::Raises),
            "Attributes" => Some(Self::Attributes),
            "Example" | "Examples" => Some(Self::Examples),
            "Returns" => Some(Self::Returns),
            "Yields" => Some(Self::Yields),
            _ => None,
        }
    }

    pub fn shape(&self) -> SectionShape {
        match self {
            Self::Params | Self::Raises | Self::Attributes => SectionShape::Multiple,
            Self::Examples => SectionShape::Singular,
            Self::Returns | Self::Yields => SectionShape::SingularOrMultiple,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Params => "Args",
            Self::Raises => "Raises",
            Self::Attributes => "Attributes",
            Self::Examples => "Examples",
            Self::Returns => "Returns",
            Self::Yields => "Yields",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_titles() {
        assert_eq!(SectionKind::from_title("Args"), Some(SectionKind::Params));
        assert_eq!(SectionKind::from_title("Parameters"), Some(SectionKind::Params));
        assert_eq!(SectionKind::from_title("Except"), Some(SectionKind::Raises));
        assert_eq!(SectionKind::from_title("Example"), Some(SectionKind::Examples));
        assert_eq!(SectionKind::from_title("Notes"), None);
    }

    #[test]
    fn every_title_has_a_kind() {
        for title in TITLES {
            assert!(SectionKind::from_title(title).is_some(), "{title}");
        }
    }

    #[test]
    fn section_shapes() {
        assert_eq!(SectionKind::Params.shape(), SectionShape::Multiple);
        assert_eq!(SectionKind::Examples.shape(), SectionShape::Singular);
        assert_eq!(SectionKind::Yields.shape(), SectionShape::SingularOrMultiple);
    }
}
