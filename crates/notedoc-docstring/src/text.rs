//! Text helpers shared by the parser and the normalizer.

/// Clean up docstring indentation.
///
/// The first line is left-trimmed, the smallest indentation of the remaining
/// non-blank lines is removed from all of them, and leading/trailing blank
/// lines are dropped. Tabs are kept as-is.
pub fn cleandoc(text: &str) -> String {
    let lines: Vec<&str> = text.split('\n').collect();

    let margin = lines
        .iter()
        .skip(1)
        .filter_map(|line| {
            let content = line.trim_start();
            if content.is_empty() {
                None
            } else {
                Some(line.len() - content.len())
            }
        })
        .min();

    let mut cleaned: Vec<&str> = Vec::with_capacity(lines.len());
    cleaned.push(lines[0].trim_start());
    for &line in lines.iter().skip(1) {
        let line = match margin {
            Some(margin) => line.get(margin..).unwrap_or_else(|| line.trim_start()),
            None => line,
        };
        cleaned.push(line);
    }

    while cleaned.last().is_some_and(|l| l.trim().is_empty()) {
        cleaned.pop();
    }
    let leading = cleaned.iter().take_while(|l| l.trim().is_empty()).count();

    cleaned[leading..].join("\n")
}

/// Convert line breaks to `<br>` and tabs to four non-breaking spaces.
///
/// Nothing else is touched; markup escaping happens when the page is rendered.
pub fn display_safe(text: &str) -> String {
    text.replace('\n', "<br>")
        .replace('\t', "&nbsp;&nbsp;&nbsp;&nbsp;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn removes_common_indent() {
        let text = "Summary.\n\n    Details here.\n      Nested.\n    ";
        assert_eq!(cleandoc(text), "Summary.\n\nDetails here.\n  Nested.");
    }

    #[test]
    fn trims_first_line_and_blank_edges() {
        assert_eq!(cleandoc("\n   \n  Summary.\n  More.\n\n"), "Summary.\nMore.");
        assert_eq!(cleandoc("   Only line"), "Only line");
    }

    #[test]
    fn keeps_tabs() {
        assert_eq!(cleandoc("A\n  x\tb"), "A\nx\tb");
    }

    #[test]
    fn display_safe_converts_breaks_and_tabs() {
        assert_eq!(display_safe("one\ntwo"), "one<br>two");
        assert_eq!(display_safe("\tindented"), "&nbsp;&nbsp;&nbsp;&nbsp;indented");
    }

    #[test]
    fn display_safe_keeps_markup_characters() {
        assert_eq!(display_safe(">>> f(\"a < b\")\n2"), ">>> f(\"a < b\")<br>2");
    }
}
