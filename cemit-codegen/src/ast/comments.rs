use cemit_core::{Result, TextSink, Writer};

/// Render each line of `text` as `// line`, then a blank line.
///
/// Continuation lines are prefixed with the current indentation; the
/// first line is prefixed by whatever block contains the comment.
pub(crate) fn render_line_comment<S: TextSink>(text: &str, w: &mut Writer<S>) -> Result<()> {
    for (i, line) in text.lines().enumerate() {
        if i > 0 {
            w.push_prefix()?;
        }
        w.push_raw("// ")?;
        w.push_raw(line)?;
        w.push_raw("\n")?;
    }
    w.push_raw("\n")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use cemit_core::Indent;

    use crate::{Element, Renderable};

    fn render(element: &Element) -> String {
        element.render_to_string(Indent::default()).unwrap()
    }

    #[test]
    fn test_single_line() {
        assert_eq!(render(&Element::line_comment("hello")), "// hello\n\n");
    }

    #[test]
    fn test_multiple_lines() {
        let comment = Element::line_comment("Generated bindings.\nDo not edit.");
        assert_eq!(render(&comment), "// Generated bindings.\n// Do not edit.\n\n");
    }

    #[test]
    fn test_crlf_and_empty_lines() {
        let comment = Element::line_comment("a\r\n\r\nb");
        assert_eq!(render(&comment), "// a\n// \n// b\n\n");
    }

    #[test]
    fn test_indented_comment() {
        let block = Element::indented(vec![Element::line_comment("x\ny")]);
        assert_eq!(render(&block), "    // x\n    // y\n\n");
    }
}
