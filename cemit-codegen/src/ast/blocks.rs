//! Indented and braced blocks.

use cemit_core::{Result, TextSink, Writer};

use crate::{Element, Renderable};

/// Render each child one unit deeper, prefixed with the new indentation.
pub(crate) fn render_indented<S: TextSink>(children: &[Element], w: &mut Writer<S>) -> Result<()> {
    w.indented(|w| {
        for child in children {
            w.push_prefix()?;
            child.render(w)?;
        }
        Ok(())
    })
}

/// Render `{`, the children on their own lines, then `}`.
///
/// An empty body collapses to `{}`. The closing brace is not followed
/// by a newline.
pub(crate) fn render_braced<S: TextSink>(children: &[Element], w: &mut Writer<S>) -> Result<()> {
    w.push_raw("{")?;
    if !children.is_empty() {
        w.push_raw("\n")?;
        render_indented(children, w)?;
        w.push_prefix()?;
    }
    w.push_raw("}")?;
    Ok(())
}
