//! The render capability shared by every syntax node.

use cemit_core::{Indent, Result, TextSink, Writer};

/// Trait for nodes that can render themselves into a [`Writer`].
///
/// Rendering appends to the writer and never reads from it; the only
/// failures are the ones the writer's sink reports.
pub trait Renderable {
    /// Render this node at the writer's current indentation.
    fn render<S: TextSink>(&self, w: &mut Writer<S>) -> Result<()>;

    /// Render into a fresh string with the given indentation unit.
    fn render_to_string(&self, indent: Indent) -> Result<String> {
        let mut writer = Writer::with_indent(indent);
        self.render(&mut writer)?;
        Ok(writer.into_inner())
    }
}

/// Blanket implementation for references.
impl<T: Renderable + ?Sized> Renderable for &T {
    fn render<S: TextSink>(&self, w: &mut Writer<S>) -> Result<()> {
        (**self).render(w)
    }
}

/// Blanket implementation for Box.
impl<T: Renderable + ?Sized> Renderable for Box<T> {
    fn render<S: TextSink>(&self, w: &mut Writer<S>) -> Result<()> {
        self.as_ref().render(w)
    }
}

/// Sequences render each node in order with nothing in between.
impl<T: Renderable> Renderable for [T] {
    fn render<S: TextSink>(&self, w: &mut Writer<S>) -> Result<()> {
        for node in self {
            node.render(w)?;
        }
        Ok(())
    }
}

impl<T: Renderable> Renderable for Vec<T> {
    fn render<S: TextSink>(&self, w: &mut Writer<S>) -> Result<()> {
        self.as_slice().render(w)
    }
}
