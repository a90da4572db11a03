//! Declarative assembly of element sequences.

use cemit_core::{Result, TextSink, Writer};

use crate::{Element, Renderable};

/// Fluent builder for an ordered sequence of [`Element`]s.
///
/// Building never renders anything; call [`build`](Self::build) and
/// render the result, or render the builder directly.
///
/// # Example
///
/// ```
/// use cemit_codegen::{Element, Elements, Function, IncludeStyle, Renderable, Struct, Type};
/// use cemit_core::Indent;
///
/// let with_config = false;
/// let elements = Elements::new()
///     .push(Element::include("stdint.h", IncludeStyle::AngleBrackets))
///     .when(with_config, |b| b.push(Struct::new("Config")))
///     .push(Function::new(Type::raw("int"), "run"))
///     .build();
///
/// let code = elements.render_to_string(Indent::default()).unwrap();
/// assert_eq!(code, "#include <stdint.h>\nint run();\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Elements {
    elements: Vec<Element>,
}

impl Elements {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an element.
    pub fn push(mut self, element: impl Into<Element>) -> Self {
        self.elements.push(element.into());
        self
    }

    /// Append every element of `elements`, in order.
    pub fn extend(mut self, elements: impl IntoIterator<Item = Element>) -> Self {
        self.elements.extend(elements);
        self
    }

    /// Conditionally add content.
    pub fn when<F>(self, condition: bool, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        if condition { f(self) } else { self }
    }

    /// Add exactly one of two branches.
    pub fn when_else<F, G>(self, condition: bool, then: F, otherwise: G) -> Self
    where
        F: FnOnce(Self) -> Self,
        G: FnOnce(Self) -> Self,
    {
        if condition { then(self) } else { otherwise(self) }
    }

    /// Add content built from an optional value, if present.
    pub fn when_some<T, F>(self, value: Option<T>, f: F) -> Self
    where
        F: FnOnce(Self, T) -> Self,
    {
        match value {
            Some(value) => f(self, value),
            None => self,
        }
    }

    /// Iterate and add content for each item.
    pub fn each<T, I, F>(mut self, items: I, f: F) -> Self
    where
        I: IntoIterator<Item = T>,
        F: Fn(Self, T) -> Self,
    {
        for item in items {
            self = f(self, item);
        }
        self
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Consume the builder and return the sequence.
    pub fn build(self) -> Vec<Element> {
        self.elements
    }
}

impl Renderable for Elements {
    fn render<S: TextSink>(&self, w: &mut Writer<S>) -> Result<()> {
        self.elements.render(w)
    }
}

impl From<Elements> for Vec<Element> {
    fn from(elements: Elements) -> Self {
        elements.build()
    }
}

impl IntoIterator for Elements {
    type Item = Element;
    type IntoIter = std::vec::IntoIter<Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use cemit_core::Indent;

    use super::*;

    fn render(elements: Elements) -> String {
        elements.render_to_string(Indent::default()).unwrap()
    }

    #[test]
    fn test_push_preserves_order() {
        let code = render(Elements::new().push(Element::line("a")).push(Element::line("b")));
        assert_eq!(code, "a\nb\n");
    }

    #[test]
    fn test_when() {
        let with = Elements::new()
            .when(true, |b| b.push(Element::line("#pragma once")))
            .push(Element::line("int x;"));
        let without = Elements::new()
            .when(false, |b| b.push(Element::line("#pragma once")))
            .push(Element::line("int x;"));

        assert_eq!(render(with), "#pragma once\nint x;\n");
        assert_eq!(render(without), "int x;\n");
    }

    #[test]
    fn test_when_else_takes_one_branch() {
        let build = |flag| {
            Elements::new().when_else(
                flag,
                |b| b.push(Element::line("yes")),
                |b| b.push(Element::line("no")),
            )
        };
        assert_eq!(render(build(true)), "yes\n");
        assert_eq!(render(build(false)), "no\n");
    }

    #[test]
    fn test_when_some() {
        let guard: Option<&str> = Some("API_H");
        let code = render(Elements::new().when_some(guard, |b, guard| {
            b.push(Element::line(format!("#define {}", guard)))
        }));
        assert_eq!(code, "#define API_H\n");
        assert!(Elements::new().when_some(None::<&str>, |b, _| b).is_empty());
    }

    #[test]
    fn test_each_flattens() {
        let code = render(
            Elements::new()
                .each(["a", "b", "c"], |b, name| {
                    b.push(Element::line(format!("int {};", name)))
                })
                .extend(vec![Element::newline()]),
        );
        assert_eq!(code, "int a;\nint b;\nint c;\n\n");
    }
}
