//! Child sequences of composite elements.

use std::{borrow::Cow, fmt, rc::Rc};

use crate::{Element, Elements};

type Producer = Rc<dyn Fn() -> Vec<Element>>;

/// The children of a composite element.
///
/// Children are either a fixed list or a producer closure. A producer is
/// invoked each time the parent renders and its result is not cached.
#[derive(Clone)]
pub struct Children(Repr);

#[derive(Clone)]
enum Repr {
    Eager(Vec<Element>),
    Deferred(Producer),
}

impl Children {
    /// A fixed list of children.
    pub fn new(elements: Vec<Element>) -> Self {
        Self(Repr::Eager(elements))
    }

    /// No children.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Children produced by `f` at render time.
    pub fn deferred<F>(f: F) -> Self
    where
        F: Fn() -> Vec<Element> + 'static,
    {
        Self(Repr::Deferred(Rc::new(f)))
    }

    /// Append a child after everything this sequence produces.
    pub fn push(&mut self, element: Element) {
        match &mut self.0 {
            Repr::Eager(elements) => elements.push(element),
            Repr::Deferred(producer) => {
                let producer = Rc::clone(producer);
                self.0 = Repr::Deferred(Rc::new(move || {
                    let mut elements = producer();
                    elements.push(element.clone());
                    elements
                }));
            }
        }
    }

    /// Resolve the sequence, invoking the producer if there is one.
    pub fn produce(&self) -> Cow<'_, [Element]> {
        match &self.0 {
            Repr::Eager(elements) => Cow::Borrowed(elements),
            Repr::Deferred(producer) => Cow::Owned(producer()),
        }
    }

    /// Whether the children are produced at render time.
    pub fn is_deferred(&self) -> bool {
        matches!(self.0, Repr::Deferred(_))
    }
}

impl Default for Children {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Debug for Children {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Repr::Eager(elements) => f.debug_tuple("Children").field(elements).finish(),
            Repr::Deferred(_) => f.write_str("Children(<deferred>)"),
        }
    }
}

impl From<Vec<Element>> for Children {
    fn from(elements: Vec<Element>) -> Self {
        Self::new(elements)
    }
}

impl From<Elements> for Children {
    fn from(elements: Elements) -> Self {
        Self::new(elements.build())
    }
}

impl FromIterator<Element> for Children {
    fn from_iter<I: IntoIterator<Item = Element>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
