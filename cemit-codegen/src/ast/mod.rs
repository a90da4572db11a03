//! C syntax elements.
//!
//! [`Element`] is the closed set of nodes a C file is assembled from.
//! Every node owns its children; rendering walks the tree once,
//! delegating to the declarator renderer wherever a type is spelled.

mod attrs;
mod blocks;
mod comments;
mod fns;
mod includes;
mod structs;
mod typedefs;

pub use attrs::{Attribute, ImportAttribute};
pub use fns::Function;
pub use includes::{Include, IncludeStyle};
pub use structs::{Field, Struct};
pub use typedefs::Typedef;

use cemit_core::{Result, TextSink, Writer};

use crate::{Children, Parameter, Renderable, Type};

/// A renderable C syntax node.
#[derive(Debug, Clone)]
pub enum Element {
    /// `#include "file"` or `#include <file>`, with newline.
    Include(Include),
    /// Literal text, written verbatim and unindented.
    Raw(String),
    /// Children rendered one indentation unit deeper, each prefixed.
    Indented(Children),
    /// `{`, the indented children on their own lines, `}`.
    Braced(Children),
    /// A type bound to an optional name, with no punctuation.
    Parameter(Parameter),
    /// `(a, b, c)`.
    ParameterList(Vec<Parameter>),
    /// A struct member, `type name;` with newline.
    Field(Field),
    /// A function declaration or definition.
    Function(Function),
    /// `typedef type name;` with newline.
    Typedef(Typedef),
    /// `struct Name { ... };` with newline.
    Struct(Struct),
    /// `__attribute__(...)`, with no newline.
    Attribute(Attribute),
    /// An attribute naming a wasm import.
    ImportAttribute(ImportAttribute),
    /// Children rendered back to back, without indentation.
    Concat(Children),
    /// `// ` comment lines, followed by a blank line.
    LineComment(String),
}

impl Element {
    pub fn include(file: impl Into<String>, style: IncludeStyle) -> Self {
        Self::Include(Include::new(file, style))
    }

    pub fn raw(text: impl Into<String>) -> Self {
        Self::Raw(text.into())
    }

    /// A single `\n`.
    pub fn newline() -> Self {
        Self::raw("\n")
    }

    /// A single `;`.
    pub fn semicolon() -> Self {
        Self::raw(";")
    }

    /// Raw text terminated by a newline.
    pub fn line(text: impl Into<String>) -> Self {
        let mut text = text.into();
        text.push('\n');
        Self::Raw(text)
    }

    pub fn indented(children: impl Into<Children>) -> Self {
        Self::Indented(children.into())
    }

    pub fn braced(children: impl Into<Children>) -> Self {
        Self::Braced(children.into())
    }

    pub fn concat(children: impl Into<Children>) -> Self {
        Self::Concat(children.into())
    }

    pub fn parameter(parameter: Parameter) -> Self {
        Self::Parameter(parameter)
    }

    pub fn parameter_list(parameters: impl IntoIterator<Item = Parameter>) -> Self {
        Self::ParameterList(parameters.into_iter().collect())
    }

    pub fn field(name: impl Into<String>, ty: impl Into<Type>) -> Self {
        Self::Field(Field::new(name, ty))
    }

    pub fn typedef(name: impl Into<String>, ty: impl Into<Type>) -> Self {
        Self::Typedef(Typedef::new(name, ty))
    }

    pub fn attribute(contents: impl Into<String>) -> Self {
        Self::Attribute(Attribute::new(contents))
    }

    pub fn import_attribute(import_name: impl Into<String>, module_name: Option<String>) -> Self {
        Self::ImportAttribute(ImportAttribute {
            import_name: import_name.into(),
            module_name,
        })
    }

    pub fn line_comment(text: impl Into<String>) -> Self {
        Self::LineComment(text.into())
    }
}

impl Renderable for Element {
    fn render<S: TextSink>(&self, w: &mut Writer<S>) -> Result<()> {
        match self {
            Self::Include(include) => include.render(w),
            Self::Raw(text) => {
                w.push_raw(text)?;
                Ok(())
            }
            Self::Indented(children) => blocks::render_indented(&children.produce(), w),
            Self::Braced(children) => blocks::render_braced(&children.produce(), w),
            Self::Parameter(parameter) => {
                w.push_raw(&parameter.declare())?;
                Ok(())
            }
            Self::ParameterList(parameters) => fns::render_parameter_list(parameters, w),
            Self::Field(field) => field.render(w),
            Self::Function(function) => function.render(w),
            Self::Typedef(typedef) => typedef.render(w),
            Self::Struct(structure) => structure.render(w),
            Self::Attribute(attribute) => attribute.render(w),
            Self::ImportAttribute(attribute) => attribute.render(w),
            Self::Concat(children) => children.produce().render(w),
            Self::LineComment(text) => comments::render_line_comment(text, w),
        }
    }
}

impl From<Include> for Element {
    fn from(include: Include) -> Self {
        Self::Include(include)
    }
}

impl From<Parameter> for Element {
    fn from(parameter: Parameter) -> Self {
        Self::Parameter(parameter)
    }
}

impl From<Field> for Element {
    fn from(field: Field) -> Self {
        Self::Field(field)
    }
}

impl From<Function> for Element {
    fn from(function: Function) -> Self {
        Self::Function(function)
    }
}

impl From<Typedef> for Element {
    fn from(typedef: Typedef) -> Self {
        Self::Typedef(typedef)
    }
}

impl From<Struct> for Element {
    fn from(structure: Struct) -> Self {
        Self::Struct(structure)
    }
}

impl From<Attribute> for Element {
    fn from(attribute: Attribute) -> Self {
        Self::Attribute(attribute)
    }
}

impl From<ImportAttribute> for Element {
    fn from(attribute: ImportAttribute) -> Self {
        Self::ImportAttribute(attribute)
    }
}
