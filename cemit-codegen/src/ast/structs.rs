//! C struct definitions.

use cemit_core::{Result, TextSink, Writer};

use super::blocks::render_braced;
use crate::{Children, Element, Renderable, Type};

/// A struct member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub ty: Type,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: impl Into<Type>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }
}

impl Renderable for Field {
    fn render<S: TextSink>(&self, w: &mut Writer<S>) -> Result<()> {
        w.push_raw(&self.ty.declare(Some(&self.name)))?;
        w.push_raw(";\n")?;
        Ok(())
    }
}

/// Builder for C structs.
#[derive(Debug, Clone)]
pub struct Struct {
    pub name: String,
    pub fields: Children,
}

impl Struct {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Children::empty(),
        }
    }

    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(Element::Field(field));
        self
    }

    /// Set the member elements.
    pub fn fields(mut self, fields: impl Into<Children>) -> Self {
        self.fields = fields.into();
        self
    }
}

impl Renderable for Struct {
    fn render<S: TextSink>(&self, w: &mut Writer<S>) -> Result<()> {
        w.push_raw("struct ")?;
        w.push_raw(&self.name)?;
        w.push_raw(" ")?;
        render_braced(&self.fields.produce(), w)?;
        w.push_raw(";\n")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use cemit_core::Indent;

    use super::*;
    use crate::{Declarator, TypeDeclaration};

    fn build(s: Struct) -> String {
        s.render_to_string(Indent::default()).unwrap()
    }

    #[test]
    fn test_field() {
        let field = Field::new(
            "name",
            TypeDeclaration::named("char").declarator(Declarator::array(16)),
        );
        assert_eq!(
            field.render_to_string(Indent::default()).unwrap(),
            "char name[16];\n"
        );
    }

    #[test]
    fn test_empty_struct() {
        assert_eq!(build(Struct::new("Foo")), "struct Foo {};\n");
    }

    #[test]
    fn test_struct_with_fields() {
        let s = Struct::new("Point")
            .field(Field::new("x", Type::raw("int")))
            .field(Field::new("y", Type::raw("int")));
        assert_eq!(build(s), "struct Point {\n    int x;\n    int y;\n};\n");
    }

    #[test]
    fn test_struct_with_tab_indent() {
        let s = Struct::new("List").field(Field::new("next", Type::structure("List")));
        assert_eq!(
            s.render_to_string(Indent::Tab).unwrap(),
            "struct List {\n\tstruct List next;\n};\n"
        );
    }

    #[test]
    fn test_nested_struct_member() {
        let inner = Struct::new("Inner").field(Field::new("a", Type::raw("int")));
        let outer = Struct::new("Outer").fields(vec![Element::from(inner)]);
        assert_eq!(
            build(outer),
            "struct Outer {\n    struct Inner {\n        int a;\n    };\n};\n"
        );
    }
}
