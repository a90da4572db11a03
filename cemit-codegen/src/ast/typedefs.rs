use cemit_core::{Result, TextSink, Writer};

use crate::{Renderable, Type};

/// `typedef <type> <name>;`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Typedef {
    pub name: String,
    pub ty: Type,
}

impl Typedef {
    pub fn new(name: impl Into<String>, ty: impl Into<Type>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }
}

impl Renderable for Typedef {
    fn render<S: TextSink>(&self, w: &mut Writer<S>) -> Result<()> {
        w.push_raw("typedef ")?;
        w.push_raw(&self.ty.declare(Some(&self.name)))?;
        w.push_raw(";\n")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use cemit_core::Indent;

    use super::*;
    use crate::{Declarator, Parameter, TypeDeclaration};

    #[test]
    fn test_simple_typedef() {
        let t = Typedef::new("u32", Type::raw("unsigned int"));
        assert_eq!(
            t.render_to_string(Indent::default()).unwrap(),
            "typedef unsigned int u32;\n"
        );
    }

    #[test]
    fn test_function_pointer_typedef() {
        let ty = TypeDeclaration::named("void").declarators([
            Declarator::pointer(),
            Declarator::function([Parameter::new(Type::pointer_to("void"))]),
        ]);
        let t = Typedef::new("free_fn", ty);
        assert_eq!(
            t.render_to_string(Indent::default()).unwrap(),
            "typedef void (*free_fn)(void*);\n"
        );
    }
}
