//! C function declarations and definitions.

use cemit_core::{Result, TextSink, Writer};

use super::blocks::render_braced;
use crate::{Children, Element, Parameter, Renderable, Type};

/// Builder for C functions.
///
/// A function whose body produces no elements is rendered as a
/// declaration (`int foo(void);`); otherwise as a definition.
#[derive(Debug, Clone)]
pub struct Function {
    pub name: String,
    pub return_type: Type,
    pub params: Vec<Parameter>,
    pub body: Children,
}

impl Function {
    pub fn new(return_type: impl Into<Type>, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            return_type: return_type.into(),
            params: Vec::new(),
            body: Children::empty(),
        }
    }

    pub fn param(mut self, param: Parameter) -> Self {
        self.params.push(param);
        self
    }

    pub fn params(mut self, params: impl IntoIterator<Item = Parameter>) -> Self {
        self.params.extend(params);
        self
    }

    /// Set the body.
    pub fn body(mut self, body: impl Into<Children>) -> Self {
        self.body = body.into();
        self
    }

    /// Add a statement line to the body.
    pub fn body_line(mut self, line: impl Into<String>) -> Self {
        self.body.push(Element::line(line));
        self
    }
}

impl Renderable for Function {
    fn render<S: TextSink>(&self, w: &mut Writer<S>) -> Result<()> {
        w.push_raw(&self.return_type.declare(Some(&self.name)))?;
        render_parameter_list(&self.params, w)?;

        let body = self.body.produce();
        if body.is_empty() {
            w.push_raw(";\n")?;
        } else {
            w.push_raw(" ")?;
            render_braced(&body, w)?;
            w.push_raw("\n")?;
        }
        Ok(())
    }
}

pub(crate) fn render_parameter_list<S: TextSink>(
    params: &[Parameter],
    w: &mut Writer<S>,
) -> Result<()> {
    w.push_raw("(")?;
    for (i, param) in params.iter().enumerate() {
        if i > 0 {
            w.push_raw(", ")?;
        }
        w.push_raw(&param.declare())?;
    }
    w.push_raw(")")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use cemit_core::Indent;

    use super::*;
    use crate::{Declarator, TypeDeclaration};

    fn build(function: Function) -> String {
        function.render_to_string(Indent::default()).unwrap()
    }

    #[test]
    fn test_declaration() {
        let f = Function::new(Type::named("int"), "foo")
            .param(Parameter::named("bar", Type::named("char")))
            .param(Parameter::named("baz", Type::named("void")));
        assert_eq!(build(f), "int foo(char bar, void baz);\n");
    }

    #[test]
    fn test_no_params() {
        assert_eq!(build(Function::new(Type::raw("void"), "init")), "void init();\n");
    }

    #[test]
    fn test_void_param() {
        let f = Function::new(Type::raw("int"), "main").param(Parameter::void());
        assert_eq!(build(f), "int main(void);\n");
    }

    #[test]
    fn test_definition() {
        let f = Function::new(Type::raw("int"), "add")
            .param(Parameter::named("a", Type::raw("int")))
            .param(Parameter::named("b", Type::raw("int")))
            .body_line("return a + b;");
        assert_eq!(build(f), "int add(int a, int b) {\n    return a + b;\n}\n");
    }

    #[test]
    fn test_pointer_return_type() {
        let f = Function::new(
            TypeDeclaration::structure("Node").declarator(Declarator::pointer()),
            "node_new",
        )
        .param(Parameter::void());
        assert_eq!(build(f), "struct Node *node_new(void);\n");
    }

    #[test]
    fn test_deferred_body() {
        let f = Function::new(Type::raw("void"), "reset").body(Children::deferred(|| {
            vec![Element::line("count = 0;")]
        }));
        assert_eq!(build(f), "void reset() {\n    count = 0;\n}\n");
    }
}
