//! Lowering a manifest into the element tree.

use cemit_codegen::{Element, Elements, Function, Include, Renderable, Struct};
use cemit_core::Result;

use crate::{FunctionDef, IncludeDef, Manifest, ParamDef};

impl Manifest {
    /// Build the element tree for the whole file.
    ///
    /// Layout: header comment, include guard, then includes, typedefs,
    /// structs and functions as blank-line separated sections.
    pub fn to_elements(&self) -> Vec<Element> {
        let sections: Vec<Vec<Element>> = [
            self.includes.iter().map(include_element).collect(),
            self.typedef_section(),
            self.struct_section(),
            self.function_section(),
        ]
        .into_iter()
        .filter(|section: &Vec<Element>| !section.is_empty())
        .collect();
        let has_sections = !sections.is_empty();
        let guard = self.header.guard.as_deref();

        Elements::new()
            .when_some(self.header.comment.as_deref(), |b, comment| {
                b.push(Element::line_comment(comment))
            })
            .when_some(guard, |b, guard| {
                b.push(Element::line(format!("#ifndef {}", guard)))
                    .push(Element::line(format!("#define {}", guard)))
                    .when(has_sections, |b| b.push(Element::newline()))
            })
            .each(sections.into_iter().enumerate(), |b, (i, section)| {
                b.when(i > 0, |b| b.push(Element::newline())).extend(section)
            })
            .when_some(guard, |b, guard| {
                b.push(Element::newline())
                    .push(Element::line(format!("#endif /* {} */", guard)))
            })
            .build()
    }

    /// Render the file with the manifest's indentation.
    pub fn render(&self) -> Result<String> {
        self.to_elements()
            .render_to_string(self.header.indent.clone())
    }

    fn typedef_section(&self) -> Vec<Element> {
        Elements::new()
            .each(&self.typedefs, |b, def| {
                b.extend(comment_lines(def.comment.as_deref()))
                    .push(Element::typedef(&def.name, def.ty.to_type()))
            })
            .build()
    }

    fn struct_section(&self) -> Vec<Element> {
        Elements::new()
            .each(self.structs.iter().enumerate(), |b, (i, def)| {
                let fields: Vec<Element> = def
                    .fields
                    .iter()
                    .map(|field| Element::field(&field.name, field.ty.to_type()))
                    .collect();
                b.when(i > 0, |b| b.push(Element::newline()))
                    .extend(comment_lines(def.comment.as_deref()))
                    .push(Struct::new(&def.name).fields(fields))
            })
            .build()
    }

    fn function_section(&self) -> Vec<Element> {
        let mut b = Elements::new();
        let mut previous: Option<&FunctionDef> = None;
        for def in &self.functions {
            let separate = previous.is_some_and(|prev| prev.is_definition() || def.is_definition());
            b = b
                .when(separate, |b| b.push(Element::newline()))
                .extend(comment_lines(def.comment.as_deref()))
                .extend(function_elements(def));
            previous = Some(def);
        }
        b.build()
    }
}

fn include_element(def: &IncludeDef) -> Element {
    let include = if def.system {
        Include::system(&def.file)
    } else {
        Include::local(&def.file)
    };
    include.into()
}

fn function_elements(def: &FunctionDef) -> Vec<Element> {
    let mut function = Function::new(def.returns.to_type(), &def.name)
        .params(def.params.iter().map(ParamDef::to_parameter));
    for line in &def.body {
        function = function.body_line(line);
    }

    Elements::new()
        .when_some(def.import.as_ref(), |b, import| {
            let import_name = import.name.clone().unwrap_or_else(|| def.name.clone());
            b.push(Element::concat(vec![
                Element::import_attribute(import_name, import.module.clone()),
                Element::newline(),
            ]))
        })
        .push(function)
        .build()
}

/// Item comments, one `//` line each, kept directly above the item.
fn comment_lines(comment: Option<&str>) -> Vec<Element> {
    comment
        .map(|text| {
            text.lines()
                .map(|line| Element::line(format!("// {}", line)))
                .collect()
        })
        .unwrap_or_default()
}
