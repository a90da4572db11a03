//! GCC-style `__attribute__` annotations.

use cemit_core::{Result, TextSink, Writer};

use crate::Renderable;

/// `__attribute__(<contents>)`, rendered without a trailing newline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub contents: String,
}

impl Attribute {
    pub fn new(contents: impl Into<String>) -> Self {
        Self {
            contents: contents.into(),
        }
    }
}

impl Renderable for Attribute {
    fn render<S: TextSink>(&self, w: &mut Writer<S>) -> Result<()> {
        w.push_raw("__attribute__(")?;
        w.push_raw(&self.contents)?;
        w.push_raw(")")?;
        Ok(())
    }
}

/// Marks a declaration as imported from a wasm host module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportAttribute {
    pub import_name: String,
    pub module_name: Option<String>,
}

impl ImportAttribute {
    pub fn new(import_name: impl Into<String>) -> Self {
        Self {
            import_name: import_name.into(),
            module_name: None,
        }
    }

    pub fn module(mut self, module_name: impl Into<String>) -> Self {
        self.module_name = Some(module_name.into());
        self
    }

    /// The equivalent plain attribute.
    pub fn to_attribute(&self) -> Attribute {
        let mut contents = format!("__import_name__(\"{}\")", self.import_name);
        if let Some(module_name) = &self.module_name {
            contents.push_str(&format!(", __module_name__(\"{}\")", module_name));
        }
        Attribute::new(contents)
    }
}

impl Renderable for ImportAttribute {
    fn render<S: TextSink>(&self, w: &mut Writer<S>) -> Result<()> {
        self.to_attribute().render(w)
    }
}
