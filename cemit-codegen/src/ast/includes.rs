use cemit_core::{Result, TextSink, Writer};

use crate::Renderable;

/// How an include path is delimited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IncludeStyle {
    /// `"file"`, searched relative to the including file first.
    #[default]
    Quotes,
    /// `<file>`, searched on the system include path.
    AngleBrackets,
}

/// `#include` directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Include {
    pub file: String,
    pub style: IncludeStyle,
}

impl Include {
    pub fn new(file: impl Into<String>, style: IncludeStyle) -> Self {
        Self {
            file: file.into(),
            style,
        }
    }

    pub fn local(file: impl Into<String>) -> Self {
        Self::new(file, IncludeStyle::Quotes)
    }

    pub fn system(file: impl Into<String>) -> Self {
        Self::new(file, IncludeStyle::AngleBrackets)
    }
}

impl Renderable for Include {
    fn render<S: TextSink>(&self, w: &mut Writer<S>) -> Result<()> {
        let line = match self.style {
            IncludeStyle::Quotes => format!("#include \"{}\"\n", self.file),
            IncludeStyle::AngleBrackets => format!("#include <{}>\n", self.file),
        };
        w.push_raw(&line)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use cemit_core::Indent;

    use super::*;

    #[test]
    fn test_quoted_include() {
        let include = Include::local("foo");
        assert_eq!(
            include.render_to_string(Indent::default()).unwrap(),
            "#include \"foo\"\n"
        );
    }

    #[test]
    fn test_system_include() {
        let include = Include::system("stdint.h");
        assert_eq!(
            include.render_to_string(Indent::default()).unwrap(),
            "#include <stdint.h>\n"
        );
    }
}
