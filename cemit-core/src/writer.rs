//! Indentation-tracking writer for emitting C code.

use crate::{Indent, Result, TextSink};

/// Appends rendered text to a sink while tracking the current indentation prefix.
///
/// The prefix grows by one unit on [`push_indent`](Self::push_indent) and shrinks
/// by exactly that many characters on [`push_dedent`](Self::push_dedent), so its
/// length is always a whole multiple of the unit length.
///
/// # Example
///
/// ```
/// use cemit_core::Writer;
///
/// let mut writer = Writer::new();
/// writer.push_line("struct Foo {").unwrap();
/// writer
///     .indented(|w| {
///         w.push_line("int x;")?;
///         Ok(())
///     })
///     .unwrap();
/// writer.push_line("};").unwrap();
///
/// assert_eq!(writer.as_str(), "struct Foo {\n    int x;\n};\n");
/// ```
#[derive(Debug, Clone)]
pub struct Writer<S = String> {
    sink: S,
    unit: String,
    prefix: String,
}

impl Writer<String> {
    /// Create a writer over an empty string with 4-space indentation.
    pub fn new() -> Self {
        Self::with_indent(Indent::default())
    }

    /// Create a writer over an empty string with the given indentation.
    pub fn with_indent(indent: Indent) -> Self {
        Self::with_sink(String::new(), indent)
    }

    /// Get the text rendered so far.
    pub fn as_str(&self) -> &str {
        &self.sink
    }
}

impl Default for Writer<String> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: TextSink> Writer<S> {
    /// Create a writer that appends to `sink`.
    pub fn with_sink(sink: S, indent: Indent) -> Self {
        Self {
            sink,
            unit: indent.unit(),
            prefix: String::new(),
        }
    }

    /// Append raw text without indentation or newline.
    pub fn push_raw(&mut self, s: &str) -> Result<&mut Self> {
        self.sink.write_str(s)?;
        Ok(self)
    }

    /// Append the current indentation prefix.
    pub fn push_prefix(&mut self) -> Result<&mut Self> {
        if !self.prefix.is_empty() {
            self.sink.write_str(&self.prefix)?;
        }
        Ok(self)
    }

    /// Append a line at the current indentation.
    pub fn push_line(&mut self, s: &str) -> Result<&mut Self> {
        self.push_prefix()?;
        self.sink.write_str(s)?;
        self.sink.write_str("\n")?;
        Ok(self)
    }

    /// Append a blank line (no indentation).
    pub fn push_blank(&mut self) -> Result<&mut Self> {
        self.sink.write_str("\n")?;
        Ok(self)
    }

    /// Increase indentation by one unit.
    pub fn push_indent(&mut self) -> &mut Self {
        self.prefix.push_str(&self.unit);
        self
    }

    /// Decrease indentation by one unit.
    pub fn push_dedent(&mut self) -> &mut Self {
        let len = self.prefix.len().saturating_sub(self.unit.len());
        self.prefix.truncate(len);
        self
    }

    /// Run `f` one indentation unit deeper.
    ///
    /// The unit is popped again whether or not `f` succeeds.
    pub fn indented<T, F>(&mut self, f: F) -> Result<T>
    where
        F: FnOnce(&mut Self) -> Result<T>,
    {
        self.push_indent();
        let result = f(self);
        self.push_dedent();
        result
    }

    /// Get the current indentation prefix.
    pub fn indentation(&self) -> &str {
        &self.prefix
    }

    /// Get the text of one indentation unit.
    pub fn unit(&self) -> &str {
        &self.unit
    }

    /// Get the current nesting depth.
    pub fn depth(&self) -> usize {
        if self.unit.is_empty() {
            0
        } else {
            self.prefix.len() / self.unit.len()
        }
    }

    /// Get a reference to the underlying sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Consume the writer and return the sink.
    pub fn into_inner(self) -> S {
        self.sink
    }
}
