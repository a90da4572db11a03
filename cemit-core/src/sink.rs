//! Append-only text sinks that a [`Writer`](crate::Writer) renders into.

use crate::Result;

/// An append-only destination for rendered text.
///
/// Rendering only ever appends; a sink is never read back.
pub trait TextSink {
    /// Append `s` to the sink.
    fn write_str(&mut self, s: &str) -> Result<()>;
}

impl TextSink for String {
    fn write_str(&mut self, s: &str) -> Result<()> {
        self.push_str(s);
        Ok(())
    }
}

impl<T: TextSink + ?Sized> TextSink for &mut T {
    fn write_str(&mut self, s: &str) -> Result<()> {
        (**self).write_str(s)
    }
}

/// Adapts any [`std::io::Write`] (files, stdout, buffers) into a sink.
#[derive(Debug)]
pub struct IoSink<W>(pub W);

impl<W: std::io::Write> TextSink for IoSink<W> {
    fn write_str(&mut self, s: &str) -> Result<()> {
        self.0.write_all(s.as_bytes())?;
        Ok(())
    }
}

/// Adapts any [`std::fmt::Write`] into a sink.
#[derive(Debug)]
pub struct FmtSink<W>(pub W);

impl<W: std::fmt::Write> TextSink for FmtSink<W> {
    fn write_str(&mut self, s: &str) -> Result<()> {
        self.0.write_str(s)?;
        Ok(())
    }
}
