//! Core output primitives for cemit.
//!
//! This crate provides the pieces every render pass writes through:
//! the [`TextSink`] abstraction, the indentation-tracking [`Writer`],
//! indentation configuration and generated-file output.

mod error;
mod file;
mod indent;
mod sink;
mod writer;

pub use error::{Error, Result};
// File operations
pub use file::{File, FileRules, Overwrite, WriteResult};
pub use indent::Indent;
// Output
pub use sink::{FmtSink, IoSink, TextSink};
pub use writer::Writer;
