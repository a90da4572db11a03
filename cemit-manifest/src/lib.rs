//! Declarative C file manifests.
//!
//! A manifest describes one header or source file in TOML (or JSON):
//!
//! ```toml
//! [header]
//! name = "shapes.h"
//! guard = "SHAPES_H"
//!
//! [[structs]]
//! name = "Point"
//! fields = [{ name = "x", type = "int" }, { name = "y", type = "int" }]
//! ```
//!
//! Parsing validates every identifier and reports problems as
//! [`miette`] diagnostics pointing into the source. A parsed
//! [`Manifest`] lowers to `cemit_codegen` elements and renders to text.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod lower;
mod manifest;

pub use error::{Error, Result, SourceContext};
pub use manifest::*;
