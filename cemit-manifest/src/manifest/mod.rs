//! Manifest types and parsing for cemit header descriptions.

mod file;
mod parse;
mod spans;
mod types;
mod validate;

pub use file::HeaderFile;
pub use parse::{Format, parse_manifest};
pub use types::{DeclarationDef, DeclaratorDef, ParamDef, QualifierDef, SpecifierDef, TypeDef};
pub use validate::ParseContext;

use cemit_core::Indent;
use serde::Deserialize;

/// Root manifest describing one C header or source file.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// File-level settings
    pub header: HeaderConfig,

    /// `#include` directives, in order
    #[serde(default)]
    pub includes: Vec<IncludeDef>,

    /// Type aliases
    #[serde(default)]
    pub typedefs: Vec<TypedefDef>,

    /// Struct definitions
    #[serde(default)]
    pub structs: Vec<StructDef>,

    /// Function declarations and definitions
    #[serde(default)]
    pub functions: Vec<FunctionDef>,
}

impl Manifest {
    /// Total number of top-level declarations (excluding includes).
    pub fn declaration_count(&self) -> usize {
        self.typedefs.len() + self.structs.len() + self.functions.len()
    }
}

/// The `[header]` table.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HeaderConfig {
    /// Output file name, e.g. `bindings.h`
    pub name: String,

    /// Include guard macro; wraps the file in `#ifndef`/`#define`/`#endif`
    pub guard: Option<String>,

    /// Leading comment, one `//` line per line of text
    pub comment: Option<String>,

    /// Indentation unit: a width or `"tab"`
    #[serde(default)]
    pub indent: Indent,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IncludeDef {
    pub file: String,

    /// Use `<file>` instead of `"file"`
    #[serde(default)]
    pub system: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TypedefDef {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeDef,
    pub comment: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StructDef {
    pub name: String,
    #[serde(default)]
    pub fields: Vec<FieldDef>,
    pub comment: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldDef {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeDef,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FunctionDef {
    pub name: String,

    /// Return type
    pub returns: TypeDef,

    #[serde(default)]
    pub params: Vec<ParamDef>,

    /// Body statements, one per line; no body means a declaration
    #[serde(default)]
    pub body: Vec<String>,

    /// Wasm import naming
    pub import: Option<ImportDef>,

    pub comment: Option<String>,
}

impl FunctionDef {
    /// Whether this is a definition rather than a declaration.
    pub fn is_definition(&self) -> bool {
        !self.body.is_empty()
    }
}

/// `import = { name = "...", module = "..." }`
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ImportDef {
    /// Import name; defaults to the function name
    pub name: Option<String>,
    pub module: Option<String>,
}
